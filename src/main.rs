use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotube::{
    cli::{self, MigrateOptions, ReportFormat},
    config, utils, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify and cache the token
    Auth,

    /// Export Spotify playlists and liked songs to YouTube
    Migrate(MigrateArgs),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct MigrateArgs {
    /// Use a Spotify OAuth token (requires the `playlist-read-private` permission)
    #[clap(long, value_name = "OAUTH_TOKEN")]
    token: Option<String>,

    /// Dump playlists or liked songs, or both (liked, playlists, liked,playlists)
    #[clap(long, default_value = "playlists", value_parser = utils::parse_dump_selection)]
    dump: utils::DumpSelection,

    /// Output format of the final report
    #[clap(long, value_enum, default_value_t = ReportFormat::Txt)]
    format: ReportFormat,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Migrate(args) => {
            cli::migrate(MigrateOptions {
                token: args.token,
                dump: args.dump,
                format: args.format,
            })
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
