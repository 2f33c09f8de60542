use std::{io, sync::Arc};

use axum::Router;
use tokio::{
    net::TcpListener,
    sync::{Mutex, Notify},
};

/// One-shot slot a route handler fills to end an OAuth callback listener.
///
/// Only the first value is kept; later callbacks are ignored.
pub struct Capture<T> {
    value: Mutex<Option<T>>,
    filled: Notify,
}

impl<T> Capture<T> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            value: Mutex::new(None),
            filled: Notify::new(),
        })
    }

    /// Stores `value` unless the slot is already filled. Returns whether it was stored.
    pub async fn fill(&self, value: T) -> bool {
        let mut slot = self.value.lock().await;
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        self.filled.notify_one();
        true
    }

    pub async fn is_filled(&self) -> bool {
        self.value.lock().await.is_some()
    }

    pub async fn take(&self) -> Option<T> {
        self.value.lock().await.take()
    }

    async fn wait(&self) {
        loop {
            if self.is_filled().await {
                return;
            }
            self.filled.notified().await;
        }
    }
}

/// Serves `app` on `listener` until a handler fills `capture`, then returns the
/// captured value.
///
/// Requests in flight when the slot is filled still get their response. There
/// is no timeout: the call blocks until the browser round-trip completes or
/// the process is interrupted.
pub async fn serve_until_captured<T>(
    listener: TcpListener,
    app: Router,
    capture: Arc<Capture<T>>,
) -> io::Result<T>
where
    T: Send + 'static,
{
    let signal = Arc::clone(&capture);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { signal.wait().await })
        .await?;

    capture
        .take()
        .await
        .ok_or_else(|| io::Error::other("callback listener stopped before a callback arrived"))
}
