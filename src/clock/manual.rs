//! Manually advanced tick source for tests.

use super::{TickSource, Ticker};
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::mpsc;

/// Tick source advanced by hand with [`ManualTickSource::advance`].
///
/// Only the most recently issued ticker receives ticks; earlier tickers
/// wait forever.
#[derive(Debug, Default)]
pub struct ManualTickSource {
    current: Mutex<Option<mpsc::UnboundedSender<()>>>,
}

impl ManualTickSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `n` ticks to the live ticker. Returns how many were delivered.
    pub fn advance(&self, n: usize) -> usize {
        let Ok(guard) = self.current.lock() else {
            return 0;
        };
        let Some(tx) = guard.as_ref() else {
            return 0;
        };
        (0..n).take_while(|_| tx.send(()).is_ok()).count()
    }

    /// True while a ticker is issued and still listening.
    pub fn has_listener(&self) -> bool {
        self.current
            .lock()
            .map(|guard| guard.as_ref().is_some_and(|tx| !tx.is_closed()))
            .unwrap_or(false)
    }
}

impl TickSource for ManualTickSource {
    fn ticker(&self) -> Box<dyn Ticker> {
        let (tx, rx) = mpsc::unbounded_channel();
        if let Ok(mut guard) = self.current.lock() {
            *guard = Some(tx);
        }
        Box::new(ManualTicker { rx })
    }
}

struct ManualTicker {
    rx: mpsc::UnboundedReceiver<()>,
}

#[async_trait]
impl Ticker for ManualTicker {
    async fn tick(&mut self) {
        if self.rx.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    }
}
