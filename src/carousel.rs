//! Auto-advancing hot deals carousel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Current page of a carousel with `len` pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next page, wrapping to the first. An empty carousel stays
    /// on page 0.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len.max(1);
        self.index
    }
}

/// Periodic task driving a [`Carousel`].
///
/// Dropping the ticker cancels it; the callback is not invoked after
/// [`CarouselTicker::stop`] returns.
pub struct CarouselTicker {
    handle: JoinHandle<()>,
    cancelled: Arc<AtomicBool>,
}

impl CarouselTicker {
    /// Must be called from within a tokio runtime
    pub fn spawn<F>(period: Duration, mut carousel: Carousel, mut on_advance: F) -> Self
    where
        F: FnMut(usize) + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if flag.load(Ordering::Acquire) {
                    break;
                }
                let index = carousel.advance();
                debug!(index, len = carousel.len(), "Carousel advanced");
                on_advance(index);
            }
        });

        Self { handle, cancelled }
    }

    pub fn stop(self) {
        // Drop does the work.
    }

    pub fn is_running(&self) -> bool {
        !self.cancelled.load(Ordering::Acquire) && !self.handle.is_finished()
    }
}

impl Drop for CarouselTicker {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        self.handle.abort();
    }
}
