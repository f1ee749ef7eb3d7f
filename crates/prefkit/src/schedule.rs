// File: src/schedule.rs
// Purpose: Timer plumbing that delivers deferred events on the page channel

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Send `event` on `tx` after `delay`. Dropped receivers are ignored.
pub fn send_after<T: Send + 'static>(
    tx: &mpsc::UnboundedSender<T>,
    delay: Duration,
    event: T,
) -> JoinHandle<()> {
    let tx = tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(event);
    })
}

/// Collapses bursts of schedule calls into a single delivery.
///
/// Each call aborts the previously pending timer, so only the most recent
/// event reaches the channel once the delay elapses.
#[derive(Debug)]
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(tx: mpsc::UnboundedSender<T>, delay: Duration) -> Self {
        Self {
            tx,
            delay,
            pending: None,
        }
    }

    /// Schedule `event`, discarding any event still waiting to fire
    pub fn schedule(&mut self, event: T) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.pending = Some(send_after(&self.tx, self.delay, event));
    }

    /// Drop the pending event, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Let a freshly spawned timer task register its sleep before the
    /// clock moves, then let fired timers deliver afterwards
    async fn tick(duration: Duration) {
        tokio::task::yield_now().await;
        tokio::time::advance(duration).await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_after_waits_for_the_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        send_after(&tx, Duration::from_millis(100), 7u32);

        tick(Duration::from_millis(99)).await;
        assert!(rx.try_recv().is_err());

        tick(Duration::from_millis(1)).await;
        assert_eq!(rx.try_recv(), Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_delivers_only_the_latest_event() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(tx, Duration::from_millis(150));

        debouncer.schedule(1u32);
        tick(Duration::from_millis(50)).await;
        debouncer.schedule(2u32);
        tick(Duration::from_millis(50)).await;
        debouncer.schedule(3u32);
        tick(Duration::from_millis(150)).await;

        assert_eq!(rx.try_recv(), Ok(3));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(tx, Duration::from_millis(150));

        debouncer.schedule(1u32);
        debouncer.cancel();

        tick(Duration::from_millis(300)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_restarts_the_clock() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(tx, Duration::from_millis(150));

        debouncer.schedule(1u32);
        tick(Duration::from_millis(100)).await;
        debouncer.schedule(2u32);

        // 150ms after the first call but only 50ms after the second
        tick(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());

        tick(Duration::from_millis(100)).await;
        assert_eq!(rx.try_recv(), Ok(2));
    }
}
