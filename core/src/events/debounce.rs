//! Trailing-edge debounce primitive.
//!
//! Collapses bursts of calls into one invocation per quiescence window:
//! every call supersedes the pending one and re-arms the timer; the wrapped
//! action runs with the **last** call's arguments once the window elapses
//! with no further calls. There is no intermediate queueing and no
//! maximum-wait bound.

use std::time::Duration;

use tokio::sync::mpsc;

/// Debounced wrapper around an action.
///
/// The timer and the last-arguments holder live in a spawned task, so
/// [`call`](Self::call) is synchronous and never blocks. A pending
/// invocation is only ever superseded, not cancelled; if the handle is
/// dropped while a call is pending, the pending call is flushed.
#[derive(Debug)]
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the debounce task. Must be called within a tokio runtime.
    pub fn spawn<F>(window: Duration, mut action: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();

        tokio::spawn(async move {
            while let Some(first) = rx.recv().await {
                let mut pending = first;
                loop {
                    match tokio::time::timeout(window, rx.recv()).await {
                        // Another call within the window: supersede and re-arm.
                        Ok(Some(next)) => pending = next,
                        // Sender dropped: flush the pending call and stop.
                        Ok(None) => {
                            action(pending);
                            return;
                        }
                        // Quiescence window elapsed: fire.
                        Err(_) => {
                            action(pending);
                            break;
                        }
                    }
                }
            }
        });

        Self { tx }
    }

    /// Schedule an invocation with these arguments, superseding any pending
    /// one and resetting the quiescence timer.
    pub fn call(&self, args: T) {
        // Receiver only disappears when the task exits at shutdown.
        let _ = self.tx.send(args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const WINDOW: Duration = Duration::from_millis(500);

    fn recording_debouncer() -> (Debouncer<u32>, Arc<Mutex<Vec<u32>>>) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let debouncer = Debouncer::spawn(WINDOW, move |n| {
            sink.lock().expect("lock").push(n);
        });
        (debouncer, fired)
    }

    async fn settle() {
        // Let the debounce task observe pending channel messages.
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_to_last_call() {
        let (debouncer, fired) = recording_debouncer();

        for n in 1..=5 {
            debouncer.call(n);
            settle().await;
            tokio::time::advance(Duration::from_millis(100)).await;
        }
        assert!(fired.lock().expect("lock").is_empty());

        tokio::time::advance(WINDOW).await;
        settle().await;

        assert_eq!(*fired.lock().expect("lock"), vec![5]);
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_calls_each_fire() {
        let (debouncer, fired) = recording_debouncer();

        debouncer.call(1);
        settle().await;
        tokio::time::advance(WINDOW + Duration::from_millis(1)).await;
        settle().await;

        debouncer.call(2);
        settle().await;
        tokio::time::advance(WINDOW + Duration::from_millis(1)).await;
        settle().await;

        assert_eq!(*fired.lock().expect("lock"), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_flushes_pending_call() {
        let (debouncer, fired) = recording_debouncer();

        debouncer.call(7);
        settle().await;
        drop(debouncer);
        settle().await;

        assert_eq!(*fired.lock().expect("lock"), vec![7]);
    }
}
