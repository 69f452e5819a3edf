use hsnp_core::presenter::{MetricsSource, MetricsView};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A mounted dashboard. The view is available immediately (fallback
/// records); one fetch runs in the background and may replace it.
///
/// Dropping the presenter aborts a fetch that has not finished yet.
pub struct MetricsPresenter {
    rx: watch::Receiver<MetricsView>,
    task: JoinHandle<()>,
}

impl MetricsPresenter {
    /// Mounts the dashboard and returns it together with the view for the
    /// first render. That view is read before the fetch is spawned, so it is
    /// always the fallback.
    pub fn mount<S>(source: S) -> (Self, MetricsView)
    where
        S: MetricsSource + Send + Sync + 'static,
    {
        let (tx, rx) = watch::channel(MetricsView::Default);
        let initial = rx.borrow().clone();
        let task = tokio::spawn(async move {
            let outcome = source.fetch().await;
            if let Err(err) = &outcome {
                tracing::debug!(error = %err, "metrics fetch failed, keeping current view");
            }
            tx.send_if_modified(|view| {
                let next = view.clone().transition(outcome);
                if next == *view {
                    return false;
                }
                *view = next;
                true
            });
        });
        (Self { rx, task }, initial)
    }

    #[cfg(test)]
    fn view(&self) -> MetricsView {
        self.rx.borrow().clone()
    }

    /// Waits for the fetch to finish and returns the resulting view. Never
    /// returns while the fetch is still pending.
    pub async fn settled(&mut self) -> MetricsView {
        // A failed fetch publishes nothing; the sender drop ends the wait.
        let _ = self.rx.changed().await;
        self.rx.borrow().clone()
    }
}

impl Drop for MetricsPresenter {
    fn drop(&mut self) {
        self.task.abort();
    }
}
