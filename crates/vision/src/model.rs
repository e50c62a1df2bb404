use super::*;
use tokio::sync::OnceCell;

/// Load-once handle around a classifier.
///
/// Model weights are expensive to bring up, so the first [`Model::load`]
/// runs the loader and every concurrent caller waits on that same load.
/// Once it succeeds, later calls return immediately. A failed load leaves
/// the handle empty and the next call tries again.
///
/// Share it behind an `Arc`; every [`Adapter`] built from the same handle
/// sees the same classifier.
pub struct Model {
    loader: Option<Box<dyn Loader>>,
    cell: OnceCell<Box<dyn Classifier>>,
}

impl Model {
    pub fn new<L>(loader: L) -> Self
    where
        L: Loader + 'static,
    {
        Self {
            loader: Some(Box::new(loader)),
            cell: OnceCell::new(),
        }
    }
    /// A handle that is ready from the start.
    pub fn preloaded<C>(classifier: C) -> Self
    where
        C: Classifier + 'static,
    {
        Self {
            loader: None,
            cell: OnceCell::new_with(Some(Box::new(classifier) as Box<dyn Classifier>)),
        }
    }
    /// Non-blocking: true only once a load has completed successfully.
    pub fn ready(&self) -> bool {
        self.cell.initialized()
    }
    pub fn get(&self) -> Option<&dyn Classifier> {
        self.cell.get().map(|c| c.as_ref())
    }
    /// Brings the model up if it isn't already. Returns whether it is ready.
    pub async fn load(&self) -> bool {
        let Some(loader) = self.loader.as_ref() else {
            return self.ready();
        };
        match self.cell.get_or_try_init(|| loader.load()).await {
            Ok(_) => true,
            Err(e) => {
                log::warn!("[model] load failed: {:#}", e);
                false
            }
        }
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model").field("ready", &self.ready()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_gesture::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    struct Constant;
    #[async_trait::async_trait]
    impl Classifier for Constant {
        async fn infer(&self, _: &Frame) -> anyhow::Result<Distribution> {
            Ok(Distribution::certain(Gesture::Rock))
        }
    }

    struct Slow(Arc<AtomicUsize>);
    #[async_trait::async_trait]
    impl Loader for Slow {
        async fn load(&self) -> anyhow::Result<Box<dyn Classifier>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok(Box::new(Constant))
        }
    }

    struct Flaky(Arc<AtomicUsize>);
    #[async_trait::async_trait]
    impl Loader for Flaky {
        async fn load(&self) -> anyhow::Result<Box<dyn Classifier>> {
            match self.0.fetch_add(1, Ordering::SeqCst) {
                0 => Err(anyhow::anyhow!("weights missing")),
                _ => Ok(Box::new(Constant)),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_loads_share_one_loader_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let model = Model::new(Slow(calls.clone()));
        assert!(!model.ready());
        let (a, b) = tokio::join!(model.load(), model.load());
        assert!(a && b);
        assert!(model.ready());
        assert!(model.load().await);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_load_can_retry() {
        let calls = Arc::new(AtomicUsize::new(0));
        let model = Model::new(Flaky(calls.clone()));
        assert!(!model.load().await);
        assert!(!model.ready());
        assert!(model.load().await);
        assert!(model.ready());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn preloaded_is_ready() {
        let model = Model::preloaded(Constant);
        assert!(model.ready());
        assert!(model.load().await);
        assert!(model.get().is_some());
    }
}
