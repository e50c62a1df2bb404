use super::*;
use rps_gesture::*;

/// Opaque image model.
///
/// Owns raw inference only: thresholding and the decision of what to do
/// with a failure belong to [`Adapter`].
#[async_trait::async_trait]
pub trait Classifier: Send + Sync {
    async fn infer(&self, frame: &Frame) -> anyhow::Result<Distribution>;
}

/// Produces a ready classifier, typically by reading model weights from
/// wherever they are packaged.
#[async_trait::async_trait]
pub trait Loader: Send + Sync {
    async fn load(&self) -> anyhow::Result<Box<dyn Classifier>>;
}
