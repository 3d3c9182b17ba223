mod classifier;
mod config;
mod error;
mod features;
mod gesture;
mod normalizer;
mod pipeline;
mod tracker;

pub use classifier::{ClassificationResult, Classifier};
pub use config::RecognizerConfig;
pub use error::RecognitionError;
pub use features::FeatureExtractor;
pub use gesture::{GestureScript, Glyph};
pub use normalizer::{ImageNormalizer, NORMALIZED_SIZE, SCALED_MAX};
pub use pipeline::{ClassifyToken, PipelineState, RecognitionPipeline, RecognizeOutcome};
pub use tracker::{BoundingBoxTracker, extend_rect};
