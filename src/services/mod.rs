pub mod analysis_service;
pub mod model_service;
pub mod request_builder;
pub mod response_normalizer;
pub mod snippet_service;

pub use analysis_service::{AnalysisService, GenerateAnalysisInput};
pub use model_service::ModelService;
