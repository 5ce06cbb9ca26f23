pub mod analysis_handler;
pub mod model_handler;
pub mod snippet_handler;

pub use analysis_handler::{generate_analysis, health_check};
pub use model_handler::list_models;
pub use snippet_handler::render_snippets;
