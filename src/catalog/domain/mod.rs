pub mod analysis_result;
pub mod component;
pub mod file_limit;

pub use analysis_result::AnalysisResult;
pub use component::Component;
pub use file_limit::FileLimit;
