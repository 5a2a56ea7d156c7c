// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod analyzer;
mod progress;
mod report;

pub use analyzer::{AnalysisOptions, WordAnalyzer};
pub use progress::{PipelineStats, ProgressTracker};
pub use report::{AnalysisOutcome, AnalysisReport, EmptyStage, Notice, NoticeLevel};
