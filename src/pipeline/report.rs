// file: src/pipeline/report.rs
// description: analysis outcome, stage notices and terminal no-data states

use crate::models::FrequencyTable;
use crate::pipeline::progress::PipelineStats;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// Stage at which the lemma sequence (or the text) ran dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyStage {
    NoText,
    BasicFiltering,
    StopwordRemoval,
    AllProcessing,
}

impl EmptyStage {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyStage::NoText => {
                "No text could be extracted from the PDF, or the file is empty."
            }
            EmptyStage::BasicFiltering => "No processable words found after initial filtering.",
            EmptyStage::StopwordRemoval => "No words remained after stopword removal.",
            EmptyStage::AllProcessing => "No words remained after all processing steps.",
        }
    }
}

impl fmt::Display for EmptyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    Table(FrequencyTable),
    NoData(EmptyStage),
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub outcome: AnalysisOutcome,
    pub notices: Vec<Notice>,
    pub stats: PipelineStats,
}

impl AnalysisReport {
    pub fn table(&self) -> Option<&FrequencyTable> {
        match &self.outcome {
            AnalysisOutcome::Table(table) => Some(table),
            AnalysisOutcome::NoData(_) => None,
        }
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Notice> {
        self.notices
            .iter()
            .filter(|n| n.level == NoticeLevel::Warning)
    }
}
