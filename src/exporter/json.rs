// file: src/exporter/json.rs
// description: json manifest describing one analysis run and its exported files

use crate::error::Result;
use crate::models::LanguageProfile;
use crate::pipeline::{AnalysisOptions, AnalysisReport, Notice, PipelineStats};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub source_file: String,
    pub language: String,
    pub options: AnalysisOptions,
    pub total_words: usize,
    pub unique_words: usize,
    pub stats: PipelineStats,
    pub notices: Vec<Notice>,
    pub files: Vec<String>,
}

impl ExportManifest {
    pub fn new(
        source_file: &str,
        profile: &LanguageProfile,
        options: AnalysisOptions,
        report: &AnalysisReport,
        files: Vec<String>,
    ) -> Self {
        let (total_words, unique_words) = report
            .table()
            .map(|t| (t.total(), t.len()))
            .unwrap_or((0, 0));

        Self {
            exported_at: Utc::now().to_rfc3339(),
            source_file: source_file.to_string(),
            language: profile.display_name.to_string(),
            options,
            total_words,
            unique_words,
            stats: report.stats.clone(),
            notices: report.notices.clone(),
            files,
        }
    }

    pub fn to_bytes(&self, pretty: bool) -> Result<Vec<u8>> {
        let bytes = if pretty {
            serde_json::to_vec_pretty(self)?
        } else {
            serde_json::to_vec(self)?
        };
        Ok(bytes)
    }
}
