// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub models: ModelConfig,
    pub dictionary: DictionaryConfig,
    pub analysis: AnalysisConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    pub models_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DictionaryConfig {
    pub dictionaries_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    pub default_language: String,
    pub remove_stopwords: bool,
    pub dictionary_filter: bool,
    pub display_rows: usize,
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub sheet_name: String,
    #[serde(default = "default_true")]
    pub write_spreadsheet: bool,
    #[serde(default = "default_true")]
    pub write_csv: bool,
    #[serde(default)]
    pub write_manifest: bool,
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("VOCABULATOR")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            models: ModelConfig {
                models_dir: PathBuf::from("./models"),
            },
            dictionary: DictionaryConfig {
                dictionaries_dir: PathBuf::from("./dictionaries"),
            },
            analysis: AnalysisConfig {
                default_language: "English".to_string(),
                remove_stopwords: true,
                dictionary_filter: true,
                display_rows: 200,
                max_file_size_mb: 50,
            },
            export: ExportConfig {
                output_dir: PathBuf::from("./exports"),
                sheet_name: "WordAnalysis".to_string(),
                write_spreadsheet: true,
                write_csv: true,
                write_manifest: false,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.analysis.display_rows == 0 {
            return Err(PipelineError::Config(
                "display_rows must be greater than 0".to_string(),
            ));
        }

        let sheet = &self.export.sheet_name;
        if sheet.is_empty() || sheet.chars().count() > 31 {
            return Err(PipelineError::Config(
                "sheet_name must be between 1 and 31 characters".to_string(),
            ));
        }

        if sheet.contains(['[', ']', ':', '*', '?', '/', '\\']) {
            return Err(PipelineError::Config(format!(
                "sheet_name contains a character not allowed in worksheet names: {}",
                sheet
            )));
        }

        Ok(())
    }
}
