// file: src/nlp/registry.rs
// description: keyed cache of loaded language models
// reference: std::sync::Mutex guarded lazy initialisation

use crate::error::{PipelineError, Result};
use crate::models::LanguageProfile;
use crate::nlp::model::{LanguageModel, ModelLoader};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Model handles keyed by model identifier. The lock is held while a model
/// loads, so each identifier is loaded at most once; handed-out models are
/// shared read-only.
pub struct ModelRegistry {
    loader: Box<dyn ModelLoader>,
    models: Mutex<HashMap<String, Arc<dyn LanguageModel>>>,
}

impl ModelRegistry {
    pub fn new(loader: impl ModelLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            models: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, profile: &LanguageProfile) -> Result<Arc<dyn LanguageModel>> {
        let mut models = self
            .models
            .lock()
            .map_err(|_| PipelineError::Config("model cache lock poisoned".to_string()))?;

        if let Some(model) = models.get(profile.model_id) {
            debug!("Model cache hit: {}", profile.model_id);
            return Ok(Arc::clone(model));
        }

        let model = self.loader.load(profile.model_id, profile.code)?;
        models.insert(profile.model_id.to_string(), Arc::clone(&model));
        Ok(model)
    }

    pub fn loaded(&self) -> usize {
        self.models.lock().map(|m| m.len()).unwrap_or(0)
    }
}
