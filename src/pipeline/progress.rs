// file: src/pipeline/progress.rs
// description: stage progress reporting and statistics for an analysis run
// reference: uses indicatif for the stage bar and tracks per-stage word counts

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Read, clean, stopwords, dictionary, count.
pub const TOTAL_STAGES: u64 = 5;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineStats {
    pub pages: usize,
    pub characters_extracted: usize,
    pub tokens_analyzed: usize,
    pub lemmas_after_basic_filter: usize,
    pub lemmas_after_stopwords: usize,
    pub lemmas_after_dictionary: usize,
    pub unique_lemmas: usize,
    pub stages_completed: u64,
    pub duration_ms: u64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of analyzed tokens that reached the frequency table, in percent.
    pub fn retention_rate(&self) -> f64 {
        if self.tokens_analyzed == 0 {
            return 0.0;
        }
        (self.lemmas_after_dictionary as f64 / self.tokens_analyzed as f64) * 100.0
    }

    pub fn words_per_second(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        self.tokens_analyzed as f64 / (self.duration_ms as f64 / 1000.0)
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(visible: bool) -> Self {
        Self::with_color(visible, true)
    }

    pub fn with_color(visible: bool, colored: bool) -> Self {
        let bar = if visible {
            create_stage_bar(colored)
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            start_time: Instant::now(),
        }
    }

    pub fn stage(&self, message: &str) {
        self.bar.inc(1);
        self.bar.set_message(message.to_string());
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_stage_bar(colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(TOTAL_STAGES);
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:20.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:20}] {pos}/{len} {msg}"
    };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars("█▓░")),
        Err(_) => bar.set_style(ProgressStyle::default_bar()),
    }
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}
