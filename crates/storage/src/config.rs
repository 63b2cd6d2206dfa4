//! Storage configuration.

use attribution_core::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where the job finds its input and leaves its report.
///
/// Paths are object key prefixes inside the bucket.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StorageConfig {
    /// Bucket root directory
    #[serde(default = "default_bucket")]
    #[validate(length(min = 1))]
    pub bucket: String,
    /// Prefix the hit log lands under
    #[serde(default = "default_input_data_path")]
    #[validate(length(min = 1))]
    pub input_data_path: String,
    /// Prefix the hit log is moved to while it is processed
    #[serde(default = "default_processing_data_path")]
    #[validate(length(min = 1))]
    pub processing_data_path: String,
    /// Prefix reports are written under
    #[serde(default = "default_output_data_path")]
    #[validate(length(min = 1))]
    pub output_data_path: String,
    /// Report file name, prefixed with the run date
    #[serde(default = "default_output_data_file")]
    #[validate(length(min = 1))]
    pub output_data_file: String,
    /// Hit log file name
    #[serde(default = "default_input_file_name")]
    #[validate(length(min = 1))]
    pub input_file_name: String,
}

fn default_bucket() -> String {
    "./data".to_string()
}

fn default_input_data_path() -> String {
    "inputs".to_string()
}

fn default_processing_data_path() -> String {
    "processing".to_string()
}

fn default_output_data_path() -> String {
    "outputs".to_string()
}

fn default_output_data_file() -> String {
    "search_keyword_performance.tab".to_string()
}

fn default_input_file_name() -> String {
    "hit_data.txt".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            input_data_path: default_input_data_path(),
            processing_data_path: default_processing_data_path(),
            output_data_path: default_output_data_path(),
            output_data_file: default_output_data_file(),
            input_file_name: default_input_file_name(),
        }
    }
}

impl StorageConfig {
    /// Validates the settings before a run.
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| Error::config(format!("storage: {}", e)))
    }

    /// `{input_data_path}/{input_file_name}`
    pub fn input_key(&self) -> String {
        join_key(&[&self.input_data_path, &self.input_file_name])
    }

    /// `{processing_data_path}/{YYYY-MM-DD}/{input_file_name}`
    pub fn processing_key(&self, date: NaiveDate) -> String {
        let day = date.format("%Y-%m-%d").to_string();
        join_key(&[&self.processing_data_path, &day, &self.input_file_name])
    }

    /// `{output_data_path}/{YYYY-MM-DD}_{output_data_file}`
    pub fn output_key(&self, date: NaiveDate) -> String {
        let file = format!("{}_{}", date.format("%Y-%m-%d"), self.output_data_file);
        join_key(&[&self.output_data_path, &file])
    }
}

/// Joins key segments with `/`, ignoring stray slashes at the seams.
pub fn join_key(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
