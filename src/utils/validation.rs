// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{Result, UtilError};

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(UtilError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_filename_pattern(pattern: &str) -> Result<()> {
        if pattern.trim().is_empty() {
            return Err(UtilError::Validation(
                "Filename pattern is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// An empty scope means "search everywhere". Other values pass through untouched.
    pub fn normalize_scope(scope: Option<&str>) -> Option<String> {
        scope.filter(|s| !s.is_empty()).map(str::to_string)
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.chars().count() <= max_length {
            text.to_string()
        } else {
            let cut: String = text.chars().take(max_length).collect();
            format!("{}...", cut)
        }
    }
}
