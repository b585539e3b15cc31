// file: src/github/query.rs
// description: code search expression builder (`filename:<pattern> user:<scope>`)
// reference: https://docs.github.com/en/search-github/searching-on-github/searching-code

use crate::error::Result;
use crate::utils::validation::Validator;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub filename: String,
    pub scope: Option<String>,
}

impl SearchQuery {
    pub fn new(filename: impl Into<String>, scope: Option<&str>) -> Result<Self> {
        let filename = filename.into();
        Validator::validate_filename_pattern(&filename)?;

        Ok(Self {
            filename,
            scope: Validator::normalize_scope(scope),
        })
    }

    /// Search expression before URL encoding
    pub fn expression(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "filename:{}", self.filename)?;
        if let Some(scope) = &self.scope {
            write!(f, " user:{}", scope)?;
        }
        Ok(())
    }
}
