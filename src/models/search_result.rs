// file: src/models/search_result.rs
// description: GitHub code search response model and console listing
// reference: https://docs.github.com/en/rest/search/search#search-code

use serde::Deserialize;

pub const RULE_WIDTH: usize = 80;
pub const NO_RESULTS_NOTICE: &str = "No files found matching your search criteria.";

#[derive(Debug, Clone, Deserialize)]
pub struct CodeSearchResponse {
    /// Total matches reported by GitHub, not the number of items returned
    pub total_count: u64,

    /// First page of matches
    pub items: Vec<CodeMatch>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeMatch {
    pub name: String,
    pub path: String,
    pub html_url: String,
    pub repository: RepositoryRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryRef {
    /// owner/name
    pub full_name: String,
    pub html_url: String,
}

impl CodeSearchResponse {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Format the numbered listing printed by the `search` binary
    pub fn format_listing(&self, filename: &str) -> String {
        let mut output = format!(
            "\nFound {} file(s) matching '{}'\n{}\n",
            self.total_count,
            filename,
            "=".repeat(RULE_WIDTH)
        );

        if self.is_empty() {
            output.push_str(&format!("\n{}\n", NO_RESULTS_NOTICE));
            return output;
        }

        for (idx, item) in self.items.iter().enumerate() {
            output.push_str(&item.format_entry(idx + 1));
        }

        output
    }
}

impl CodeMatch {
    pub fn format_entry(&self, position: usize) -> String {
        format!(
            "\n[{}] File: {}\n    Path: {}\n    Repository: {}\n    URL: {}\n",
            position, self.name, self.path, self.repository.full_name, self.html_url
        )
    }
}
