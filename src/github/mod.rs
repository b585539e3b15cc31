// file: src/github/mod.rs
// description: GitHub code search module exports
// reference: internal module structure

pub mod client;
pub mod query;

pub use client::CodeSearchClient;
pub use query::SearchQuery;
