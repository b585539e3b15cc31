// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod search_result;
pub mod temperature;

pub use search_result::{CodeMatch, CodeSearchResponse, RepositoryRef};
pub use temperature::{Temperature, Unit};
