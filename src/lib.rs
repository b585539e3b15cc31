// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod utils;

pub use config::{Config, SearchConfig};
pub use error::{Result, UtilError};
pub use github::{CodeSearchClient, SearchQuery};
pub use models::{CodeMatch, CodeSearchResponse, RepositoryRef, Temperature, Unit};
pub use utils::Validator;
