// src/api/mod.rs

pub mod types;
pub mod check;
pub mod info;

pub use types::{CheckRequestBody, CheckResponse, MetadataBody};
pub use check::check;
