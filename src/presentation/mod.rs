//! JavaScript-facing API. Minimal logic: only a bridge to the application layer.

pub mod wasm_api;

pub use wasm_api::*;
