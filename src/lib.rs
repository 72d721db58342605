//! Phoenix Climate Data server: serves the page shell, the wasm bundle and
//! the temperature dataset consumed by the chart frame.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod helpers;
pub mod router;
pub mod schemas;

mod openapi_tests;
mod tests;
