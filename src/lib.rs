//! Blockfit (workspace facade crate).
//!
//! Re-exports the `blockfit::{core,engine,types}` public API while the implementation
//! lives in dedicated crates under `crates/`, and hosts the line-oriented console
//! front end used by the default binary.

pub mod console;

pub use blockfit_core as core;
pub use blockfit_engine as engine;
pub use blockfit_types as types;
