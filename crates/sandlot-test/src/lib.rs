//! Test harness for the Sandlot sandbox.
//!
//! Provides scripted scenarios and an ASCII renderer for snapshot tests.

pub mod harness;

pub use harness::{AsciiRenderer, Scenario};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error("World error: {0}")]
    World(#[from] sandlot_core::Error),
}

pub type Result<T> = std::result::Result<T, TestError>;
