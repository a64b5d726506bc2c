//! Common test utilities for themekit contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated site directory with a public dir and themes
//! - Fixtures: reusable templates and config snippets

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
