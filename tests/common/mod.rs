#![allow(dead_code)]

//! Common test utilities for green-habits CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working directory and HOME for each run
//! - `TestResult`: captured exit status and output

pub mod env;

pub use env::*;
