//! Common test utilities for bffctl CLI tests.
//!
//! This module provides:
//! - `TestEnv`: a temp project directory plus fake external tools on PATH
//! - `TestResult`: captured exit code and output of one invocation

#![allow(dead_code)]

pub mod env;

pub use env::*;
