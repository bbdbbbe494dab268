//! Utility modules for common functionality
//!
//! This module provides logging and text-input helpers used by the CLI.

pub mod logger;
pub mod coordinate_utils;
