//! Core module - Shared data structures and output plumbing
//!
//! This module provides:
//! - Unified result model (ResultItem)
//! - Rendering functions for different output formats
//! - Logging setup

pub mod logging;
pub mod model;
pub mod render;
