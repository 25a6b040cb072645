//! Core module - Directive matching, path resolution and include expansion
//!
//! This module provides:
//! - Single-line `#include` directive classification
//! - Two-mode include path resolution (file-relative / search list)
//! - Stack-driven pre-order expansion into one output stream
//! - Typed errors carrying directive coordinates

pub mod directive;
pub mod error;
pub mod expand;
pub mod resolve;
