//! Diagnostics recorded while parsing.
//!
//! This module defines the error types the parser accumulates. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each recoverable syntax problem
//! - Error naming and suggestion tips for presentation

pub mod errors;
