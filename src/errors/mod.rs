//! Error types for tokenization.
//!
//! This module defines the errors a lexing pass can produce:
//!
//! - Error structures with source position information
//! - Specific error variants for each fatal lexing failure
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
