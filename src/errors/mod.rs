//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while turning source text into
//! tokens and expression nodes. It includes:
//!
//! - Error structures with source position information
//! - The lexical error taxonomy (unterminated strings, malformed numbers,
//!   invalid characters)
//! - Error naming and suggestion tips used by the error report renderer

pub mod errors;
