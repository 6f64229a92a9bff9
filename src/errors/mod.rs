//! Error types and collection for the analysis pipeline.
//!
//! This module contains the diagnostic records produced during lexical
//! and syntactic analysis:
//!
//! - Lexical error kinds and the `LexError` record
//! - The `ParseError` record shared with the external syntax analyzer
//! - The `PipelineFault` type for unexpected phase failures
//! - The ordered `ErrorLog` collector

pub mod errors;
