//! Error types and error handling for the tokenizer front end.
//!
//! The lexer itself has no failure channel: malformed input comes back as
//! `Illegal` tokens in the stream. This module holds the diagnostic types
//! a consumer builds from those tokens when it decides to report them:
//!
//! - Error structures with source position information
//! - Variants for the two illegal lexical conditions
//! - Helpful error messages and suggestions

pub mod errors;
