//! Basic low-level scanning functionality.
pub mod parsing_error;
pub mod tokenizer;

pub use parsing_error::{MalformedTreeError, MalformedTreeErrorType};
pub use tokenizer::{Token, Tokenizer};
