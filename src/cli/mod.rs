//! Command-line host for the summarizer: argument parsing, input reading and
//! output rendering. None of it makes summarization decisions.

pub mod input;
pub mod parsing;
pub mod response;

pub use parsing::{CliRequest, USAGE, parse_args};
pub use response::{Rendered, render};
