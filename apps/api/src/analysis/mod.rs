//! Resume screening pipeline: text extraction, prompt assembly, model call,
//! report extraction.

pub mod handlers;
pub mod prompts;
pub mod report;
