// Resume upload analysis: text extraction, then deterministic skill detection
// against every open job.

pub mod docx;
pub mod extract;
pub mod handlers;
pub mod keyword_match;
