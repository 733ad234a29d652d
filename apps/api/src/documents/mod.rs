// Document source: upload persistence and text extraction.
// Hands decoded text to callers; knows nothing about matching.

pub mod extract;
pub mod handlers;
pub mod storage;
