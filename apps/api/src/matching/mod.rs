// Text similarity engine: tokenize, normalize, score.
// Pure and transport-free. Handlers live in `handlers` and only adapt forms to the service.

pub mod handlers;
pub mod normalizer;
pub mod service;
pub mod similarity;
pub mod stopwords;
pub mod tokenizer;

pub use service::MatchService;
