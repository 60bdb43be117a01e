//! OpenAI-compatible embeddings client.

mod embeddings;

pub use embeddings::OpenAiEmbeddings;
