// Adapters layer: concrete implementations of the domain ports.

pub mod gemini;
pub mod storage;

pub use gemini::GeminiClient;
pub use storage::{LocalStorage, MemoryStorage};
