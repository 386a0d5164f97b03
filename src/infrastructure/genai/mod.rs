pub mod groq;

pub use groq::GroqCompletionService;
