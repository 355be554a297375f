pub mod completion_repository;
pub mod google_tts_repository;
pub mod ollama_completion_repository;
pub mod tts_repository;

pub use completion_repository::CompletionRepository;
pub use google_tts_repository::GoogleTtsRepository;
pub use ollama_completion_repository::OllamaCompletionRepository;
pub use tts_repository::TtsRepository;
