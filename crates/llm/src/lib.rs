pub mod client;
pub mod error;
pub mod settings;
pub mod traits;

pub use client::ChatClient;
pub use error::{LlmError, Result};
pub use settings::GenerationSettings;
pub use traits::TextGenerator;
