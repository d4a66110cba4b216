pub mod error;
pub mod provider;
pub mod providers;
pub mod request;
pub mod transformer;

pub use error::{ConversionError, LLMError, Result};
pub use provider::{BaseProvider, LLMProvider, ProviderConfig};
pub use providers::OpenAiProvider;
pub use request::{Completion, CompletionRequest, PromptMessage};
pub use transformer::{OpenAiTransformer, SchemaTransformer};
