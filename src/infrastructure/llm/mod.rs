mod anthropic_client;
pub mod anthropic_types;

pub use anthropic_client::AnthropicClient;
