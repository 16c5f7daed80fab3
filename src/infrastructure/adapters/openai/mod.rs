//! OpenAI chat-completion adapters

mod chat_client;
mod fake_chat_client;

pub use chat_client::{OpenAiChatClient, OpenAiChatClientConfig};
pub use fake_chat_client::FakeChatClient;
