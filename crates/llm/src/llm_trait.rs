use crate::types::ChatMessage;
use async_trait::async_trait;
use slidesplit_common::Result;

/// Common trait for chat-completion clients
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send the messages and return the first reply's text
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String>;

    /// Model identifier requests are sent with
    fn model(&self) -> &str;
}
