use slidesplit_common::{Result, SplitterError};
use tracing::{debug, info, warn};

use crate::llm_trait::ChatClient;
use crate::prompts::{segment_prompt, SYSTEM_PROMPT};
use crate::types::ChatMessage;

/// Splits markdown documents into sections by asking a chat model
pub struct DocumentSplitter<C> {
    client: C,
}

impl<C: ChatClient> DocumentSplitter<C> {
    /// Create new splitter
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Split `document` into `target_sections` sections.
    ///
    /// One request, no retry. The sections come back exactly as the model
    /// returned them.
    pub async fn split_document(&self, document: &str, target_sections: u32) -> Result<Vec<String>> {
        info!(
            "Splitting document - Length: {} chars, Target sections: {}, Model: {}",
            document.len(),
            target_sections,
            self.client.model()
        );

        let messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(segment_prompt(document, target_sections)),
        ];

        let content = self.client.complete(messages).await?;
        let sections = parse_sections(&content)?;

        if sections.len() != target_sections as usize {
            warn!(
                "Model returned {} sections, {} were requested",
                sections.len(),
                target_sections
            );
        }

        debug!("Received {} sections", sections.len());
        Ok(sections)
    }
}

/// Parse the model's reply as a JSON array of strings
pub fn parse_sections(content: &str) -> Result<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| {
        debug!("Reply is not JSON: {}", e);
        SplitterError::invalid_response(
            "Invalid JSON response from the model. Ensure the model strictly returns a JSON array.",
        )
    })?;

    serde_json::from_value(value).map_err(|e| {
        SplitterError::invalid_response(format!(
            "The model returned JSON that is not an array of strings: {}",
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Returns a canned reply and records what it was sent
    struct FakeChatClient {
        reply: Result<String>,
        sent: Mutex<Vec<ChatMessage>>,
    }

    impl FakeChatClient {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: SplitterError) -> Self {
            Self {
                reply: Err(err),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatClient for FakeChatClient {
        async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
            self.sent.lock().unwrap().extend(messages);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(SplitterError::network(e.to_string())),
            }
        }

        fn model(&self) -> &str {
            "fake-model"
        }
    }

    #[tokio::test]
    async fn test_split_returns_sections_unchanged() {
        let reply = r###"["# Title\n\nIntro  text.\n", "## Part\n\n- a\n- b\n\n"]"###;
        let splitter = DocumentSplitter::new(FakeChatClient::replying(reply));

        let sections = splitter.split_document("ignored", 2).await.unwrap();
        assert_eq!(
            sections,
            vec![
                "# Title\n\nIntro  text.\n".to_string(),
                "## Part\n\n- a\n- b\n\n".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_sends_system_then_user_prompt() {
        let splitter = DocumentSplitter::new(FakeChatClient::replying("[]"));
        splitter.split_document("# Doc body", 4).await.unwrap();

        let sent = splitter.client.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].role, Role::System);
        assert_eq!(sent[0].content, SYSTEM_PROMPT);
        assert_eq!(sent[1].role, Role::User);
        assert!(sent[1].content.contains("# Doc body"));
        assert!(sent[1].content.contains("exactly 4 sections"));
    }

    #[tokio::test]
    async fn test_count_mismatch_still_returns_sections() {
        let splitter = DocumentSplitter::new(FakeChatClient::replying(r#"["only one"]"#));
        let sections = splitter.split_document("doc", 3).await.unwrap();
        assert_eq!(sections, vec!["only one".to_string()]);
    }

    #[tokio::test]
    async fn test_non_json_reply_is_invalid_response() {
        let splitter = DocumentSplitter::new(FakeChatClient::replying(
            "Sure! Here are your sections: [\"a\"]",
        ));
        let err = splitter.split_document("doc", 1).await.unwrap_err();
        assert!(err.is_invalid_response());
        assert!(err.to_string().contains("Invalid JSON response"));
    }

    #[tokio::test]
    async fn test_client_errors_propagate() {
        let splitter = DocumentSplitter::new(FakeChatClient::failing(SplitterError::network("down")));
        let err = splitter.split_document("doc", 1).await.unwrap_err();
        assert!(matches!(err, SplitterError::Network(_)));
    }

    #[test]
    fn test_parse_sections_valid() {
        let sections = parse_sections(r#"["a", "b", "c"]"#).unwrap();
        assert_eq!(sections, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_sections_malformed() {
        for reply in ["", "not json", "[\"unterminated", "```json\n[\"a\"]\n```"] {
            let err = parse_sections(reply).unwrap_err();
            assert!(err.is_invalid_response(), "reply {:?} should be rejected", reply);
        }
    }

    #[test]
    fn test_parse_sections_wrong_shape() {
        for reply in [r#"{"sections": ["a"]}"#, "[1, 2]", "\"just a string\""] {
            let err = parse_sections(reply).unwrap_err();
            assert!(err.is_invalid_response());
            assert!(err.to_string().contains("not an array of strings"));
        }
    }
}
