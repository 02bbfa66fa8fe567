//! Conversation message types for pulling routable text out of a transcript.
//!
//! The router classifies the most recent user turn; callers holding a full
//! messages array use [`last_user_text`] to get the content string.

use serde::{Deserialize, Serialize};

/// A single message in the conversation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

/// Message content - either a plain string or content blocks.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// One content block of a multimodal message.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Extract the text of the most recent user message.
///
/// Text blocks are joined in order; non-text blocks are skipped. Returns an
/// empty string when no user message exists.
pub fn last_user_text(messages: &[ChatMessage]) -> String {
    for message in messages.iter().rev() {
        if message.role != "user" {
            continue;
        }
        return match &message.content {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .filter(|b| b.block_type == "text")
                .filter_map(|b| b.text.as_deref())
                .collect(),
        };
    }
    String::new()
}
