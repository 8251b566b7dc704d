use crate::domain::{Chat, Message};

/// Renderer-independent content of an export: a title and one block per
/// message (or a single block for a standalone draft). Both output formats
/// render this identically modulo formatting.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub title: String,
    pub blocks: Vec<TranscriptBlock>,
}

#[derive(Debug, Clone)]
pub struct TranscriptBlock {
    /// Optional role + timestamp header line.
    pub heading: Option<String>,
    pub body: String,
}

impl Transcript {
    pub fn from_chat(chat: &Chat, messages: &[Message], default_title: &str) -> Self {
        let title = chat
            .title
            .clone()
            .unwrap_or_else(|| default_title.to_string());

        let blocks = messages
            .iter()
            .map(|m| TranscriptBlock {
                heading: Some(format!(
                    "[{}] {}",
                    m.role.as_str().to_uppercase(),
                    m.created_at.to_rfc3339()
                )),
                body: m.content.clone(),
            })
            .collect();

        Self { title, blocks }
    }

    pub fn from_draft(title: &str, text: &str) -> Self {
        Self {
            title: title.to_string(),
            blocks: vec![TranscriptBlock {
                heading: None,
                body: text.to_string(),
            }],
        }
    }
}
