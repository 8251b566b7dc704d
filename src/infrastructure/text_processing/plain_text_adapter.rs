use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// Decodes plain-text uploads as UTF-8, falling back to a permissive
/// single-byte decode for legacy files.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        match std::str::from_utf8(data) {
            Ok(text) => Ok(text.to_string()),
            Err(_) => {
                let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(data);
                Ok(decoded.into_owned())
            }
        }
    }
}
