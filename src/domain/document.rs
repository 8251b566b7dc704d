#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Text,
}

impl ContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.to_lowercase();
        if mime.contains("pdf") {
            Some(Self::Pdf)
        } else if mime.starts_with("text/") {
            Some(Self::Text)
        } else {
            None
        }
    }

    /// Detects the content type from the declared MIME type, falling back to
    /// the filename extension when the MIME type is absent or unrecognized.
    pub fn detect(mime: Option<&str>, filename: &str) -> Option<Self> {
        if let Some(ct) = mime.and_then(Self::from_mime) {
            return Some(ct);
        }
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if lower.ends_with(".txt") {
            Some(Self::Text)
        } else {
            None
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Text => "text/plain",
        }
    }
}

impl Document {
    pub fn new(filename: String, content_type: ContentType, size_bytes: u64) -> Self {
        Self {
            filename,
            content_type,
            size_bytes,
        }
    }
}
