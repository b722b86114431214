//! File classification helpers shared by the viewer modal, the shared
//! view, and the upload form.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

/// How a document file should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// Render inline with an `<img>`.
    Image,
    /// Render inline with an `<iframe>`, toolbar suppressed.
    Pdf,
    /// No inline preview; offer a download link.
    Other,
}

/// Decide the presentation for a file from its content type, falling
/// back to the URL extension when the backend did not record one.
pub fn classify_file(content_type: Option<&str>, url: &str) -> FileKind {
    if let Some(content_type) = content_type {
        if content_type.starts_with("image/") {
            return FileKind::Image;
        }
        if content_type == "application/pdf" {
            return FileKind::Pdf;
        }
        if !content_type.is_empty() {
            return FileKind::Other;
        }
    }
    let lower = url.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        return FileKind::Pdf;
    }
    if [".png", ".jpg", ".jpeg", ".gif", ".webp"].iter().any(|ext| lower.ends_with(ext)) {
        return FileKind::Image;
    }
    FileKind::Other
}

/// Inline-preview URL for a PDF with the viewer toolbar suppressed.
pub fn pdf_preview_url(url: &str) -> String {
    format!("{url}#toolbar=0")
}

/// A file picked in an upload form. Carries the metadata the client
/// logic needs; the browser handle only exists on `web` builds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    #[cfg(feature = "web")]
    pub handle: web_sys::File,
}

impl SelectedFile {
    #[cfg(feature = "web")]
    pub fn from_web(file: web_sys::File) -> Self {
        Self { name: file.name(), content_type: file.type_(), handle: file }
    }

    #[cfg(not(feature = "web"))]
    pub fn stub(name: &str, content_type: &str) -> Self {
        Self { name: name.to_owned(), content_type: content_type.to_owned() }
    }
}
