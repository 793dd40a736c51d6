use std::path::Path;

/// Seam for the upstream file-to-text collaborators (PDF parsing, OCR). The
/// engine never sees files; it only consumes the resulting plain string, and
/// an extraction failure is surfaced to the caller as a recoverable notice.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8], mime: &str) -> Result<String, String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8], mime: &str) -> Result<String, String> {
        if !mime.starts_with("text/") {
            return Err(format!("unsupported content type: {mime}"));
        }
        String::from_utf8(bytes.to_vec())
            .map(|text| text.trim().to_string())
            .map_err(|err| format!("invalid utf-8 in upload: {err}"))
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("txt") | Some("md") => "text/plain",
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}
