use crate::error::{ProcessingError, Result};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

/// Pulls plain text out of an AIP document, one string per page
pub struct DocumentReader;

impl DocumentReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the text of every page, in page order
    pub fn read_pages(&self, path: &Path) -> Result<Vec<String>> {
        // Surface a missing or unreadable file as plain I/O before the extractor sees it
        std::fs::metadata(path)?;

        // pdf_extract can panic on malformed documents
        let path_buf = path.to_path_buf();
        let result = catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_by_pages(&path_buf)
        }));

        let pages = match result {
            Ok(Ok(pages)) => pages,
            Ok(Err(e)) => {
                return Err(ProcessingError::PdfExtract(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
            Err(_) => {
                return Err(ProcessingError::PdfExtract(format!(
                    "{}: extractor panicked on malformed document",
                    path.display()
                )))
            }
        };

        tracing::debug!(pages = pages.len(), path = %path.display(), "Extracted document text");
        Ok(pages)
    }
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_document_is_io_error() {
        let reader = DocumentReader::new();
        let result = reader.read_pages(Path::new("does/not/exist.pdf"));
        assert!(matches!(result, Err(ProcessingError::Io(_))));
    }

    #[test]
    fn test_garbage_document_is_extract_error() -> Result<()> {
        use std::io::Write;

        let mut temp_file = tempfile::NamedTempFile::new()?;
        writeln!(temp_file, "this is not a pdf")?;

        let reader = DocumentReader::new();
        let result = reader.read_pages(temp_file.path());
        assert!(matches!(result, Err(ProcessingError::PdfExtract(_))));
        Ok(())
    }
}
