use async_trait::async_trait;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum PresentationError {
    /// The host refused to open a surface for the document. Surfaced to the
    /// caller rather than silently dropped.
    #[error("print surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("writing document failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Presentation capability: takes a fully rendered document and hands it to
/// the host. Split from rendering so the pure half stays unit-testable.
#[async_trait]
pub trait DocumentPresenter: Send + Sync {
    async fn present(&self, html: &str) -> Result<(), PresentationError>;
}

/// Writes the document to a kept temp file and opens it with the host's
/// handler; the script embedded in the document drives the print dialog
/// and closes the surface afterwards.
#[derive(Debug, Clone, Default)]
pub struct BrowserPresenter;

impl BrowserPresenter {
    pub fn new() -> Self {
        Self
    }

    fn opener() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        }
    }
}

#[async_trait]
impl DocumentPresenter for BrowserPresenter {
    async fn present(&self, html: &str) -> Result<(), PresentationError> {
        let mut file = tempfile::Builder::new()
            .prefix("manwal-")
            .suffix(".html")
            .tempfile()?;
        file.write_all(html.as_bytes())?;

        // The surface outlives us; keep the file instead of deleting it on drop
        let (_, path) = file.keep().map_err(|e| PresentationError::Io(e.error))?;
        info!(path = %path.display(), "Opening print surface");

        Command::new(Self::opener())
            .arg(&path)
            .spawn()
            .map_err(|e| PresentationError::SurfaceUnavailable(e.to_string()))?;
        Ok(())
    }
}

/// Writes the document to a fixed path: the durable-export presenter
#[derive(Debug, Clone)]
pub struct FilePresenter {
    path: PathBuf,
}

impl FilePresenter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl DocumentPresenter for FilePresenter {
    async fn present(&self, html: &str) -> Result<(), PresentationError> {
        tokio::fs::write(&self.path, html).await?;
        info!(path = %self.path.display(), "Document written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_presenter_writes_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let presenter = FilePresenter::new(&path);

        presenter.present("<html>doc</html>").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html>doc</html>");
    }

    #[tokio::test]
    async fn test_file_presenter_surfaces_io_errors() {
        let presenter = FilePresenter::new("/nonexistent-dir/out.html");
        let result = presenter.present("<html></html>").await;
        assert!(matches!(result, Err(PresentationError::Io(_))));
    }
}
