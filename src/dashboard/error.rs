use thiserror::Error;

/// Errors that can occur while loading a page document or rendering its panels
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A panel references a placeholder id that the page document does not
    /// contain. The template and the panel registry are out of sync, so this
    /// is fatal: the failing panel and every panel after it are not rendered.
    #[error("missing placeholder '{0}' in page document")]
    MissingPlaceholder(String),

    /// Structural problem in the page document itself
    #[error("page document error: {0}")]
    Document(String),

    /// JSON error while reading the page document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (document file, output directory, temp files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart backend failure
    #[error("render error: {0}")]
    Render(String),
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
