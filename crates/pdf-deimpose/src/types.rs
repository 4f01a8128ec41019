use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeimposeError {
    #[error("documents folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to load {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },
    #[error("document has no pages")]
    NoPages,
    #[error("failed to render page {page}: {reason}")]
    Render { page: usize, reason: String },
    #[error("failed to crop half-page image {}: {reason}", .path.display())]
    Crop { path: PathBuf, reason: String },
    #[error("no half-page image for reading position {0}")]
    MissingHalf(usize),
    #[error("failed to assemble output document: {0}")]
    Assembly(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, DeimposeError>;

/// Pixel-space region handed to the image splitter.
///
/// `top`/`left` locate the region inside the source image, matching the
/// coordinate convention of the crop collaborator (origin at the top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub width: u32,
    pub height: u32,
    pub top: u32,
    pub left: u32,
}

/// Outcome of one batch run over a documents folder
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Number of PDF documents discovered in the folder
    pub documents_found: usize,
    /// Output files written, one per successfully processed document
    pub generated: Vec<PathBuf>,
    /// Documents that failed, in processing order
    pub failed: Vec<FailedDocument>,
}

/// A document the batch gave up on, with its failure rendered as text
#[derive(Debug, Clone)]
pub struct FailedDocument {
    pub input: PathBuf,
    pub reason: String,
}
