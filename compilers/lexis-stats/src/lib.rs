pub mod catalog;
pub mod counts;
pub mod normalize;
pub mod table;

use thiserror::Error;

pub use counts::{count_document, DocumentCounts, DEFAULT_TTR_WINDOW};
pub use normalize::{Bucket, Normalization};
pub use table::FeatureTable;

#[derive(Debug, Error)]
pub enum StatsError {
    /// Nothing in the document counts as a word, so no ratio is defined.
    #[error("document `{0}` contains no words")]
    EmptyDocument(String),
    #[error("failed to write feature table: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
