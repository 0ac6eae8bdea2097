use thiserror::Error;

use crate::wiki::PageFetchError;

#[derive(Debug, Error)]
pub enum LocateInfoboxError {
    /// A candidate's article identifier resolved to nothing. This is an
    /// upstream data problem, not a missing-infobox skip.
    #[error("Article '{title}' does not exist")]
    MissingArticle { title: String },

    /// A referenced shared weatherbox template page resolved to nothing.
    #[error("Template page '{title}' does not exist")]
    MissingTemplatePage { title: String },

    #[error(transparent)]
    Page(#[from] PageFetchError),
}
