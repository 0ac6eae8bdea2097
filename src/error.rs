use thiserror::Error;

use crate::candidates::CandidateQueryError;
use crate::infobox::LocateInfoboxError;
use crate::store::StoreError;
use crate::wiki::PageFetchError;

#[derive(Debug, Error)]
pub enum WikiclimateError {
    #[error(transparent)]
    CandidateQuery(#[from] CandidateQueryError),

    #[error(transparent)]
    LocateInfobox(#[from] LocateInfoboxError),

    #[error(transparent)]
    Page(#[from] PageFetchError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
