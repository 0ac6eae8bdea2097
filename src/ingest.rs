use log::info;

use crate::error::WikiclimateError;
use crate::infobox::InfoboxLocator;
use crate::normalize::normalize;
use crate::store::RecordStore;
use crate::types::Candidate;

/// Outcome counts of one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub inserted: usize,
    pub skipped: usize,
}

/// Walks the candidates in order, skipping cities already recorded and
/// inserting one normalized record for each of the rest.
///
/// Each candidate's outcome is independent and durable as soon as written:
/// no batching, no transaction across candidates. Fatal errors (dangling
/// references, transport or store failures) abort the whole run;
/// already-inserted records stay put and a re-run resumes by skipping them.
pub async fn ingest(
    store: &dyn RecordStore,
    locator: &InfoboxLocator<'_>,
    candidates: &[Candidate],
) -> Result<IngestSummary, WikiclimateError> {
    let total = candidates.len();
    let mut summary = IngestSummary::default();

    for (index, candidate) in candidates.iter().enumerate() {
        let position = index + 1;

        if store.find(&candidate.city_wd).await?.is_some() {
            info!(
                "({}/{}) Skipping {}, already recorded",
                position, total, candidate.name
            );
            summary.skipped += 1;
            continue;
        }

        info!("({}/{}) Inserting {}", position, total, candidate.name);
        let weather_box = locator.locate(candidate).await?;
        if weather_box.is_none() {
            info!(
                "({}/{}) Skipping {}, missing weather box",
                position, total, candidate.name
            );
        }

        let record = normalize(candidate, weather_box.as_ref());
        store.insert(&record).await?;
        summary.inserted += 1;
    }

    Ok(summary)
}
