/// One city row from the candidate query, as consumed by the ingestion
/// loop. Immutable once fetched; the enumerator hands them out in the order
/// the query service returned them (descending population).
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Opaque unique Wikidata entity URI, the store's dedup key.
    pub city_wd: String,
    pub name: String,
    pub population: u64,
    pub country: String,
    /// English Wikipedia article title, extracted from the article URI.
    pub article_title: String,
    pub gps_lat: f64,
    pub gps_lon: f64,
}
