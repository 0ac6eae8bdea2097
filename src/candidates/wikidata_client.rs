use log::info;
use reqwest::Client;

use crate::candidates::error::CandidateQueryError;
use crate::types::Candidate;

/// Wikidata SPARQL endpoint.
pub const DEFAULT_SPARQL_ENDPOINT: &str =
    "https://query.wikidata.org/bigdata/namespace/wdq/sparql";

const USER_AGENT: &str = concat!(
    "wikiclimate/",
    env!("CARGO_PKG_VERSION"),
    " (weather box harvester)"
);

/// Every city (instance of a city subclass) with population of at least
/// 10 000, coordinates, a country, and an English Wikipedia article; one
/// sampled coordinate per city, ordered by descending population.
const CITY_QUERY: &str = r#"
SELECT DISTINCT ?city ?cityLabel ?population ?country ?countryLabel ?article (SAMPLE(?gps) AS ?gps)
WHERE
{
  ?city wdt:P31/wdt:P279* wd:Q515 .
  ?city wdt:P1082 ?population .
  ?city wdt:P625 ?gps .
  ?city wdt:P17 ?country .
  FILTER (?population >= 10000) .
  ?article schema:about ?city .
  ?article schema:inLanguage 'en' .
  FILTER REGEX(STR(?article), ".wikipedia.org/wiki/") .
  SERVICE wikibase:label {
    bd:serviceParam wikibase:language "en" .
  }
}
GROUP BY ?city ?cityLabel ?population ?country ?countryLabel ?article
ORDER BY DESC(?population)
"#;

/// SPARQL JSON response structures
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SparqlResponse {
        pub results: Results,
    }

    #[derive(Debug, Deserialize)]
    pub struct Results {
        #[serde(default)]
        pub bindings: Vec<CityBinding>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CityBinding {
        pub city: BoundValue,
        #[serde(rename = "cityLabel")]
        pub city_label: BoundValue,
        pub population: BoundValue,
        #[serde(rename = "countryLabel")]
        pub country_label: BoundValue,
        pub article: BoundValue,
        pub gps: BoundValue,
    }

    #[derive(Debug, Deserialize)]
    pub struct BoundValue {
        pub value: String,
    }
}

/// Client for the candidate query service. Any transport or shape failure
/// is fatal; there is no retry.
#[derive(Debug, Clone)]
pub struct WikidataClient {
    client: Client,
    endpoint: String,
}

impl WikidataClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, CandidateQueryError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(CandidateQueryError::ClientBuild)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Fetches the candidate cities, preserving the order the query service
    /// returned them in (descending population).
    pub async fn fetch_candidates(&self) -> Result<Vec<Candidate>, CandidateQueryError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", CITY_QUERY), ("format", "json")])
            .send()
            .await
            .map_err(|e| CandidateQueryError::NetworkRequest(self.endpoint.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    CandidateQueryError::HttpStatus {
                        url: self.endpoint.clone(),
                        status,
                        source: e,
                    }
                } else {
                    CandidateQueryError::NetworkRequest(self.endpoint.clone(), e)
                });
            }
        };

        let body: api::SparqlResponse = response
            .json()
            .await
            .map_err(CandidateQueryError::JsonParse)?;

        let candidates = body
            .results
            .bindings
            .into_iter()
            .map(parse_binding)
            .collect::<Result<Vec<_>, _>>()?;
        info!("Query service returned {} candidate cities", candidates.len());
        Ok(candidates)
    }
}

fn parse_binding(binding: api::CityBinding) -> Result<Candidate, CandidateQueryError> {
    let population = binding.population.value.parse::<u64>().map_err(|_| {
        CandidateQueryError::MalformedBinding {
            field: "population",
            value: binding.population.value.clone(),
        }
    })?;

    // The article value is a URI; the title is everything after "wiki/".
    let article_title = match binding.article.value.find("wiki/") {
        Some(idx) => binding.article.value[idx + "wiki/".len()..].to_string(),
        None => {
            return Err(CandidateQueryError::MalformedBinding {
                field: "article",
                value: binding.article.value,
            })
        }
    };

    let (gps_lat, gps_lon) =
        parse_point(&binding.gps.value).ok_or_else(|| CandidateQueryError::MalformedBinding {
            field: "gps",
            value: binding.gps.value.clone(),
        })?;

    Ok(Candidate {
        city_wd: binding.city.value,
        name: binding.city_label.value,
        population,
        country: binding.country_label.value,
        article_title,
        gps_lat,
        gps_lon,
    })
}

/// Positional parse of the WKT-style `"Point(<lon> <lat>)"` literal the
/// query service emits. Longitude comes first in the text.
fn parse_point(text: &str) -> Option<(f64, f64)> {
    let inner = text.trim().strip_prefix("Point(")?.strip_suffix(')')?;
    let mut tokens = inner.split_whitespace();
    let lon = tokens.next()?.parse::<f64>().ok()?;
    let lat = tokens.next()?.parse::<f64>().ok()?;
    Some((lat, lon))
}
