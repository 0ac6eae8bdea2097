use log::debug;

use crate::infobox::error::LocateInfoboxError;
use crate::types::{Candidate, WeatherBox};
use crate::wiki::{PageProvider, WikiPage};

/// The template name carrying the actual climate fields.
const WEATHER_BOX_TEMPLATE: &str = "Weather box";

/// Substring marking a shared per-city weatherbox template, commonly named
/// like "Chicago weatherbox". Deliberately loose containment matching; the
/// upstream naming convention is not enforced anywhere.
const WEATHERBOX_MARKER: &str = "weatherbox";

/// Finds the weather box for one candidate city, following the shared
/// template indirection when the article itself carries none.
///
/// Absence (`Ok(None)`) is a normal outcome; only a dangling reference (an
/// article or template page that does not resolve at all) is an error.
pub struct InfoboxLocator<'a> {
    pages: &'a dyn PageProvider,
}

impl<'a> InfoboxLocator<'a> {
    pub fn new(pages: &'a dyn PageProvider) -> Self {
        Self { pages }
    }

    pub async fn locate(
        &self,
        candidate: &Candidate,
    ) -> Result<Option<WeatherBox>, LocateInfoboxError> {
        let page = self
            .pages
            .fetch_page(&candidate.article_title)
            .await?
            .ok_or_else(|| LocateInfoboxError::MissingArticle {
                title: candidate.article_title.clone(),
            })?;

        if let Some(weather_box) = weather_box_of(&page) {
            return Ok(Some(weather_box));
        }

        // No box on the article itself; big cities usually keep theirs on a
        // shared template page instead.
        let Some(template_name) = page
            .templates
            .iter()
            .map(|t| t.name.as_str())
            .find(|name| name.contains(WEATHERBOX_MARKER))
            .map(str::to_string)
        else {
            debug!("No weather box on article '{}'", candidate.article_title);
            return Ok(None);
        };

        let template_title = format!("Template: {template_name}");
        let page = self.pages.fetch_page(&template_title).await?.ok_or_else(|| {
            LocateInfoboxError::MissingTemplatePage {
                title: template_title.clone(),
            }
        })?;

        match weather_box_of(&page) {
            Some(weather_box) => Ok(Some(weather_box)),
            None => {
                debug!("No weather box on template page '{}'", template_title);
                Ok(None)
            }
        }
    }
}

fn weather_box_of(page: &WikiPage) -> Option<WeatherBox> {
    page.templates
        .iter()
        .find(|t| t.name == WEATHER_BOX_TEMPLATE)
        .map(|t| WeatherBox::new(t.fields.clone()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::wiki::{PageFetchError, Template};

    /// In-memory provider mapping titles to pages.
    struct FakePages {
        pages: HashMap<String, WikiPage>,
    }

    impl FakePages {
        fn new(pages: impl IntoIterator<Item = (&'static str, WikiPage)>) -> Self {
            Self {
                pages: pages
                    .into_iter()
                    .map(|(title, page)| (title.to_string(), page))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl PageProvider for FakePages {
        async fn fetch_page(&self, title: &str) -> Result<Option<WikiPage>, PageFetchError> {
            Ok(self.pages.get(title).cloned())
        }
    }

    fn candidate(article_title: &str) -> Candidate {
        Candidate {
            city_wd: "http://www.wikidata.org/entity/Q84".to_string(),
            name: "London".to_string(),
            population: 8_908_081,
            country: "United Kingdom".to_string(),
            article_title: article_title.to_string(),
            gps_lat: 51.5,
            gps_lon: -0.12,
        }
    }

    fn template(name: &str, fields: &[(&str, &str)]) -> Template {
        Template {
            name: name.to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn page(page_id: u64, templates: Vec<Template>) -> WikiPage {
        WikiPage { page_id, templates }
    }

    #[tokio::test]
    async fn weather_box_on_the_article_wins() {
        let pages = FakePages::new([(
            "London",
            page(
                10,
                vec![
                    template("Infobox settlement", &[("name", "London")]),
                    template("Weather box", &[("Jan high C", "8.1")]),
                ],
            ),
        )]);

        let found = InfoboxLocator::new(&pages)
            .locate(&candidate("London"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get("Jan high C"), Some("8.1"));
    }

    #[tokio::test]
    async fn indirection_through_shared_template_page() {
        let pages = FakePages::new([
            (
                "London",
                page(10, vec![template("London weatherbox", &[])]),
            ),
            (
                "Template: London weatherbox",
                page(11, vec![template("Weather box", &[("Jul sun", "180")])]),
            ),
        ]);

        let found = InfoboxLocator::new(&pages)
            .locate(&candidate("London"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get("Jul sun"), Some("180"));
    }

    #[tokio::test]
    async fn no_weatherbox_template_at_all_is_a_skip() {
        let pages = FakePages::new([(
            "London",
            page(10, vec![template("Infobox settlement", &[])]),
        )]);

        let found = InfoboxLocator::new(&pages)
            .locate(&candidate("London"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn template_page_without_weather_box_is_a_skip() {
        let pages = FakePages::new([
            (
                "London",
                page(10, vec![template("London weatherbox", &[])]),
            ),
            (
                "Template: London weatherbox",
                page(11, vec![template("Navbox", &[])]),
            ),
        ]);

        let found = InfoboxLocator::new(&pages)
            .locate(&candidate("London"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn dangling_article_is_fatal() {
        let pages = FakePages::new([]);

        let result = InfoboxLocator::new(&pages).locate(&candidate("Ghost")).await;
        assert!(matches!(
            result,
            Err(LocateInfoboxError::MissingArticle { title }) if title == "Ghost"
        ));
    }

    #[tokio::test]
    async fn dangling_template_page_is_fatal() {
        let pages = FakePages::new([(
            "London",
            page(10, vec![template("London weatherbox", &[])]),
        )]);

        let result = InfoboxLocator::new(&pages).locate(&candidate("London")).await;
        assert!(matches!(
            result,
            Err(LocateInfoboxError::MissingTemplatePage { title })
                if title == "Template: London weatherbox"
        ));
    }

    #[tokio::test]
    async fn marker_matching_is_substring_containment() {
        // "weatherbox" anywhere in the name triggers the indirection, even
        // for names that are not of the "<City> weatherbox" form.
        let pages = FakePages::new([
            (
                "London",
                page(10, vec![template("Old weatherbox archive", &[])]),
            ),
            (
                "Template: Old weatherbox archive",
                page(11, vec![template("Weather box", &[("Jan sun", "40")])]),
            ),
        ]);

        let found = InfoboxLocator::new(&pages)
            .locate(&candidate("London"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get("Jan sun"), Some("40"));
    }
}
