// MediaWiki action API response models (format=json, formatversion=2)
// Author: kelexine (https://github.com/kelexine)

use serde::Deserialize;

/// Top-level envelope of an `action=query` response.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub query: Option<QueryBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryBody {
    /// Populated for `titles=` page queries.
    #[serde(default)]
    pub pages: Vec<Page>,

    /// Populated for `list=search` queries.
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    pub title: String,

    /// True when no page exists under this title.
    #[serde(default)]
    pub missing: bool,

    /// True when the title itself is malformed.
    #[serde(default)]
    pub invalid: bool,

    /// Plain-text extract (`prop=extracts&explaintext=1`).
    #[serde(default)]
    pub extract: Option<String>,

    /// Canonical page URL (`prop=info&inprop=url`).
    #[serde(default, rename = "fullurl")]
    pub full_url: Option<String>,

    /// Page properties (`prop=pageprops&ppprop=disambiguation`).
    #[serde(default)]
    pub pageprops: Option<PageProps>,

    /// Outgoing article links (`prop=links&plnamespace=0`), used as the
    /// option list when the page is a disambiguation page.
    #[serde(default)]
    pub links: Vec<PageLink>,
}

impl Page {
    pub fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .map(|props| props.disambiguation.is_some())
            .unwrap_or(false)
    }
}

#[derive(Debug, Deserialize)]
pub struct PageProps {
    /// Present (with an empty value) on disambiguation pages.
    #[serde(default)]
    pub disambiguation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageLink {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_article_page() {
        let json = r#"{
            "query": {
                "pages": [{
                    "pageid": 25670,
                    "title": "Rust (programming language)",
                    "extract": "Rust is a general-purpose programming language.",
                    "fullurl": "https://en.wikipedia.org/wiki/Rust_(programming_language)"
                }]
            }
        }"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        let page = &response.query.unwrap().pages[0];
        assert!(!page.missing);
        assert!(!page.is_disambiguation());
        assert_eq!(page.title, "Rust (programming language)");
        assert!(page.extract.as_deref().unwrap().starts_with("Rust is"));
    }

    #[test]
    fn test_parse_missing_page() {
        let json = r#"{"query": {"pages": [{"title": "Xyzzy12345", "missing": true}]}}"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert!(response.query.unwrap().pages[0].missing);
    }

    #[test]
    fn test_parse_disambiguation_page() {
        let json = r#"{
            "query": {
                "pages": [{
                    "title": "Mercury",
                    "pageprops": {"disambiguation": ""},
                    "links": [
                        {"title": "Mercury (element)"},
                        {"title": "Mercury (planet)"}
                    ]
                }]
            }
        }"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        let page = &response.query.unwrap().pages[0];
        assert!(page.is_disambiguation());
        assert_eq!(page.links.len(), 2);
        assert_eq!(page.links[0].title, "Mercury (element)");
    }

    #[test]
    fn test_parse_search_results() {
        let json = r#"{
            "query": {
                "search": [
                    {"title": "Rust (programming language)", "pageid": 25670},
                    {"title": "Rust Belt", "pageid": 1234}
                ]
            }
        }"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        let body = response.query.unwrap();
        assert_eq!(body.search.len(), 2);
        assert_eq!(body.search[1].title, "Rust Belt");
    }
}
