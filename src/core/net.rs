// src/core/net.rs
//! MediaWiki API access (blocking).

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// Rendered page as returned by `action=parse`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WikiPage {
    pub html: String,
    pub wikitext: String,
}

/// Where troop pages come from. The scraper only needs these two calls;
/// tests substitute captured pages.
pub trait PageSource {
    fn fetch_page(&mut self, title: &str) -> Result<WikiPage>;
    fn category_members(&mut self, category: &str) -> Result<Vec<String>>;
}

pub struct WikiClient {
    client: Client,
    api_url: String,
}

impl WikiClient {
    pub fn new(api_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, api_url: s!(api_url) })
    }

    fn get_json<T: for<'de> Deserialize<'de>>(&self, params: &[(&str, &str)]) -> Result<T> {
        let resp = self
            .client
            .get(&self.api_url)
            .query(params)
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }
}

impl PageSource for WikiClient {
    fn fetch_page(&mut self, title: &str) -> Result<WikiPage> {
        let params = [
            ("action", "parse"),
            ("page", title),
            ("format", "json"),
            ("prop", "text|wikitext"),
        ];
        let resp: ParseResponse = self.get_json(&params).map_err(|e| Error::Fetch {
            title: s!(title),
            reason: e.to_string(),
        })?;
        page_from_response(title, resp)
    }

    fn category_members(&mut self, category: &str) -> Result<Vec<String>> {
        let cmtitle = join!("Category:", category);
        let params = [
            ("action", "query"),
            ("list", "categorymembers"),
            ("cmtitle", cmtitle.as_str()),
            ("cmlimit", "max"),
            ("format", "json"),
        ];
        let resp: QueryResponse = self.get_json(&params)?;
        Ok(resp
            .query
            .map(|q| q.categorymembers.into_iter().map(|m| m.title).collect())
            .unwrap_or_default())
    }
}

/* ---------------- API response shapes ---------------- */

#[derive(Debug, Deserialize)]
pub(crate) struct ParseResponse {
    parse: Option<ParseBody>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ParseBody {
    text: Star,
    #[serde(default)]
    wikitext: Option<Star>,
}

/// MediaWiki's legacy `{"*": "..."}` content wrapper.
#[derive(Debug, Deserialize)]
struct Star {
    #[serde(rename = "*")]
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    categorymembers: Vec<CategoryMember>,
}

#[derive(Debug, Deserialize)]
struct CategoryMember {
    title: String,
}

pub(crate) fn page_from_response(title: &str, resp: ParseResponse) -> Result<WikiPage> {
    let fail = |reason: String| Error::Fetch { title: s!(title), reason };
    match resp.parse {
        Some(body) if !body.text.content.is_empty() => Ok(WikiPage {
            html: body.text.content,
            wikitext: body.wikitext.map(|w| w.content).unwrap_or_default(),
        }),
        Some(_) => Err(fail(s!("empty page"))),
        None => Err(fail(
            resp.error
                .map(|e| e.info)
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| s!("no parse content")),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ParseResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parse_response_yields_html_and_wikitext() {
        let resp = parse(r#"{"parse":{"title":"X","text":{"*":"<p>hi</p>"},"wikitext":{"*":"hi"}}}"#);
        let page = page_from_response("X", resp).unwrap();
        assert_eq!(page.html, "<p>hi</p>");
        assert_eq!(page.wikitext, "hi");
    }

    #[test]
    fn missing_page_is_a_fetch_error() {
        let resp = parse(r#"{"error":{"code":"missingtitle","info":"The page you specified doesn't exist."}}"#);
        let err = page_from_response("Nope", resp).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'Nope'"));
        assert!(msg.contains("doesn't exist"));
    }

    #[test]
    fn empty_html_is_a_fetch_error() {
        let resp = parse(r#"{"parse":{"text":{"*":""}}}"#);
        assert!(page_from_response("X", resp).is_err());
    }

    #[test]
    fn category_members_shape() {
        let resp: QueryResponse = serde_json::from_str(
            r#"{"batchcomplete":"","query":{"categorymembers":[{"pageid":1,"ns":0,"title":"Aserai Recruit"}]}}"#,
        )
        .unwrap();
        let titles: Vec<String> = resp.query.unwrap().categorymembers.into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Aserai Recruit"]);
    }
}
