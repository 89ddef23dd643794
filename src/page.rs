use crate::error::{Error, Result};
use regex::Regex;
use urlencoding::{decode, encode};

/// A parsed course page URL: the grade the page shows plus any
/// deep-link parameters carried in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    pub grade: u32,
    pub deep_link: Option<DeepLinkParams>,
}

/// The `term`/`code` query-parameter pair selecting a deep-linked
/// course. Both parameters must be present for a deep link to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkParams {
    pub term: u32,
    pub code: String,
}

/// Extract the grade marker from a page path such as `year3.html`.
///
/// The path contract requires a single-digit `year<N>` marker; a path
/// without one cannot identify a grade and is a fatal configuration
/// error rather than a guessed fallback.
pub fn parse_grade(path: &str) -> Result<u32> {
    let re = Regex::new(r"year(\d)").unwrap();
    let caps = re.captures(path).ok_or_else(|| {
        Error::Configuration(format!(
            "page path {:?} does not contain a year<digit> marker",
            path
        ))
    })?;
    caps[1]
        .parse()
        .map_err(|_| Error::Configuration(format!("unreadable grade marker in {:?}", path)))
}

/// Parse a full page URL of the form `year<g>.html?term=<t>&code=<c>`.
pub fn parse_page_url(url: &str) -> Result<PageUrl> {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };
    let grade = parse_grade(path)?;
    let deep_link = query.and_then(parse_deep_link);
    Ok(PageUrl { grade, deep_link })
}

/// Pick `term` and `code` out of a query string. A missing or
/// non-integer `term`, or a missing `code`, means no deep link.
fn parse_deep_link(query: &str) -> Option<DeepLinkParams> {
    let mut term = None;
    let mut code = None;
    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some(kv) => kv,
            None => continue,
        };
        match key {
            "term" => term = value.parse::<u32>().ok(),
            "code" => code = decode(value).ok().map(|c| c.into_owned()),
            _ => {}
        }
    }
    Some(DeepLinkParams {
        term: term?,
        code: code?,
    })
}

/// Build the navigation target for a search suggestion:
/// `year<grade>.html?term=<term>&code=<code>`.
pub fn course_url(grade: u32, term: u32, code: &str) -> String {
    format!("year{}.html?term={}&code={}", grade, term, encode(code))
}
