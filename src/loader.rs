use crate::error::Result;
use crate::models::Course;
use std::fs;

/// Parse a JSON document containing an array of course records.
pub fn parse_courses(json: &str) -> Result<Vec<Course>> {
    Ok(serde_json::from_str(json)?)
}

/// Load the course dataset from a filesystem path or an http(s) URL.
///
/// The whole dataset is loaded and decoded before any rendering
/// starts; a failure here halts the page instead of rendering a
/// partial one. There is no retry.
pub async fn load_courses(source: &str) -> Result<Vec<Course>> {
    let json = if source.starts_with("http://") || source.starts_with("https://") {
        reqwest::get(source)
            .await?
            .error_for_status()?
            .text()
            .await?
    } else {
        fs::read_to_string(source)?
    };
    parse_courses(&json)
}
