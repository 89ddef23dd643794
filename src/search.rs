use crate::models::Course;
use crate::page;

/// One row of the search dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Display label, `Year <grade>, SEM<term> - <code> <name>`.
    pub label: String,
    /// Navigation target carrying the deep-link parameters.
    pub href: String,
    pub code: String,
}

/// Case-insensitive substring search over every course's name and code.
///
/// The match runs over the full dataset, not just the current page's
/// grade, so a suggestion can navigate across year pages. An empty
/// query yields nothing and the dropdown stays closed.
pub fn suggestions(courses: &[Course], query: &str) -> Vec<Suggestion> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    courses
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle) || c.code.to_lowercase().contains(&needle)
        })
        .map(|c| Suggestion {
            label: format!("Year {}, SEM{} - {} {}", c.grade, c.term, c.code, c.name),
            href: page::course_url(c.grade, c.term, &c.code),
            code: c.code.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, name: &str, grade: u32, term: u32) -> Course {
        Course {
            code: code.to_string(),
            name: name.to_string(),
            grade,
            term,
            image: String::new(),
            references: Vec::new(),
            readings: Vec::new(),
            tools: Vec::new(),
        }
    }

    fn dataset() -> Vec<Course> {
        vec![
            course("CS101", "Intro", 1, 1),
            course("CS102", "Data", 1, 2),
            course("CS201", "Data Structures", 2, 1),
        ]
    }

    #[test]
    fn test_empty_query_yields_no_suggestions() {
        assert!(suggestions(&dataset(), "").is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive_over_name() {
        let hits = suggestions(&dataset(), "DATA");
        let codes: Vec<&str> = hits.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["CS102", "CS201"]);
    }

    #[test]
    fn test_match_runs_over_code_too() {
        let hits = suggestions(&dataset(), "cs1");
        let codes: Vec<&str> = hits.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["CS101", "CS102"]);
    }

    #[test]
    fn test_label_and_href_formats() {
        let hits = suggestions(&dataset(), "intro");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label, "Year 1, SEM1 - CS101 Intro");
        assert_eq!(hits[0].href, "year1.html?term=1&code=CS101");
    }

    #[test]
    fn test_search_crosses_grade_pages() {
        // The dropdown must surface courses from other year pages.
        let hits = suggestions(&dataset(), "structures");
        assert_eq!(hits[0].href, "year2.html?term=1&code=CS201");
    }

    #[test]
    fn test_two_course_dataset_matches_only_data() {
        let data = vec![course("CS101", "Intro", 1, 1), course("CS102", "Data", 1, 2)];
        let hits = suggestions(&data, "data");
        let codes: Vec<&str> = hits.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["CS102"]);
    }
}
