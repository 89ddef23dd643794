use serde::Deserialize;
use std::fmt;

/// One dataset record describing a single academic unit offered in a
/// specific grade and term.
///
/// Courses are loaded once per page view and never mutated afterwards.
/// `code` is unique within a grade+term pair and serves as the lookup
/// key for both cards and search.
#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    pub code: String,
    pub name: String,
    pub grade: u32,
    pub term: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub references: Vec<LinkEntry>,
    #[serde(default)]
    pub readings: Vec<LinkEntry>,
    #[serde(default)]
    pub tools: Vec<LinkEntry>,
}

/// A titled entry that may or may not carry a hyperlink.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkEntry {
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl Course {
    /// Semester tag shared by the card and its pagination tab.
    pub fn semester(&self) -> Semester {
        Semester(self.term)
    }

    /// Card heading, `<code> <name>`.
    pub fn title(&self) -> String {
        format!("{} {}", self.code, self.name)
    }
}

/// A semester tab identity, displayed as `SEM<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Semester(pub u32);

impl Semester {
    /// Parse a pagination tab label such as "SEM2". The HOME escape
    /// link and any other non-semester label yield None.
    pub fn from_label(label: &str) -> Option<Semester> {
        label.trim().strip_prefix("SEM")?.parse().ok().map(Semester)
    }

    pub fn term(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SEM{}", self.0)
    }
}
