use crate::constants::HOME_LABEL;
use crate::error::{Error, Result};
use crate::models::{Course, Semester};
use std::collections::BTreeSet;

/// Explicit view state for one course page.
///
/// The original page kept all of this in the DOM: an `active` class on
/// a pagination anchor, inline `max-height` styles marking expanded
/// panes, the raw value of the search input. Holding it here instead
/// makes every transition a plain function of the previous state and
/// rendering a projection of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// The single active semester tab; None only on a page with no
    /// courses (and therefore no semester tabs).
    pub active_semester: Option<Semester>,
    /// Codes whose detail panes are expanded.
    pub expanded_codes: BTreeSet<String>,
    /// Live search query, verbatim.
    pub query: String,
    /// Whether the suggestion dropdown is showing.
    pub suggestions_open: bool,
}

/// One entry in the pagination strip. HOME is a plain navigation link
/// and never becomes the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Semester(Semester),
}

impl Tab {
    pub fn label(&self) -> String {
        match self {
            Tab::Home => HOME_LABEL.to_string(),
            Tab::Semester(sem) => sem.to_string(),
        }
    }
}

/// Behavior of a single grade-level course listing page: the filtered
/// and sorted card set, the semester tab set derived from it, and the
/// view state the transitions below evolve.
#[derive(Debug)]
pub struct CoursePageController {
    grade: u32,
    courses: Vec<Course>,
    semesters: Vec<Semester>,
    state: ViewState,
}

impl CoursePageController {
    /// Build the controller for one grade page.
    ///
    /// Filters the dataset to the page's grade and sorts by
    /// `(term asc, code asc)`; the card set is fixed from here on and
    /// pagination only changes its shown/hidden projection. The first
    /// semester tab starts active, matching the tab the original
    /// markup marks `active` and clicks on load.
    pub fn new(all_courses: &[Course], grade: u32) -> Self {
        let mut courses: Vec<Course> = all_courses
            .iter()
            .filter(|c| c.grade == grade)
            .cloned()
            .collect();
        courses.sort_by(|a, b| a.term.cmp(&b.term).then_with(|| a.code.cmp(&b.code)));

        let mut semesters: Vec<Semester> = courses.iter().map(|c| c.semester()).collect();
        semesters.dedup();

        let state = ViewState {
            active_semester: semesters.first().copied(),
            expanded_codes: BTreeSet::new(),
            query: String::new(),
            suggestions_open: false,
        };

        CoursePageController {
            grade,
            courses,
            semesters,
            state,
        }
    }

    pub fn grade(&self) -> u32 {
        self.grade
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// All cards for this grade, in rendered order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Distinct semester tabs, ascending by term.
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    pub fn has_semester(&self, sem: Semester) -> bool {
        self.semesters.contains(&sem)
    }

    /// The pagination strip: the HOME escape link followed by one tab
    /// per semester.
    pub fn tabs(&self) -> Vec<Tab> {
        let mut tabs = vec![Tab::Home];
        tabs.extend(self.semesters.iter().copied().map(Tab::Semester));
        tabs
    }

    /// Whether a card is shown under the current pagination state.
    pub fn is_visible(&self, course: &Course) -> bool {
        self.state.active_semester == Some(course.semester())
    }

    pub fn is_expanded(&self, code: &str) -> bool {
        self.state.expanded_codes.contains(code)
    }

    /// Cards shown on the active tab, in rendered order.
    pub fn visible_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(move |&c| self.is_visible(c))
    }

    pub fn find_course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Tab-switch transition: collapse every expanded card (captions
    /// reset with them), move the active marker to `sem`. Embedders
    /// scroll the viewport back to the top after this. Selecting a
    /// semester the page has no tab for is a configuration error.
    pub fn select_semester(&mut self, sem: Semester) -> Result<()> {
        if !self.has_semester(sem) {
            return Err(Error::Configuration(format!(
                "grade {} page has no {} tab",
                self.grade, sem
            )));
        }
        self.state.expanded_codes.clear();
        self.state.active_semester = Some(sem);
        Ok(())
    }

    /// Toggle one card's detail pane. Returns the card's new expanded
    /// state; toggling a code that is not on this page is a no-op
    /// returning false.
    pub fn toggle_course(&mut self, code: &str) -> bool {
        if self.find_course(code).is_none() {
            return false;
        }
        if self.state.expanded_codes.contains(code) {
            self.state.expanded_codes.remove(code);
            false
        } else {
            self.state.expanded_codes.insert(code.to_string());
            true
        }
    }

    /// Expand a card if it is not already expanded (the deep-link
    /// path, which must never collapse an open card).
    pub fn expand_course(&mut self, code: &str) -> bool {
        if self.find_course(code).is_none() {
            return false;
        }
        self.state.expanded_codes.insert(code.to_string());
        true
    }

    /// Live search input transition: a non-empty query opens the
    /// dropdown, an empty one closes it.
    pub fn set_query(&mut self, query: &str) {
        self.state.query = query.to_string();
        self.state.suggestions_open = !query.is_empty();
    }

    /// Click-outside transition: close the dropdown, keep the query.
    pub fn dismiss_suggestions(&mut self) {
        self.state.suggestions_open = false;
    }
}
