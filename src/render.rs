use crate::constants::{CAPTION_COLLAPSED, CAPTION_EXPANDED, HOME_HREF};
use crate::controller::{CoursePageController, Tab};
use crate::models::{Course, LinkEntry};
use crate::search::Suggestion;

// ============================================================================
// Escaping
// ============================================================================

/// Minimal HTML escaping for text and attribute interpolation.
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// Course Cards
// ============================================================================

/// Render one labeled link-list: entries with a link become anchors
/// opening in a new tab, entries without become plain spans, joined by
/// line breaks.
fn render_link_list(entries: &[LinkEntry]) -> String {
    entries
        .iter()
        .map(|entry| match &entry.link {
            Some(link) => format!(
                r#"<a href="{}" target="_blank">{}</a>"#,
                html_escape(link),
                html_escape(&entry.title)
            ),
            None => format!("<span>{}</span>", html_escape(&entry.title)),
        })
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Render one course card in the shape the page script originally
/// built: a `course-section` tagged with its semester and code, a
/// header with thumbnail, title and toggle button, and the expandable
/// detail pane. Shown/hidden and expanded/collapsed come from the view
/// state, not from anything read back out of the markup.
pub fn render_course_section(course: &Course, visible: bool, expanded: bool) -> String {
    let caption = if expanded {
        CAPTION_EXPANDED
    } else {
        CAPTION_COLLAPSED
    };
    let display = if visible { "block" } else { "none" };
    let pane_class = if expanded {
        "expandable-content expanded"
    } else {
        "expandable-content"
    };

    format!(
        r#"<div class="course-section" data-semester="{semester}" data-code="{code}" style="display: {display}">
  <div class="course-header">
    <div class="course-info">
      <img class="course-image" src="{image}" alt="Course Image" />
      <h1 class="course-title">{title}</h1>
    </div>
    <button class="toggle-button">{caption}</button>
  </div>
  <div class="{pane_class}">
    <p><strong>Reference Books:</strong><br>{references}</p>
    <p><strong>Further Readings:</strong><br>{readings}</p>
    <p><strong>Tools Needed:</strong><br>{tools}</p>
  </div>
</div>"#,
        semester = course.semester(),
        code = html_escape(&course.code),
        display = display,
        image = html_escape(&course.image),
        title = html_escape(&course.title()),
        caption = caption,
        pane_class = pane_class,
        references = render_link_list(&course.references),
        readings = render_link_list(&course.readings),
        tools = render_link_list(&course.tools),
    )
}

/// Render the card container for the controller's current state, cards
/// in sorted order.
pub fn render_course_container(controller: &CoursePageController) -> String {
    let sections: Vec<String> = controller
        .courses()
        .iter()
        .map(|course| {
            render_course_section(
                course,
                controller.is_visible(course),
                controller.is_expanded(&course.code),
            )
        })
        .collect();

    format!(
        "<div class=\"course-container\">\n{}\n</div>",
        sections.join("\n")
    )
}

// ============================================================================
// Search Dropdown
// ============================================================================

/// Render the suggestion dropdown. A closed dropdown renders hidden
/// regardless of content, mirroring the click-outside behavior.
pub fn render_suggestions(suggestions: &[Suggestion], open: bool) -> String {
    let display = if open && !suggestions.is_empty() {
        "block"
    } else {
        "none"
    };

    let rows: Vec<String> = suggestions
        .iter()
        .map(|s| {
            format!(
                r#"  <div class="suggestion"><a href="{}">{}</a></div>"#,
                html_escape(&s.href),
                html_escape(&s.label)
            )
        })
        .collect();

    format!(
        "<div class=\"suggestions\" style=\"display: {}\">\n{}\n</div>",
        display,
        rows.join("\n")
    )
}

// ============================================================================
// Pagination
// ============================================================================

/// Render the pagination strip: the HOME escape link plus one anchor
/// per semester tab, exactly one of them marked active.
pub fn render_pagination(controller: &CoursePageController) -> String {
    let links: Vec<String> = controller
        .tabs()
        .iter()
        .map(|tab| match tab {
            Tab::Home => format!(r#"  <a href="{}">{}</a>"#, HOME_HREF, tab.label()),
            Tab::Semester(sem) => {
                let class = if controller.state().active_semester == Some(*sem) {
                    " class=\"active\""
                } else {
                    ""
                };
                format!(r##"  <a href="#"{}>{}</a>"##, class, sem)
            }
        })
        .collect();

    format!(
        "<div class=\"pagination\">\n{}\n</div>",
        links.join("\n")
    )
}

// ============================================================================
// Page Assembly
// ============================================================================

/// Assemble the full demo page around the collaborator markup the
/// original script attached to: search input, suggestions box,
/// pagination strip, and the card container.
pub fn render_page(controller: &CoursePageController, suggestions: &[Suggestion]) -> String {
    let mut lines = vec![
        "<!DOCTYPE html>".to_string(),
        "<html lang=\"en\">".to_string(),
        "<head>".to_string(),
        "  <meta charset=\"UTF-8\" />".to_string(),
        format!("  <title>Year {} Courses</title>", controller.grade()),
        "</head>".to_string(),
        "<body>".to_string(),
        "<div class=\"search-bar\">".to_string(),
        format!(
            r#"  <input class="search-input" type="text" placeholder="Search courses" value="{}" />"#,
            html_escape(&controller.state().query)
        ),
    ];
    lines.push(render_suggestions(
        suggestions,
        controller.state().suggestions_open,
    ));
    lines.push("</div>".to_string());
    lines.push(render_pagination(controller));
    lines.push(render_course_container(controller));
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());

    lines.join("\n")
}

/// Render the user-visible error state shown in place of the course
/// page when the dataset cannot be loaded.
pub fn render_error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>Course data unavailable</title>
</head>
<body>
<div class="load-error">
  <h1>Course data unavailable</h1>
  <p>{}</p>
</div>
</body>
</html>"#,
        html_escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::CoursePageController;
    use crate::models::Semester;
    use crate::search;

    fn course(code: &str, name: &str, grade: u32, term: u32) -> Course {
        Course {
            code: code.to_string(),
            name: name.to_string(),
            grade,
            term,
            image: format!("img/{}.png", code.to_lowercase()),
            references: vec![
                LinkEntry {
                    title: "Course Book".to_string(),
                    link: Some("https://example.com/book".to_string()),
                },
                LinkEntry {
                    title: "Handout".to_string(),
                    link: None,
                },
            ],
            readings: Vec::new(),
            tools: Vec::new(),
        }
    }

    #[test]
    fn test_link_list_mixes_anchors_and_spans() {
        let c = course("CS101", "Intro", 1, 1);
        let html = render_link_list(&c.references);
        assert_eq!(
            html,
            "<a href=\"https://example.com/book\" target=\"_blank\">Course Book</a><br><span>Handout</span>"
        );
    }

    #[test]
    fn test_card_carries_semester_and_code_tags() {
        let c = course("CS101", "Intro", 1, 1);
        let html = render_course_section(&c, true, false);
        assert!(html.contains(r#"data-semester="SEM1""#));
        assert!(html.contains(r#"data-code="CS101""#));
        assert!(html.contains("CS101 Intro"));
        assert!(html.contains("Show details"));
        assert!(html.contains("display: block"));
    }

    #[test]
    fn test_hidden_and_expanded_projections() {
        let c = course("CS101", "Intro", 1, 1);
        let html = render_course_section(&c, false, true);
        assert!(html.contains("display: none"));
        assert!(html.contains("Hide details"));
        assert!(html.contains("expandable-content expanded"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let mut c = course("CS101", "Intro <b>&\"", 1, 1);
        c.references.clear();
        let html = render_course_section(&c, true, false);
        assert!(html.contains("Intro &lt;b&gt;&amp;&quot;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_container_shows_only_active_semester() {
        let data = vec![course("CS101", "Intro", 1, 1), course("CS102", "Data", 1, 2)];
        let ctl = CoursePageController::new(&data, 1);
        let html = render_course_container(&ctl);
        let shown = html.matches("display: block").count();
        let hidden = html.matches("display: none").count();
        assert_eq!(shown, 1);
        assert_eq!(hidden, 1);
    }

    #[test]
    fn test_pagination_marks_exactly_one_active_tab() {
        let data = vec![course("CS101", "Intro", 1, 1), course("CS102", "Data", 1, 2)];
        let mut ctl = CoursePageController::new(&data, 1);
        ctl.select_semester(Semester(2)).unwrap();
        let html = render_pagination(&ctl);
        assert_eq!(html.matches("class=\"active\"").count(), 1);
        assert!(html.contains(">HOME</a>"));
        assert!(html.contains("href=\"index.html\""));
    }

    #[test]
    fn test_closed_dropdown_renders_hidden() {
        let data = vec![course("CS102", "Data", 1, 2)];
        let hits = search::suggestions(&data, "data");
        assert!(render_suggestions(&hits, false).contains("display: none"));
        assert!(render_suggestions(&hits, true).contains("display: block"));
        assert!(render_suggestions(&[], true).contains("display: none"));
    }

    #[test]
    fn test_page_contains_the_collaborator_markup() {
        let data = vec![course("CS101", "Intro", 1, 1)];
        let ctl = CoursePageController::new(&data, 1);
        let html = render_page(&ctl, &[]);
        assert!(html.contains("class=\"search-input\""));
        assert!(html.contains("class=\"suggestions\""));
        assert!(html.contains("class=\"pagination\""));
        assert!(html.contains("class=\"course-container\""));
    }

    #[test]
    fn test_error_page_surfaces_and_escapes_the_message() {
        let html = render_error_page("failed to parse <course.json>");
        assert!(html.contains("Course data unavailable"));
        assert!(html.contains("failed to parse &lt;course.json&gt;"));
    }
}
