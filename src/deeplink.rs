use crate::config::PageConfig;
use crate::controller::CoursePageController;
use crate::error::{Error, Result};
use crate::models::Semester;
use crate::page::DeepLinkParams;

/// Everything the embedder needs to finish a deep link: which tab
/// ended up active, which card to scroll to, and the scroll offset to
/// apply above the card.
#[derive(Debug, Clone, PartialEq)]
pub struct DeepLinkOutcome {
    pub semester: Semester,
    pub code: String,
    pub y_offset: f64,
}

/// Upward scroll correction for the fixed page header: a constant base
/// minus a viewport-height fraction.
pub fn scroll_y_offset(viewport_height: f64, base: f64, scale: f64) -> f64 {
    base - viewport_height * scale
}

/// Resolve `?term=<t>&code=<c>` once rendering is complete.
///
/// The original page polled the DOM on a 100 ms interval until the
/// target card appeared, with no give-up path if it never did.
/// Resolution here runs strictly after the controller has built its
/// full card set, so the lookup is a single synchronous attempt: a
/// term with no tab on this page, or a code matching no card title,
/// is a `LookupMiss` that leaves the page usable on whatever tab is
/// active. On a hit the matching tab is activated, the card expanded,
/// and the scroll offset computed from the configured viewport.
pub fn resolve(
    controller: &mut CoursePageController,
    params: &DeepLinkParams,
    config: &PageConfig,
) -> Result<DeepLinkOutcome> {
    let miss = || Error::LookupMiss {
        term: params.term,
        code: params.code.clone(),
    };

    let semester = Semester(params.term);
    if !controller.has_semester(semester) {
        return Err(miss());
    }
    controller.select_semester(semester)?;

    // A deep-link code matches as a substring of the card title
    // `<code> <name>`, not as an exact key.
    let code = controller
        .courses()
        .iter()
        .find(|c| c.title().contains(&params.code))
        .map(|c| c.code.clone())
        .ok_or_else(miss)?;
    controller.expand_course(&code);

    Ok(DeepLinkOutcome {
        semester,
        code,
        y_offset: scroll_y_offset(
            config.viewport_height,
            config.base_y_offset,
            config.viewport_scale,
        ),
    })
}
