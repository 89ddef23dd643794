//! Course page controller for grade-level course listing pages.
//!
//! This binary replaces the page's ad-hoc DOM scripting with a typed
//! implementation that loads the full course dataset upfront, models
//! the page's interactive state (semester tabs, expanded cards, live
//! search) explicitly, and renders the page as a projection of that
//! state.

mod config;
mod constants;
mod controller;
mod deeplink;
mod error;
mod loader;
mod models;
mod page;
mod render;
mod search;

use error::Result;
use std::path::Path;
use std::{env, fs, process};

fn flag_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

/// Main entry point for the course page controller.
///
/// This program:
/// 1. Parses the page URL (grade marker plus optional deep link)
/// 2. Loads page settings from coursepage.toml if present
/// 3. Loads the full course dataset upfront
/// 4. Builds the page controller and resolves the deep link
/// 5. Renders the page (or the error state) as HTML
#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let page_url = match args.get(1).filter(|arg| !arg.starts_with("--")) {
        Some(url) => url.clone(),
        None => {
            eprintln!(
                "Usage: hoa-coursepage <page-url> [--config <path>] [--tab <label>] [--search <query>] [--out <path>]"
            );
            eprintln!("Example: hoa-coursepage \"year1.html?term=2&code=CS201\"");
            process::exit(1);
        }
    };

    let config_path =
        flag_value(&args, "--config").unwrap_or_else(|| constants::DEFAULT_CONFIG_PATH.to_string());
    let cfg = match config::load_config(Path::new(&config_path)) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let parsed = match page::parse_page_url(&page_url) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let out_path = flag_value(&args, "--out");

    println!("Loading course data from {}", cfg.data);
    let courses = match loader::load_courses(&cfg.data).await {
        Ok(courses) => courses,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(ref out) = out_path {
                fs::write(out, render::render_error_page(&e.to_string()))?;
                println!("Wrote error page to {}", out);
            }
            process::exit(1);
        }
    };
    println!("Loaded {} courses", courses.len());

    let mut ctl = controller::CoursePageController::new(&courses, parsed.grade);
    println!(
        "Grade {} page: {} courses across {} semesters",
        parsed.grade,
        ctl.courses().len(),
        ctl.semesters().len()
    );

    if let Some(label) = flag_value(&args, "--tab") {
        if label.trim() == constants::HOME_LABEL {
            // HOME is the escape link; it navigates instead of switching tabs.
            println!("HOME is a plain navigation link; leaving tabs unchanged");
        } else {
            match models::Semester::from_label(&label) {
                Some(sem) => match ctl.select_semester(sem) {
                    Ok(()) => println!("Switched to {}", sem),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    }
                },
                None => {
                    eprintln!("Error: unrecognized tab label {:?}", label);
                    process::exit(1);
                }
            }
        }
    }

    if let Some(ref params) = parsed.deep_link {
        match deeplink::resolve(&mut ctl, params, &cfg) {
            Ok(outcome) => println!(
                "Deep link: {} on {}, scroll offset {:.0}px",
                outcome.code, outcome.semester, outcome.y_offset
            ),
            // A miss is a logged give-up; the page stays usable.
            Err(e) => eprintln!("Warning: {}", e),
        }
    }

    let query = flag_value(&args, "--search").unwrap_or_default();
    ctl.set_query(&query);
    let hits = search::suggestions(&courses, &ctl.state().query);
    if !query.is_empty() {
        println!("Search {:?} matched {} courses:", query, hits.len());
        for hit in &hits {
            println!("  {} -> {}", hit.label, hit.href);
        }
    }

    let html = render::render_page(&ctl, &hits);
    match out_path {
        Some(out) => {
            fs::write(&out, html)?;
            println!("Wrote {}", out);
        }
        None => println!("{}", html),
    }

    Ok(())
}
