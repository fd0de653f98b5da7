use std::collections::{BTreeMap, BTreeSet, HashSet};

use regex::Regex;
use render::{DESCRIPTION_MAX, TITLE_MAX};
use thiserror::Error;

use crate::pages::{PageKind, RenderedPage};

lazy_static::lazy_static! {
    static ref TITLE_RGX: Regex = Regex::new(r"(?s)<title>(.*?)</title>").unwrap();
    static ref H1_RGX: Regex = Regex::new(r"(?s)<h1[^>]*>(.*?)</h1>").unwrap();
    static ref H2_RGX: Regex = Regex::new(r"(?s)<h2[^>]*>(.*?)</h2>").unwrap();
    static ref DESC_RGX: Regex =
        Regex::new(r#"<meta name="description" content="([^"]*)""#).unwrap();
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("{page}: expected exactly one <h1>, found {count}")]
    MultipleH1 { page: String, count: usize },
    #[error("{page}: title {title:?} does not match h1 {h1:?}")]
    TitleMismatch {
        page: String,
        title: String,
        h1: String,
    },
    #[error("{page}: title is {len} characters (max {max})", max = TITLE_MAX)]
    TitleTooLong { page: String, len: usize },
    #[error("{page}: description is {len} characters (max {max})", max = DESCRIPTION_MAX)]
    DescriptionTooLong { page: String, len: usize },
    #[error("{page}: headings differ from the home page (missing {missing:?}, extra {extra:?})")]
    HeadingParity {
        page: String,
        missing: Vec<String>,
        extra: Vec<String>,
    },
    #[error("heading {heading:?} is reused across {groups:?}")]
    SharedHeading {
        heading: String,
        groups: Vec<&'static str>,
    },
    #[error("{path} is generated more than once")]
    DuplicatePath { path: String },
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

fn captures(rgx: &Regex, html: &str) -> Vec<String> {
    rgx.captures_iter(html)
        .map(|c| unescape(c[1].trim()))
        .collect()
}

/// What validation reads back out of a rendered document.
#[derive(Debug)]
pub struct PageFacts {
    pub title: Option<String>,
    pub h1s: Vec<String>,
    pub h2s: BTreeSet<String>,
    pub description: Option<String>,
}

impl PageFacts {
    pub fn extract(html: &str) -> Self {
        PageFacts {
            title: captures(&TITLE_RGX, html).into_iter().next(),
            h1s: captures(&H1_RGX, html),
            h2s: captures(&H2_RGX, html).into_iter().collect(),
            description: captures(&DESC_RGX, html).into_iter().next(),
        }
    }
}

fn group_name(kind: PageKind) -> &'static str {
    match kind {
        PageKind::Home | PageKind::City => "shared",
        PageKind::Cost => "cost",
        PageKind::HowTo => "how-to",
    }
}

/// Checks the rendered site against its SEO rules and returns every violation found.
pub fn validate(pages: &[RenderedPage]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen_paths = HashSet::new();
    let mut home_h2s: Option<BTreeSet<String>> = None;
    let mut city_h2s = Vec::new();
    let mut heading_groups: BTreeMap<String, BTreeSet<&'static str>> = BTreeMap::new();

    for page in pages {
        let path = page.url_path.clone();
        if !seen_paths.insert(path.clone()) {
            violations.push(Violation::DuplicatePath { path: path.clone() });
        }
        let facts = PageFacts::extract(&page.html);

        if facts.h1s.len() != 1 {
            violations.push(Violation::MultipleH1 {
                page: path.clone(),
                count: facts.h1s.len(),
            });
        }
        let title = facts.title.clone().unwrap_or_default();
        if let Some(h1) = facts.h1s.first() {
            if *h1 != title {
                violations.push(Violation::TitleMismatch {
                    page: path.clone(),
                    title: title.clone(),
                    h1: h1.clone(),
                });
            }
        }
        let title_len = title.chars().count();
        if title_len > TITLE_MAX {
            violations.push(Violation::TitleTooLong {
                page: path.clone(),
                len: title_len,
            });
        }
        let desc_len = facts
            .description
            .as_deref()
            .map(|d| d.chars().count())
            .unwrap_or(0);
        if desc_len > DESCRIPTION_MAX {
            violations.push(Violation::DescriptionTooLong {
                page: path.clone(),
                len: desc_len,
            });
        }

        // home and city pages count once as the shared group
        if page.kind != PageKind::City {
            for heading in &facts.h2s {
                heading_groups
                    .entry(heading.clone())
                    .or_default()
                    .insert(group_name(page.kind));
            }
        }
        match page.kind {
            PageKind::Home => home_h2s = Some(facts.h2s),
            PageKind::City => city_h2s.push((path, facts.h2s)),
            _ => {}
        }
    }

    if let Some(home) = home_h2s {
        for (page, h2s) in city_h2s {
            if h2s != home {
                violations.push(Violation::HeadingParity {
                    page,
                    missing: home.difference(&h2s).cloned().collect(),
                    extra: h2s.difference(&home).cloned().collect(),
                });
            }
        }
    }

    for (heading, groups) in heading_groups {
        if groups.len() > 1 {
            violations.push(Violation::SharedHeading {
                heading,
                groups: groups.into_iter().collect(),
            });
        }
    }

    violations
}
