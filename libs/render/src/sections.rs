use content::{City, ContentSection, SiteConfig, Variant};

use crate::{
    markup::{Element, Markup},
    page::NavKey,
};

/// Paragraph body with `{anchor}` markers turned into links back to the home page. An
/// unclosed marker is kept as literal text.
pub fn paragraph(body: &str) -> Markup {
    let mut inner = Markup::new();
    let mut rest = body;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };
        inner.push_text(&rest[..open]);
        let anchor = &rest[open + 1..open + close];
        inner.push(
            Element::new("a")
                .attr("href", NavKey::Home.path())
                .text(anchor)
                .into_markup(),
        );
        rest = &rest[open + close + 1..];
    }
    inner.push_text(rest);
    Element::new("p").child(inner).into_markup()
}

fn section_blocks(sections: &[ContentSection]) -> Markup {
    let mut out = Markup::new();
    for section in sections {
        out.newline();
        out.push(Element::new("h2").text(section.heading).into_markup());
        out.newline();
        out.push(paragraph(section.body));
        out.newline();
    }
    out
}

fn muted(text: &str) -> Markup {
    Element::new("p").class("muted").text(text).into_markup()
}

/// Main/city content. City pages pass a short local line shown above the sections.
pub fn shared_sections(local_line: Option<&str>) -> Markup {
    let mut out = Markup::new();
    if let Some(line) = local_line {
        out.newline();
        out.push(muted(line));
    }
    out.push(section_blocks(Variant::Shared.sections()));
    out
}

pub fn cost_sections(config: &SiteConfig) -> Markup {
    let mut out = section_blocks(Variant::Cost.sections());
    out.newline();
    out.push(Element::void("hr").into_markup());
    out.newline();
    out.push(muted(&format!(
        "Typical repair range for most homes: {}. Final pricing depends on siding type, number of holes, and access.",
        config.cost_range()
    )));
    out
}

pub fn howto_sections() -> Markup {
    section_blocks(Variant::HowTo.sections())
}

pub fn city_callout(config: &SiteConfig, city: &City) -> Markup {
    let title = Element::new("div")
        .class("callout-title")
        .child(Element::new("span").class("badge").text("Typical range"))
        .child(Element::new("span").text(&format!("{} for most repairs", config.cost_range())));
    let body = Element::new("p").text(&format!(
        "In {}, most pricing comes down to siding type, how many holes need work, and access. \
         If you want a fast, no-pressure estimate, use the “{}” button above.",
        city, config.cta_text
    ));
    Element::new("div")
        .class("callout")
        .attr("role", "note")
        .attr("aria-label", "Typical cost range")
        .child(title)
        .child(body)
        .into_markup()
}

/// Secondary cost mention for city pages. Not a heading: city pages must keep the home
/// page's heading set.
pub fn city_cost_mention(config: &SiteConfig) -> Markup {
    let mut text = Markup::text(&format!(
        "Typical repair range often falls around {}. Siding type and access drive most pricing. See the ",
        config.cost_range()
    ));
    text.push(
        Element::new("a")
            .attr("href", NavKey::Cost.path())
            .text("cost page")
            .into_markup(),
    );
    text.push_text(" for details.");

    let mut out = Markup::new();
    out.newline();
    out.push(Element::void("hr").into_markup());
    out.newline();
    out.push(Element::new("p").class("muted").child(text).into_markup());
    out
}
