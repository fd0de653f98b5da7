use content::SiteConfig;

use crate::{
    clamp_description, clamp_title, get_template_file,
    markup::{Element, Markup, Template},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Home,
    Cost,
    HowTo,
}

impl NavKey {
    pub const ALL: [NavKey; 3] = [NavKey::Home, NavKey::Cost, NavKey::HowTo];

    pub fn path(&self) -> &'static str {
        match self {
            NavKey::Home => "/",
            NavKey::Cost => "/cost/",
            NavKey::HowTo => "/how-to/",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavKey::Home => "Home",
            NavKey::Cost => "Cost",
            NavKey::HowTo => "How-To",
        }
    }
}

/// Everything that differs between two pages. Built per page and thrown away once
/// rendered.
#[derive(Debug, Clone)]
pub struct PageSpec {
    pub h1: String,
    pub subtitle: String,
    pub canonical_path: String,
    pub description: String,
    pub nav: NavKey,
    pub body: Markup,
}

/// Renders a full document. The `<title>` and the single `<h1>` are both taken from the
/// clamped `spec.h1`, so they can't drift apart.
pub fn render_page(config: &SiteConfig, spec: &PageSpec) -> String {
    let h1 = clamp_title(&spec.h1);
    let description = clamp_description(&spec.description);
    let header = Template::new(get_template_file("header"))
        .text("h1", &h1)
        .text("subtitle", &spec.subtitle)
        .render();

    Template::new(get_template_file("base"))
        .text("title", &h1)
        .text("description", &description)
        .text("canonical", &spec.canonical_path)
        .markup("styles", Markup::trusted(get_template_file("styles")))
        .text("brand", &config.brand_name)
        .markup("nav", nav(config, spec.nav))
        .markup("header", header)
        .text("image", &config.image_path())
        .markup("content", spec.body.clone())
        .markup("footer", footer(config))
        .render()
        .into_string()
}

pub fn cta_button(config: &SiteConfig) -> Markup {
    Element::new("a")
        .class("btn")
        .attr("href", &config.cta_href)
        .text(&config.cta_text)
        .into_markup()
}

fn nav(config: &SiteConfig, current: NavKey) -> Markup {
    let items: Markup = NavKey::ALL
        .iter()
        .map(|key| {
            Element::new("a")
                .attr("href", key.path())
                .attr_if(*key == current, "aria-current", "page")
                .text(key.label())
                .into_markup()
        })
        .collect();
    Element::new("nav")
        .class("nav")
        .attr("aria-label", "Primary navigation")
        .child(items)
        .child(cta_button(config))
        .into_markup()
}

fn footer(config: &SiteConfig) -> Markup {
    let links: Markup = NavKey::ALL
        .iter()
        .map(|key| {
            Element::new("a")
                .attr("href", key.path())
                .text(key.label())
                .into_markup()
        })
        .collect();
    Template::new(get_template_file("footer"))
        .markup("cta", cta_button(config))
        .markup("links", links)
        .text("brand", &config.brand_name)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(h1: &str, nav: NavKey) -> PageSpec {
        PageSpec {
            h1: h1.into(),
            subtitle: "A subtitle".into(),
            canonical_path: "/cost/".into(),
            description: "Cost ranges & factors".into(),
            nav,
            body: Element::new("h2").text("Body heading").into_markup(),
        }
    }

    #[test]
    fn title_matches_the_only_h1() {
        let html = render_page(&SiteConfig::default(), &spec("Repair <Cost>", NavKey::Cost));
        assert_eq!(html.matches("<h1>").count(), 1);
        assert!(html.contains("<title>Repair &lt;Cost&gt;</title>"));
        assert!(html.contains("<h1>Repair &lt;Cost&gt;</h1>"));
    }

    #[test]
    fn clamps_long_titles_and_descriptions() {
        let long = "Woodpecker ".repeat(20);
        let mut page = spec(&long, NavKey::Home);
        page.description = "d".repeat(300);
        let html = render_page(&SiteConfig::default(), &page);
        let expected_title = clamp_title(&long);
        assert!(html.contains(&format!("<title>{}</title>", expected_title)));
        assert!(html.contains(&format!("<h1>{}</h1>", expected_title)));
        assert!(html.contains(&format!("content=\"{}…\"", "d".repeat(154))));
    }

    #[test]
    fn marks_exactly_one_nav_entry_current() {
        for key in NavKey::ALL {
            let html = render_page(&SiteConfig::default(), &spec("T", key));
            // the stylesheet also mentions aria-current, but never inside a tag
            assert_eq!(html.matches(" aria-current=\"page\">").count(), 1);
            assert!(html.contains(&format!(
                "<a href=\"{}\" aria-current=\"page\">{}</a>",
                key.path(),
                key.label()
            )));
        }
    }

    #[test]
    fn renders_cta_footer_and_shared_image() {
        let config = SiteConfig::default();
        let html = render_page(&config, &spec("T", NavKey::Home));
        // nav + footer
        assert_eq!(html.matches("class=\"btn\"").count(), 2);
        assert!(html.contains("<img src=\"/picture.png\""));
        assert!(html.contains("<link rel=\"canonical\" href=\"/cost/\" />"));
        assert!(html.contains("<div class=\"footer-links\">"));
        assert!(html.contains("© Woodpecker Damage Repair Company."));
        assert!(html.contains("content=\"Cost ranges &amp; factors\""));
        assert!(!html.contains("<%="));
    }

    #[test]
    fn escapes_configured_text() {
        let config = SiteConfig {
            brand_name: "Bob & Sons".into(),
            cta_href: "mailto:a@b.c?subject=\"hi\"".into(),
            ..SiteConfig::default()
        };
        let html = render_page(&config, &spec("T", NavKey::Home));
        assert!(html.contains(">Bob &amp; Sons</a>"));
        assert!(html.contains("href=\"mailto:a@b.c?subject=&quot;hi&quot;\""));
    }
}
