use content::{City, SiteConfig};

use crate::{
    markup::{Element, Markup},
    page::{NavKey, PageSpec},
    sections::shared_sections,
    Render,
};

pub struct HomePage<'a> {
    pub cities: &'a [City],
}

impl<'a> HomePage<'a> {
    pub fn new(cities: &'a [City]) -> Self {
        HomePage { cities }
    }

    fn render_city_links(&self) -> Markup {
        let items: Markup = self
            .cities
            .iter()
            .map(|city| {
                let link = Element::new("a")
                    .attr("href", city.path())
                    .text(&city.to_string());
                let mut item = Markup::new();
                item.newline();
                item.push(Element::new("li").child(link).into_markup());
                item
            })
            .collect();
        Element::new("ul")
            .class("city-grid")
            .child(items)
            .into_markup()
    }

    fn render_also_available(&self, config: &SiteConfig) -> Markup {
        let mut text = Markup::text("Also available: ");
        text.push(
            Element::new("a")
                .attr("href", NavKey::Cost.path())
                .text(&config.cost_title)
                .into_markup(),
        );
        text.push_text(" and ");
        text.push(
            Element::new("a")
                .attr("href", NavKey::HowTo.path())
                .text(&config.howto_title)
                .into_markup(),
        );
        text.push_text(".");
        Element::new("p").class("muted").child(text).into_markup()
    }
}

impl<'a> Render for HomePage<'a> {
    fn page_spec(&self, config: &SiteConfig) -> PageSpec {
        let mut body = shared_sections(None);
        body.newline();
        body.push(Element::void("hr").into_markup());
        body.newline();
        // not an <h2>: the city list must not change the shared heading set
        body.push(
            Element::new("p")
                .class("list-title")
                .text("Choose your city")
                .into_markup(),
        );
        body.newline();
        body.push(
            Element::new("p")
                .class("muted")
                .text("Select a city page for the same guide with a light local note.")
                .into_markup(),
        );
        body.newline();
        body.push(self.render_city_links());
        body.newline();
        body.push(Element::void("hr").into_markup());
        body.newline();
        body.push(self.render_also_available(config));

        PageSpec {
            h1: config.service_title.clone(),
            subtitle: "How woodpecker damage happens, how it gets repaired, and when to call help."
                .into(),
            canonical_path: NavKey::Home.path().into(),
            description: "Straight answers on woodpecker damage repair for wood siding, cedar siding, EIFS, and stucco.".into(),
            nav: NavKey::Home,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_every_city_in_roster_order() {
        let cities = [City::new("Troy", "NY"), City::new("St. Paul", "MN")];
        let html = HomePage::new(&cities).render(&SiteConfig::default());
        let troy = html.find(r#"<a href="/troy-ny/">Troy, NY</a>"#).unwrap();
        let paul = html
            .find(r#"<a href="/st-paul-mn/">St. Paul, MN</a>"#)
            .unwrap();
        assert!(troy < paul);
        assert!(html.contains(r#"<a href="/" aria-current="page">Home</a>"#));
        assert!(html.contains(r#"<a href="/cost/">Woodpecker Damage Repair Cost</a>"#));
    }

    #[test]
    fn uses_the_service_title_as_h1() {
        let html = HomePage::new(&[]).render(&SiteConfig::default());
        assert!(html.contains(
            "<h1>Woodpecker Damage Repair/Wood Siding &amp; EIFS Services</h1>"
        ));
        assert!(html.contains(r#"<link rel="canonical" href="/" />"#));
    }
}
