use content::{City, SiteConfig};

use crate::{
    clamp_title,
    page::{NavKey, PageSpec},
    sections::{city_callout, city_cost_mention, shared_sections},
    Render,
};

pub struct CityPage<'a> {
    pub city: &'a City,
}

impl<'a> CityPage<'a> {
    pub fn new(city: &'a City) -> Self {
        CityPage { city }
    }
}

pub fn city_h1(service: &str, city: &City) -> String {
    clamp_title(&format!("{} in {}", service, city))
}

impl<'a> Render for CityPage<'a> {
    fn page_spec(&self, config: &SiteConfig) -> PageSpec {
        let mut body = shared_sections(Some(&format!("Serving {}.", self.city)));
        body.push(city_callout(config, self.city));
        body.push(city_cost_mention(config));

        PageSpec {
            h1: city_h1(&config.service_title, self.city),
            subtitle: "Same core guide, plus a quick local note and a typical cost range.".into(),
            canonical_path: self.city.path(),
            description: format!(
                "Woodpecker damage repair guide for wood siding, cedar, EIFS, and stucco with local context for {}.",
                self.city
            ),
            nav: NavKey::Home,
            body,
        }
    }
}
