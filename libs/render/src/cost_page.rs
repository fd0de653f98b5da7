use content::SiteConfig;

use crate::{
    page::{NavKey, PageSpec},
    sections::cost_sections,
    Render,
};

pub struct CostPage;

impl Render for CostPage {
    fn page_spec(&self, config: &SiteConfig) -> PageSpec {
        PageSpec {
            h1: config.cost_title.clone(),
            subtitle: "Simple ranges and the factors that usually move the price.".into(),
            canonical_path: NavKey::Cost.path().into(),
            description: "Typical woodpecker damage repair cost ranges and what changes pricing."
                .into(),
            nav: NavKey::Cost,
            body: cost_sections(config),
        }
    }
}
