use content::SiteConfig;

use crate::{
    page::{NavKey, PageSpec},
    sections::howto_sections,
    Render,
};

pub struct HowToPage;

impl Render for HowToPage {
    fn page_spec(&self, config: &SiteConfig) -> PageSpec {
        PageSpec {
            h1: config.howto_title.clone(),
            subtitle: "A practical guide that prioritizes a lasting repair over a quick patch."
                .into(),
            canonical_path: NavKey::HowTo.path().into(),
            description:
                "Clear steps for repairing woodpecker holes in siding, EIFS, and stucco without making it worse."
                    .into(),
            nav: NavKey::HowTo,
            body: howto_sections(),
        }
    }
}
