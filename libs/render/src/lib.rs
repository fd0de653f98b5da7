use content::SiteConfig;

pub mod city_page;
pub mod clamp;
pub mod cost_page;
pub mod home_page;
pub mod howto_page;
pub mod markup;
pub mod page;
pub mod sections;
pub mod sitemap;

pub use self::clamp::*;
pub use self::markup::{escape, Element, Markup, Template};
pub use self::page::{render_page, NavKey, PageSpec};

pub trait Render {
    fn page_spec(&self, config: &SiteConfig) -> PageSpec;

    fn render(&self, config: &SiteConfig) -> String {
        render_page(config, &self.page_spec(config))
    }
}

/// Compiled-in template files, looked up by name.
pub fn get_template_file(requested_file: &str) -> &'static str {
    match requested_file {
        "base" => include_str!("../templates/base.html"),
        "header" => include_str!("../templates/header.html"),
        "footer" => include_str!("../templates/footer.html"),
        "styles" => include_str!("../templates/styles.css"),
        _ => {
            log::warn!("Could not find template {}", requested_file);
            ""
        }
    }
}
