use std::fmt;

use crate::{city_state_slug, slugify};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct City {
    pub name: &'static str,
    pub state: &'static str,
}

impl City {
    pub const fn new(name: &'static str, state: &'static str) -> Self {
        City { name, state }
    }

    pub fn slug(&self) -> String {
        city_state_slug(self.name, self.state)
    }

    /// Canonical URL path, e.g. `/los-angeles-ca/`.
    pub fn path(&self) -> String {
        format!("/{}/", self.slug())
    }

    /// True when either half of the slug comes out empty, which would leave the page
    /// at a path like `/-ny/`.
    pub fn has_degenerate_slug(&self) -> bool {
        slugify(self.name).is_empty() || slugify(self.state).is_empty()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_city_paths() {
        let city = City::new("St. Petersburg", "FL");
        assert_eq!(city.slug(), "st-petersburg-fl");
        assert_eq!(city.path(), "/st-petersburg-fl/");
        assert_eq!(city.to_string(), "St. Petersburg, FL");
    }

    #[test]
    fn flags_degenerate_slugs() {
        assert!(City::new("???", "NY").has_degenerate_slug());
        assert!(City::new("Troy", "").has_degenerate_slug());
        assert!(!City::new("Troy", "NY").has_degenerate_slug());
    }
}
