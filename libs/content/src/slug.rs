use regex::Regex;

lazy_static::lazy_static! {
    static ref NON_SLUG_RGX: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Lowercased, hyphen-delimited path segment. Any input produces a slug; text with no
/// ASCII letters or digits produces an empty one.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase().replace('&', " and ");
    NON_SLUG_RGX
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

pub fn city_state_slug(city: &str, state: &str) -> String {
    format!("{}-{}", slugify(city), slugify(state))
}
