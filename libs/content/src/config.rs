use std::{fs, io, path::Path, path::PathBuf};

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {path:?}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse config file")]
    Parse(#[from] toml::de::Error),
}

/// Everything a build needs besides the content tables. Constructed once at startup and
/// handed to every renderer by reference.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub brand_name: String,
    /// H1 of the home page, and the stem of every city H1.
    pub service_title: String,
    pub cost_title: String,
    pub howto_title: String,
    pub cta_text: String,
    pub cta_href: String,
    pub cost_low: u32,
    pub cost_high: u32,
    pub output_dir: PathBuf,
    /// Where the shared image is read from before being copied into `output_dir`.
    pub asset_dir: PathBuf,
    pub image_filename: String,
    pub validate: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            brand_name: "Woodpecker Damage Repair Company".into(),
            service_title: "Woodpecker Damage Repair/Wood Siding & EIFS Services".into(),
            cost_title: "Woodpecker Damage Repair Cost".into(),
            howto_title: "How to Repair Woodpecker Damage".into(),
            cta_text: "Get Free Estimate".into(),
            cta_href: "mailto:hello@example.com?subject=Free%20Quote%20Request".into(),
            cost_low: 200,
            cost_high: 1500,
            output_dir: PathBuf::from("public"),
            asset_dir: PathBuf::from("static"),
            image_filename: "picture.png".into(),
            validate: true,
        }
    }
}

impl SiteConfig {
    /// Keys missing from `src` keep their compiled-in defaults.
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml(&src)
    }

    pub fn image_path(&self) -> String {
        format!("/{}", self.image_filename)
    }

    /// e.g. `$200–$1,500`
    pub fn cost_range(&self) -> String {
        format!("{}–{}", usd(self.cost_low), usd(self.cost_high))
    }
}

pub fn usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
