use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use content::{City, SiteConfig};
use render::{
    city_page::CityPage,
    cost_page::CostPage,
    home_page::HomePage,
    howto_page::HowToPage,
    sitemap::{robots_txt, sitemap_xml},
    NavKey, Render,
};

use crate::{error::BuildError, validate::validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Cost,
    HowTo,
    City,
}

/// A rendered document, held in memory until it is written and validated.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub kind: PageKind,
    pub url_path: String,
    /// Relative to the output directory.
    pub file: PathBuf,
    pub html: String,
}

impl RenderedPage {
    fn new(kind: PageKind, url_path: String, html: String) -> Self {
        let mut file = PathBuf::new();
        for segment in url_path.split('/').filter(|s| !s.is_empty()) {
            file.push(segment);
        }
        file.push("index.html");
        RenderedPage {
            kind,
            url_path,
            file,
            html,
        }
    }
}

/// Single pass, single thread. Any failure aborts the run and leaves whatever was
/// already written in place.
pub struct Builder<'a> {
    config: &'a SiteConfig,
    roster: &'a [City],
}

impl<'a> Builder<'a> {
    pub fn new(config: &'a SiteConfig, roster: &'a [City]) -> Self {
        Builder { config, roster }
    }

    /// Static pages first, then every city in roster order.
    pub fn urls(&self) -> Vec<String> {
        NavKey::ALL
            .iter()
            .map(|key| key.path().to_string())
            .chain(self.roster.iter().map(City::path))
            .collect()
    }

    pub fn render_all(&self) -> Vec<RenderedPage> {
        let config = self.config;
        let mut pages = vec![
            RenderedPage::new(
                PageKind::Home,
                NavKey::Home.path().into(),
                HomePage::new(self.roster).render(config),
            ),
            RenderedPage::new(
                PageKind::Cost,
                NavKey::Cost.path().into(),
                CostPage.render(config),
            ),
            RenderedPage::new(
                PageKind::HowTo,
                NavKey::HowTo.path().into(),
                HowToPage.render(config),
            ),
        ];
        for city in self.roster {
            log::debug!("rendering {}", city);
            pages.push(RenderedPage::new(
                PageKind::City,
                city.path(),
                CityPage::new(city).render(config),
            ));
        }
        pages
    }

    /// Rejects rosters whose pages would land on an unusable or shared path. Runs before
    /// anything on disk is touched.
    pub fn check_roster(&self) -> Result<(), BuildError> {
        let mut seen: HashMap<String, &City> = HashMap::new();
        for city in self.roster {
            if city.has_degenerate_slug() {
                return Err(BuildError::EmptySlug {
                    city: city.name.to_string(),
                    state: city.state.to_string(),
                });
            }
            let slug = city.slug();
            if ["cost", "how-to"].contains(&slug.as_str()) {
                return Err(BuildError::SlugCollision {
                    slug,
                    first: format!("the {} page", city.slug()),
                    second: city.to_string(),
                });
            }
            if let Some(first) = seen.insert(slug.clone(), city) {
                return Err(BuildError::SlugCollision {
                    slug,
                    first: first.to_string(),
                    second: city.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Rebuilds the whole site into `config.output_dir` and returns every written file.
    pub fn build(&self) -> Result<Vec<PathBuf>, BuildError> {
        self.check_roster()?;
        let out = self.config.output_dir.as_path();
        reset_output_dir(out)?;

        let mut written = vec![copy_site_image(self.config, out)?];

        let pages = self.render_all();
        log::info!("writing {} pages into {:?}", pages.len(), out);
        for page in &pages {
            written.push(write_text(&out.join(&page.file), &page.html)?);
        }
        written.push(write_text(&out.join("robots.txt"), &robots_txt())?);
        written.push(write_text(&out.join("sitemap.xml"), &sitemap_xml(&self.urls()))?);

        if self.config.validate {
            let violations = validate(&pages);
            if !violations.is_empty() {
                for v in &violations {
                    log::error!("{}", v);
                }
                return Err(BuildError::Validation(violations));
            }
            log::info!("validated {} pages", pages.len());
        }
        Ok(written)
    }
}

pub fn write_text(path: &Path, content: &str) -> Result<PathBuf, BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(BuildError::io(parent))?;
    }
    fs::write(path, content).map_err(BuildError::io(path))?;
    log::debug!("wrote {:?}", path);
    Ok(path.to_owned())
}

fn reset_output_dir(out: &Path) -> Result<(), BuildError> {
    if out.exists() {
        log::info!("clearing {:?}", out);
        fs::remove_dir_all(out).map_err(BuildError::io(out))?;
    }
    fs::create_dir_all(out).map_err(BuildError::io(out))
}

fn copy_site_image(config: &SiteConfig, out: &Path) -> Result<PathBuf, BuildError> {
    let src = config.asset_dir.join(&config.image_filename);
    if !src.is_file() {
        return Err(BuildError::MissingAsset { path: src });
    }
    let dest = out.join(&config.image_filename);
    fs::copy(&src, &dest).map_err(BuildError::io(&dest))?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use content::ROSTER;
    use render::{DESCRIPTION_MAX, TITLE_MAX};
    use tempfile::TempDir;

    use super::*;
    use crate::validate::PageFacts;

    fn test_config(dir: &TempDir) -> SiteConfig {
        let assets = dir.path().join("static");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("picture.png"), b"\x89PNG fake").unwrap();
        SiteConfig {
            output_dir: dir.path().join("public"),
            asset_dir: assets,
            ..SiteConfig::default()
        }
    }

    fn read_tree(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
        let mut files = BTreeMap::new();
        let mut dirs = vec![root.to_owned()];
        while let Some(dir) = dirs.pop() {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    dirs.push(path);
                } else {
                    let rel = path.strip_prefix(root).unwrap().to_owned();
                    files.insert(rel, fs::read(&path).unwrap());
                }
            }
        }
        files
    }

    #[test]
    fn builds_a_single_city_site() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let roster = [City::new("Troy", "NY")];
        let written = Builder::new(&config, &roster).build().unwrap();
        assert_eq!(written.len(), 7);

        let tree = read_tree(&config.output_dir);
        let keys: Vec<_> = tree.keys().map(|p| p.to_string_lossy().to_string()).collect();
        let html: Vec<_> = keys.iter().filter(|k| k.ends_with(".html")).collect();
        assert_eq!(html.len(), 4);
        for expected in [
            "index.html",
            "cost/index.html",
            "how-to/index.html",
            "troy-ny/index.html",
            "robots.txt",
            "sitemap.xml",
            "picture.png",
        ] {
            assert!(tree.contains_key(Path::new(expected)), "missing {}", expected);
        }
        assert_eq!(tree.len(), 7);

        let sitemap = String::from_utf8(tree[Path::new("sitemap.xml")].clone()).unwrap();
        let locs: Vec<_> = sitemap
            .lines()
            .filter_map(|l| l.trim().strip_prefix("<url><loc>"))
            .filter_map(|l| l.strip_suffix("</loc></url>"))
            .collect();
        assert_eq!(locs, vec!["/", "/cost/", "/how-to/", "/troy-ny/"]);
        assert_eq!(
            tree[Path::new("robots.txt")],
            b"User-agent: *\nAllow: /\nSitemap: /sitemap.xml\n".to_vec()
        );
    }

    #[test]
    fn rebuilding_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let roster = [City::new("Troy", "NY"), City::new("St. Paul", "MN")];
        let builder = Builder::new(&config, &roster);
        builder.build().unwrap();
        let first = read_tree(&config.output_dir);
        builder.build().unwrap();
        assert_eq!(first, read_tree(&config.output_dir));
    }

    #[test]
    fn clears_stale_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        fs::create_dir_all(config.output_dir.join("old-city-tx")).unwrap();
        fs::write(config.output_dir.join("old-city-tx/index.html"), "stale").unwrap();
        Builder::new(&config, &[]).build().unwrap();
        assert!(!config.output_dir.join("old-city-tx").exists());
    }

    #[test]
    fn missing_image_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            output_dir: dir.path().join("public"),
            asset_dir: dir.path().join("nowhere"),
            ..SiteConfig::default()
        };
        let err = Builder::new(&config, &[City::new("Troy", "NY")])
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::MissingAsset { .. }));
        assert!(read_tree(&config.output_dir).is_empty());
    }

    #[test]
    fn rejects_colliding_slugs_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let roster = [City::new("St. Paul", "MN"), City::new("St Paul", "MN")];
        match Builder::new(&config, &roster).build() {
            Err(BuildError::SlugCollision { slug, .. }) => assert_eq!(slug, "st-paul-mn"),
            other => panic!("expected a collision, got {:?}", other),
        }
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn rejects_empty_and_reserved_slugs() {
        let config = SiteConfig::default();
        let empty = [City::new("!!!", "NY")];
        assert!(matches!(
            Builder::new(&config, &empty).check_roster(),
            Err(BuildError::EmptySlug { .. })
        ));
        let reserved = [City::new("How", "To")];
        assert!(matches!(
            Builder::new(&config, &reserved).check_roster(),
            Err(BuildError::SlugCollision { .. })
        ));
    }

    #[test]
    fn full_roster_passes_validation() {
        let config = SiteConfig::default();
        let builder = Builder::new(&config, ROSTER);
        builder.check_roster().unwrap();
        let pages = builder.render_all();
        assert_eq!(pages.len(), ROSTER.len() + 3);
        let violations = validate(&pages);
        assert!(violations.is_empty(), "{:?}", violations);
    }

    #[test]
    fn every_page_keeps_title_and_h1_in_sync() {
        let config = SiteConfig::default();
        let pages = Builder::new(&config, ROSTER).render_all();
        let home = PageFacts::extract(&pages[0].html);
        for page in &pages {
            let facts = PageFacts::extract(&page.html);
            assert_eq!(facts.h1s.len(), 1, "{}", page.url_path);
            assert_eq!(facts.title.as_ref(), facts.h1s.first(), "{}", page.url_path);
            assert!(facts.title.unwrap().chars().count() <= TITLE_MAX);
            assert!(facts.description.unwrap().chars().count() <= DESCRIPTION_MAX);
            if page.kind == PageKind::City {
                assert_eq!(facts.h2s, home.h2s, "{}", page.url_path);
            }
        }
    }

    #[test]
    fn reports_the_path_that_could_not_be_written() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("troy-ny");
        fs::write(&blocker, "not a directory").unwrap();
        match write_text(&blocker.join("index.html"), "<html></html>") {
            Err(BuildError::Io { path, .. }) => assert_eq!(path, blocker),
            other => panic!("expected an io error, got {:?}", other),
        }
    }

    #[test]
    fn maps_urls_to_files() {
        let page = RenderedPage::new(PageKind::City, "/troy-ny/".into(), String::new());
        assert_eq!(page.file, PathBuf::from("troy-ny").join("index.html"));
        let home = RenderedPage::new(PageKind::Home, "/".into(), String::new());
        assert_eq!(home.file, PathBuf::from("index.html"));
    }
}
