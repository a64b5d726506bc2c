use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use themekit::application::assets::tag;
use themekit::application::{AssetCompressor, AssetContainer, AssetQueue, UrlResolver};
use themekit::config::Config;
use themekit::domain::value_objects::AssetGroup;
use themekit::infrastructure::LocalFs;

/// Asset manifest: `[[script]]` and `[[style]]` tables in registration order
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub script: Vec<ManifestEntry>,
    #[serde(default)]
    pub style: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Manifest {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Register every entry on a fresh queue
    pub fn to_queue(&self, urls: UrlResolver, force: bool) -> AssetQueue {
        let mut queue = AssetQueue::new(AssetContainer::new("manifest", None, urls), force);
        for entry in &self.script {
            let (deps, attrs) = entry.borrowed();
            queue.script(&entry.name, &entry.source, &deps, &attrs);
        }
        for entry in &self.style {
            let (deps, attrs) = entry.borrowed();
            queue.style(&entry.name, &entry.source, &deps, &attrs);
        }
        queue
    }
}

impl ManifestEntry {
    fn borrowed(&self) -> (Vec<&str>, Vec<(&str, &str)>) {
        let deps = self.dependencies.iter().map(String::as_str).collect();
        let attrs = self
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        (deps, attrs)
    }
}

pub fn cmd_assets(
    config: &Config,
    manifest: &Path,
    compress: bool,
    force: bool,
    json: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(manifest)
        .with_context(|| format!("failed to read {}", manifest.display()))?;
    let parsed = Manifest::parse(&content)
        .with_context(|| format!("invalid manifest {}", manifest.display()))?;
    let queue = parsed.to_queue(UrlResolver::from_config(config), force);

    if compress {
        let compressor = AssetCompressor::from_config(config);
        let fs = LocalFs::new();
        let mut urls = BTreeMap::new();
        for group in AssetGroup::ALL {
            let artifact = queue.compress_group(&fs, &compressor, group, force)?;
            if !artifact.is_empty() {
                urls.insert(group, compressor.urls().to(&artifact.public_path));
            }
        }
        if json {
            let urls: BTreeMap<String, &String> =
                urls.iter().map(|(group, url)| (group.to_string(), url)).collect();
            println!("{}", serde_json::to_string_pretty(&urls)?);
        } else {
            for (group, url) in &urls {
                print!("{}", tag(*group, url, &[]));
            }
        }
        return Ok(());
    }

    let mut order = BTreeMap::new();
    for group in AssetGroup::ALL {
        let names: Vec<String> = queue
            .arranged(group)?
            .iter()
            .map(|asset| asset.name().to_string())
            .collect();
        order.insert(group.to_string(), names);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&order)?);
    } else {
        for (group, names) in &order {
            println!("{group}: {}", names.join(", "));
        }
    }
    Ok(())
}
