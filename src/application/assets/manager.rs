//! Asset manager
//!
//! Owns every named container and queue of one render context, plus the
//! deferred bundles registered with [`AssetManager::cook`].

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::config::Config;

use super::container::{AssetContainer, ThemeAssetBase, DEFAULT_CONTAINER};
use super::queue::AssetQueue;
use super::url::UrlResolver;

/// Deferred asset registration
pub type Cook = Box<dyn FnOnce(&mut AssetManager)>;

pub struct AssetManager {
    base: Option<ThemeAssetBase>,
    urls: UrlResolver,
    force_rebuild: bool,
    containers: Vec<AssetContainer>,
    queues: Vec<AssetQueue>,
    cooks: HashMap<String, Cook>,
    served: Vec<String>,
}

impl AssetManager {
    pub fn new(urls: UrlResolver, force_rebuild: bool) -> Self {
        Self {
            base: None,
            urls,
            force_rebuild,
            containers: Vec::new(),
            queues: Vec::new(),
            cooks: HashMap::new(),
            served: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(UrlResolver::from_config(config), config.assets.force_compress)
    }

    /// Point every container, existing and future, at a theme's assets
    pub fn set_theme_base(&mut self, base: ThemeAssetBase) {
        debug!(path = %base.path(), "asset base path");
        for container in &mut self.containers {
            container.set_base(Some(base.clone()));
        }
        for queue in &mut self.queues {
            queue.set_base(Some(base.clone()));
        }
        self.base = Some(base);
    }

    pub fn theme_base(&self) -> Option<&ThemeAssetBase> {
        self.base.as_ref()
    }

    /// Replace the URL resolver of every container
    pub fn set_urls(&mut self, urls: UrlResolver) {
        for container in &mut self.containers {
            container.set_urls(urls.clone());
        }
        for queue in &mut self.queues {
            queue.set_urls(urls.clone());
        }
        self.urls = urls;
    }

    pub fn urls(&self) -> &UrlResolver {
        &self.urls
    }

    /// Set the rebuild flag of every queue, existing and future
    pub fn set_force_rebuild(&mut self, force: bool) {
        for queue in &mut self.queues {
            queue.set_force_rebuild(force);
        }
        self.force_rebuild = force;
    }

    /// Container by name, created on first use
    pub fn container(&mut self, name: &str) -> &mut AssetContainer {
        let index = match self.containers.iter().position(|c| c.name() == name) {
            Some(index) => index,
            None => {
                self.containers
                    .push(AssetContainer::new(name, self.base.clone(), self.urls.clone()));
                self.containers.len() - 1
            }
        };
        &mut self.containers[index]
    }

    pub fn default_container(&mut self) -> &mut AssetContainer {
        self.container(DEFAULT_CONTAINER)
    }

    pub fn find_container(&self, name: &str) -> Option<&AssetContainer> {
        self.containers.iter().find(|c| c.name() == name)
    }

    /// Queue by name, created on first use
    pub fn queue(&mut self, name: &str) -> &mut AssetQueue {
        let index = match self.queues.iter().position(|q| q.name() == name) {
            Some(index) => index,
            None => {
                let container = AssetContainer::new(name, self.base.clone(), self.urls.clone());
                self.queues.push(AssetQueue::new(container, self.force_rebuild));
                self.queues.len() - 1
            }
        };
        &mut self.queues[index]
    }

    pub fn find_queue(&self, name: &str) -> Option<&AssetQueue> {
        self.queues.iter().find(|q| q.name() == name)
    }

    pub fn containers(&self) -> impl Iterator<Item = &AssetContainer> {
        self.containers.iter()
    }

    pub fn queues(&self) -> impl Iterator<Item = &AssetQueue> {
        self.queues.iter()
    }

    /// Register a deferred bundle; replaces an earlier one of the same name
    pub fn cook<F>(&mut self, name: &str, callback: F) -> &mut Self
    where
        F: FnOnce(&mut AssetManager) + 'static,
    {
        self.cooks.insert(name.to_string(), Box::new(callback));
        self
    }

    /// Request a deferred bundle for the next [`AssetManager::flush`]
    pub fn serve(&mut self, name: &str) -> &mut Self {
        if !self.served.iter().any(|s| s == name) {
            self.served.push(name.to_string());
        }
        self
    }

    pub fn is_cooked(&self, name: &str) -> bool {
        self.cooks.contains_key(name)
    }

    /// Run every served bundle that has been cooked, once, then forget it.
    ///
    /// Served names without a cooked bundle stay requested. Returns the number
    /// of bundles run.
    pub fn flush(&mut self) -> usize {
        let served = std::mem::take(&mut self.served);
        let mut ran = 0;
        for name in served {
            match self.cooks.remove(&name) {
                Some(callback) => {
                    debug!(bundle = %name, "serving cooked assets");
                    callback(self);
                    ran += 1;
                }
                None => self.served.push(name),
            }
        }
        ran
    }
}

impl fmt::Debug for AssetManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cooks: Vec<_> = self.cooks.keys().collect();
        cooks.sort();
        f.debug_struct("AssetManager")
            .field("base", &self.base)
            .field("urls", &self.urls)
            .field("containers", &self.containers)
            .field("queues", &self.queues)
            .field("cooks", &cooks)
            .field("served", &self.served)
            .finish()
    }
}
