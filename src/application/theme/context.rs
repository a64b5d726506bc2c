//! Theme render context
//!
//! One `Theme` serves one render cycle:
//!
//! ```text
//! Unselected --theme()--> ThemeSelected --of()/scope()/watch()--> ContentComposed --render()--> Rendered
//! ```
//!
//! Selecting a theme again restarts the cycle. The context owns its asset
//! manager, regions, hooks and widgets; nothing is process-wide.

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::application::assets::{AssetManager, ThemeAssetBase, UrlResolver, DEFAULT_CONTAINER};
use crate::application::compressor::AssetCompressor;
use crate::config::{Config, THEME_CONFIG_FILE};
use crate::domain::entities::{Breadcrumb, RegionStore};
use crate::domain::ports::{with_shared, FileSystem, ViewData, ViewError, ViewRenderer};
use crate::domain::services::{render_blade, render_twig};
use crate::domain::value_objects::ConfigWarning;
use crate::error::{ThemeError, ThemeResult};
use crate::infrastructure::fs::LocalFs;

use super::hooks::{Hook, HookRegistry, ThemeEvent};
use super::widget::{Widget, WidgetContext, WidgetRegistry};

/// Namespace used by [`Theme::load`]
const CUSTOM_NAMESPACE: &str = "custom";

/// Where the context is in its render cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeState {
    Unselected,
    ThemeSelected,
    ContentComposed,
    Rendered,
}

/// How the first argument of [`Theme::of`] is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderKind {
    /// A view name resolved by the view renderer
    #[default]
    View,
    /// A blade-style template string
    Blade,
    /// A twig-style template string
    Twig,
}

enum Binding {
    Pending(Box<dyn FnOnce() -> Value>),
    Ready(Value),
}

pub struct Theme<V, F = LocalFs> {
    config: Config,
    active: Config,
    warnings: Vec<ConfigWarning>,
    fs: F,
    views: V,
    assets: AssetManager,
    regions: RegionStore,
    hooks: HookRegistry<V, F>,
    widgets: WidgetRegistry,
    breadcrumb: Breadcrumb,
    bindings: HashMap<String, Binding>,
    theme: Option<String>,
    layout: Option<String>,
    state: ThemeState,
    arguments: ViewData,
    content_view: Option<String>,
}

impl<V: ViewRenderer> Theme<V, LocalFs> {
    /// Context reading themes from disk
    pub fn local(config: Config, views: V) -> Self {
        Self::new(config, views, LocalFs::new())
    }
}

impl<V, F> Theme<V, F>
where
    V: ViewRenderer,
    F: FileSystem,
{
    pub fn new(config: Config, views: V, fs: F) -> Self {
        let assets = AssetManager::from_config(&config);
        let breadcrumb = Breadcrumb::new(UrlResolver::new(None, config.app.url.as_deref()).base());
        Self {
            active: config.clone(),
            config,
            warnings: Vec::new(),
            fs,
            views,
            assets,
            regions: RegionStore::new(),
            hooks: HookRegistry::new(),
            widgets: WidgetRegistry::new(),
            breadcrumb,
            bindings: HashMap::new(),
            theme: None,
            layout: None,
            state: ThemeState::Unselected,
            arguments: ViewData::new(),
            content_view: None,
        }
    }

    // === Selection ===

    /// Select a theme.
    ///
    /// Loads the theme's `theme.toml` overlay, registers the `theme.{name}`
    /// view namespace (with the inherited theme as fallback), points assets
    /// at the theme, then fires `Before` and `AfterThemeSelect`.
    pub fn theme(&mut self, name: &str) -> ThemeResult<&mut Self> {
        if !self.exists(name) {
            return Err(ThemeError::UnknownTheme {
                name: name.to_string(),
            });
        }

        let overlay = self.theme_dir(name).join(THEME_CONFIG_FILE);
        let (active, warnings) = self.config.with_theme_overlay(&self.fs, &overlay)?;
        for warning in &warnings {
            warn!("{warning}");
        }
        self.active = active;
        self.warnings = warnings;
        self.theme = Some(name.to_string());

        let mut hints = vec![self.theme_dir(name)];
        if let Some(inherit) = self.active.theme.inherit.clone() {
            let inherit_dir = self.theme_dir(&inherit);
            if self.fs.is_dir(&inherit_dir) {
                hints.push(inherit_dir);
            } else {
                debug!(theme = name, inherit = %inherit, "inherited theme not found");
            }
        }
        self.views.add_namespace(&namespace_of(name), hints);

        self.assets.set_urls(UrlResolver::from_config(&self.active));
        self.assets.set_force_rebuild(self.active.assets.force_compress);
        self.assets.set_theme_base(ThemeAssetBase {
            theme_dir: self.config.theme.dir.clone(),
            theme: name.to_string(),
            asset_dir: self.active.containers.asset.clone(),
        });

        self.state = ThemeState::ThemeSelected;
        debug!(theme = name, layout = %self.layout_name(), "theme selected");

        self.fire(ThemeEvent::Before)?;
        self.fire(ThemeEvent::AfterThemeSelect)?;
        Ok(self)
    }

    /// Select the layout; checked when rendering
    pub fn layout(&mut self, name: &str) -> &mut Self {
        self.layout = Some(name.to_string());
        self
    }

    /// Whether `{public}/{theme_dir}/{name}` is a directory
    pub fn exists(&self, name: &str) -> bool {
        !name.is_empty() && self.fs.is_dir(&self.theme_dir(name))
    }

    /// Public-relative directory of a theme
    pub fn path_for(&self, theme: &str) -> String {
        self.config.theme_path(theme)
    }

    /// Public-relative directory of the selected theme
    pub fn path(&self) -> ThemeResult<String> {
        Ok(self.path_for(self.require_theme()?))
    }

    /// `theme.{name}` or `theme.{name}::{path}`
    pub fn theme_namespace(&self, path: &str) -> ThemeResult<String> {
        let namespace = namespace_of(self.require_theme()?);
        if path.is_empty() {
            Ok(namespace)
        } else {
            Ok(format!("{namespace}::{path}"))
        }
    }

    pub fn theme_name(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Selected layout, else the configured default
    pub fn layout_name(&self) -> &str {
        self.layout
            .as_deref()
            .unwrap_or(self.active.theme.layout.as_str())
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    /// Configuration in effect, including the theme overlay
    pub fn config(&self) -> &Config {
        &self.active
    }

    /// Unknown keys found in the selected theme's overlay
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    // === Content ===

    /// Compose the page content.
    ///
    /// Fires `Asset`, `BeforeRenderTheme` and `BeforeRenderLayout(layout)`,
    /// then renders `view` according to `kind` into the `content` region.
    pub fn of(&mut self, view: &str, data: &ViewData, kind: RenderKind) -> ThemeResult<&mut Self> {
        self.require_theme()?;

        self.fire(ThemeEvent::Asset)?;
        self.fire(ThemeEvent::BeforeRenderTheme)?;
        self.fire(ThemeEvent::BeforeRenderLayout(self.layout_name().to_string()))?;

        self.arguments = data.clone();
        let content = self.compose(view, data, kind)?;
        self.content_view = Some(view.to_string());
        self.regions.set_content(content);
        self.state = ThemeState::ContentComposed;
        debug!(view, ?kind, "content composed");
        Ok(self)
    }

    /// [`Theme::of`] with the view prefixed by the layout name
    pub fn of_with_layout(
        &mut self,
        view: &str,
        data: &ViewData,
        kind: RenderKind,
    ) -> ThemeResult<&mut Self> {
        let view = self.with_layout_prefix(view);
        self.of(&view, data, kind)
    }

    /// Compose a view from the theme's own view directory
    pub fn scope(&mut self, view: &str, data: &ViewData, kind: RenderKind) -> ThemeResult<&mut Self> {
        let path = self.scoped_view(view)?;
        self.of(&path, data, kind)
    }

    pub fn scope_with_layout(
        &mut self,
        view: &str,
        data: &ViewData,
        kind: RenderKind,
    ) -> ThemeResult<&mut Self> {
        let view = self.with_layout_prefix(view);
        self.scope(&view, data, kind)
    }

    /// [`Theme::scope`] when the theme has the view, else [`Theme::of`]
    pub fn watch(&mut self, view: &str, data: &ViewData, kind: RenderKind) -> ThemeResult<&mut Self> {
        let scoped = self.scoped_view(view)?;
        if self.views.exists(&scoped) {
            self.of(&scoped, data, kind)
        } else {
            debug!(view, "not in theme, using application view");
            self.of(view, data, kind)
        }
    }

    pub fn watch_with_layout(
        &mut self,
        view: &str,
        data: &ViewData,
        kind: RenderKind,
    ) -> ThemeResult<&mut Self> {
        let view = self.with_layout_prefix(view);
        self.watch(&view, data, kind)
    }

    /// Compose a view from an explicit directory, e.g. `pages/legal/terms`
    pub fn load(&mut self, path: &str, data: &ViewData) -> ThemeResult<&mut Self> {
        let path = path.trim_start_matches('/').replace('.', "/");
        let (dir, file) = match path.rsplit_once('/') {
            Some((dir, file)) => (dir, file),
            None => ("", path.as_str()),
        };
        self.views.add_namespace(CUSTOM_NAMESPACE, vec![PathBuf::from(dir)]);
        let view = format!("{CUSTOM_NAMESPACE}::{file}");
        self.of(&view, data, RenderKind::View)
    }

    /// Compose content from a template string
    pub fn string(&mut self, template: &str, data: &ViewData, kind: RenderKind) -> ThemeResult<&mut Self> {
        self.of(template, data, kind)
    }

    /// Data passed to the last composed content
    pub fn content_arguments(&self) -> &ViewData {
        &self.arguments
    }

    pub fn content_argument(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }

    pub fn has_content_argument(&self, key: &str) -> bool {
        self.arguments.contains_key(key)
    }

    /// Name of the last composed view, if it resolves
    pub fn location(&self) -> Option<&str> {
        self.content_view
            .as_deref()
            .filter(|view| self.views.exists(view))
    }

    /// Compose `view` the way [`Theme::watch`] does and report where it
    /// was found
    pub fn which(&mut self, view: &str) -> ThemeResult<Option<String>> {
        self.watch(view, &ViewData::new(), RenderKind::View)?;
        Ok(self.location().map(str::to_string))
    }

    // === Render ===

    /// Render the layout with every region.
    ///
    /// Fires `After`, runs served asset bundles, then renders
    /// `theme.{name}::{layout_dir}.{layout}`.
    pub fn render(&mut self) -> ThemeResult<String> {
        if self.state != ThemeState::ContentComposed {
            return Err(ThemeError::NothingToRender);
        }

        self.fire(ThemeEvent::After)?;
        let served = self.assets.flush();
        if served > 0 {
            debug!(bundles = served, "flushed cooked assets");
        }

        let layout = self.layout_name().to_string();
        let path = self.theme_namespace(&format!("{}.{}", self.active.containers.layout, layout))?;
        if !self.views.exists(&path) {
            return Err(ThemeError::UnknownLayout { name: layout });
        }

        let data = self.layout_data()?;
        let output = self.views.render(&path, &data)?;
        self.state = ThemeState::Rendered;
        info!(theme = ?self.theme, layout = %layout, bytes = output.len(), "rendered");
        Ok(output)
    }

    /// Regions as top-level keys; `theme`, `layout`, `assets`, `queues`,
    /// `breadcrumb` and `regions` are reserved and win over a region of the
    /// same name, which stays reachable through `regions`
    fn layout_data(&self) -> ThemeResult<ViewData> {
        let mut data: ViewData = self
            .regions
            .iter()
            .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
            .collect();
        data.insert("theme".to_string(), Value::from(self.theme.clone()));
        data.insert("layout".to_string(), Value::from(self.layout_name()));

        let mut containers = ViewData::new();
        for container in self.assets.containers() {
            containers.insert(
                container.name().to_string(),
                group_data(container.scripts()?, container.styles()?),
            );
        }
        containers
            .entry(DEFAULT_CONTAINER.to_string())
            .or_insert_with(|| group_data(String::new(), String::new()));
        data.insert("assets".to_string(), Value::Object(containers));

        let compressor = AssetCompressor::from_config(&self.active);
        let mut queues = ViewData::new();
        for queue in self.assets.queues() {
            queues.insert(
                queue.name().to_string(),
                group_data(
                    queue.scripts(&self.fs, &compressor)?,
                    queue.styles(&self.fs, &compressor)?,
                ),
            );
        }
        data.insert("queues".to_string(), Value::Object(queues));

        if !self.breadcrumb.crumbs().is_empty() {
            let trail = self.breadcrumb.render().map_err(|e| ThemeError::Template {
                name: "breadcrumb".to_string(),
                message: e.message,
            })?;
            data.insert("breadcrumb".to_string(), Value::String(trail));
        }

        data.insert("regions".to_string(), Value::Object(self.regions.to_data()));
        Ok(data)
    }

    // === Partials and widgets ===

    /// Render `theme.{name}::{partial_dir}.{view}`; the output is also stored
    /// in the region named after the view
    pub fn partial(&mut self, view: &str, data: &ViewData) -> ThemeResult<String> {
        let dir = self.theme_namespace(&self.active.containers.partial)?;
        self.load_partial(view, &dir, data)
    }

    pub fn partial_with_layout(&mut self, view: &str, data: &ViewData) -> ThemeResult<String> {
        let view = self.with_layout_prefix(view);
        self.partial(&view, data)
    }

    /// [`Theme::partial`], falling back to the application partial directory
    pub fn watch_partial(&mut self, view: &str, data: &ViewData) -> ThemeResult<String> {
        match self.partial(view, data) {
            Err(ThemeError::UnknownPartial { .. }) => {
                let dir = self.active.containers.partial.clone();
                self.load_partial(view, &dir, data)
            }
            other => other,
        }
    }

    fn load_partial(&mut self, view: &str, dir: &str, data: &ViewData) -> ThemeResult<String> {
        let path = format!("{dir}.{view}");
        if !self.views.exists(&path) {
            return Err(ThemeError::UnknownPartial {
                view: view.to_string(),
            });
        }
        let output = self.views.render(&path, data)?;
        self.regions.set(view, output.clone());
        Ok(output)
    }

    /// Register a widget factory under `key`
    pub fn register_widget<W, C>(&mut self, key: &str, factory: C) -> &mut Self
    where
        W: Widget + 'static,
        C: Fn() -> W + 'static,
    {
        self.widgets.register(key, factory);
        self
    }

    pub fn widgets(&self) -> &WidgetRegistry {
        &self.widgets
    }

    /// Run a widget and render its template.
    ///
    /// The instance for `key` is built on first use and kept. A disabled
    /// widget is not run and renders to the empty string; so does a widget
    /// whose template is missing.
    pub fn widget(&mut self, key: &str, attributes: &ViewData) -> ThemeResult<String> {
        let dir = self.theme_namespace(&self.active.containers.widget)?;
        let slot = self.widgets.instance(key)?;
        if !slot.widget.enabled() {
            debug!(widget = key, "widget disabled");
            return Ok(String::new());
        }
        let mut cx = WidgetContext {
            assets: &mut self.assets,
            regions: &mut self.regions,
        };
        let data = slot.prepare(attributes, &mut cx);
        let template = format!("{dir}.{}", slot.widget.template());

        if !self.views.exists(&template) {
            debug!(widget = key, template = %template, "widget template not found");
            return Ok(String::new());
        }
        Ok(self.views.render(&template, &data)?)
    }

    // === Shared data and bindings ===

    /// Share a value with every view
    pub fn share(&mut self, key: &str, value: Value) -> &mut Self {
        self.views.share(key, value);
        self
    }

    /// Register a lazily evaluated value
    pub fn bind<P>(&mut self, name: &str, producer: P) -> &mut Self
    where
        P: FnOnce() -> Value + 'static,
    {
        self.bindings.insert(name.to_string(), Binding::Pending(Box::new(producer)));
        self
    }

    pub fn binded(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Value of a binding; the producer runs on first access only
    pub fn bound(&mut self, name: &str) -> Option<&Value> {
        let binding = self.bindings.get_mut(name)?;
        if matches!(binding, Binding::Pending(_)) {
            if let Binding::Pending(producer) = std::mem::replace(binding, Binding::Ready(Value::Null)) {
                *binding = Binding::Ready(producer());
            }
        }
        match binding {
            Binding::Ready(value) => Some(&*value),
            Binding::Pending(_) => None,
        }
    }

    // === Regions ===

    pub fn set(&mut self, region: &str, value: impl Into<String>) -> &mut Self {
        self.regions.set(region, value);
        self
    }

    pub fn append(&mut self, region: &str, value: impl Into<String>) -> &mut Self {
        self.regions.append(region, value);
        self
    }

    pub fn prepend(&mut self, region: &str, value: impl Into<String>) -> &mut Self {
        self.regions.prepend(region, value);
        self
    }

    pub fn has(&self, region: &str) -> bool {
        self.regions.has(region)
    }

    pub fn get<'a>(&'a self, region: &str, default: &'a str) -> &'a str {
        self.regions.get(region, default)
    }

    pub fn place<'a>(&'a self, region: &str, default: &'a str) -> &'a str {
        self.regions.place(region, default)
    }

    pub fn content(&self) -> &str {
        self.regions.content()
    }

    pub fn regions(&self) -> &RegionStore {
        &self.regions
    }

    // === Collaborators ===

    pub fn assets(&self) -> &AssetManager {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetManager {
        &mut self.assets
    }

    pub fn breadcrumb(&self) -> &Breadcrumb {
        &self.breadcrumb
    }

    pub fn breadcrumb_mut(&mut self) -> &mut Breadcrumb {
        &mut self.breadcrumb
    }

    pub fn views(&self) -> &V {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut V {
        &mut self.views
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    // === Hooks ===

    /// Listen to an event for every theme
    pub fn on<H>(&mut self, event: ThemeEvent, hook: H) -> &mut Self
    where
        H: FnMut(&mut Theme<V, F>) -> ThemeResult<()> + 'static,
    {
        let hook: Hook<V, F> = Box::new(hook);
        self.hooks.on(event, hook);
        self
    }

    /// Listen to an event while `theme` is selected
    pub fn on_theme<H>(&mut self, theme: &str, event: ThemeEvent, hook: H) -> &mut Self
    where
        H: FnMut(&mut Theme<V, F>) -> ThemeResult<()> + 'static,
    {
        let hook: Hook<V, F> = Box::new(hook);
        self.hooks.on_theme(theme, event, hook);
        self
    }

    pub fn hooks(&self) -> &HookRegistry<V, F> {
        &self.hooks
    }

    fn fire(&mut self, event: ThemeEvent) -> ThemeResult<()> {
        let mut dispatch = self.hooks.checkout(&event, self.theme.as_deref());
        let mut result = Ok(());
        for hook in dispatch.active() {
            debug!(event = %event, "running hook");
            result = hook(&mut *self);
            if result.is_err() {
                break;
            }
        }
        self.hooks.restore(dispatch);
        result
    }

    // === Helpers ===

    fn require_theme(&self) -> ThemeResult<&str> {
        self.theme.as_deref().ok_or(ThemeError::NoThemeSelected)
    }

    fn theme_dir(&self, name: &str) -> PathBuf {
        self.config.app.public_dir.join(self.path_for(name))
    }

    fn scoped_view(&self, view: &str) -> ThemeResult<String> {
        self.theme_namespace(&format!("{}.{}", self.active.containers.view, view))
    }

    fn with_layout_prefix(&self, view: &str) -> String {
        format!("{}.{}", self.layout_name(), view)
    }

    fn compose(&self, view: &str, data: &ViewData, kind: RenderKind) -> ThemeResult<String> {
        match kind {
            RenderKind::View => self.views.render(view, data).map_err(|e| match e {
                ViewError::NotFound { .. } => ThemeError::UnknownView {
                    view: view.to_string(),
                },
                other => ThemeError::View(other),
            }),
            RenderKind::Blade => render_blade(view, &with_shared(self.views.shared(), data))
                .map_err(|e| ThemeError::Template {
                    name: "inline blade template".to_string(),
                    message: e.message,
                }),
            RenderKind::Twig => render_twig(view, &with_shared(self.views.shared(), data))
                .map_err(|e| ThemeError::Template {
                    name: "inline twig template".to_string(),
                    message: e.message,
                }),
        }
    }
}

fn namespace_of(theme: &str) -> String {
    format!("theme.{theme}")
}

fn group_data(scripts: String, styles: String) -> Value {
    let mut group = ViewData::new();
    group.insert("scripts".to_string(), Value::String(scripts));
    group.insert("styles".to_string(), Value::String(styles));
    Value::Object(group)
}
