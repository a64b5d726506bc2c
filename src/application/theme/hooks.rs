//! Lifecycle hooks
//!
//! Listeners are registered per [`ThemeEvent`], either globally or for one
//! theme. When an event fires for the selected theme:
//!
//! - `Before` runs the global listeners, then the theme's listeners;
//! - every other event runs the theme's listeners if it has any for that
//!   event, otherwise the global ones.

use std::collections::HashMap;
use std::fmt;

use crate::error::ThemeResult;

use super::context::Theme;

/// Points in the render cycle where hooks run
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ThemeEvent {
    /// A theme was selected
    Before,
    /// Runs after `Before`, once the theme is fully set up
    AfterThemeSelect,
    /// Content is about to be composed; register global assets here
    Asset,
    /// Content is about to be composed
    BeforeRenderTheme,
    /// Content is about to be composed for the named layout
    BeforeRenderLayout(String),
    /// The layout is about to be rendered
    After,
}

impl fmt::Display for ThemeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeEvent::Before => write!(f, "before"),
            ThemeEvent::AfterThemeSelect => write!(f, "afterThemeSelect"),
            ThemeEvent::Asset => write!(f, "asset"),
            ThemeEvent::BeforeRenderTheme => write!(f, "beforeRenderTheme"),
            ThemeEvent::BeforeRenderLayout(layout) => write!(f, "beforeRenderLayout.{layout}"),
            ThemeEvent::After => write!(f, "after"),
        }
    }
}

/// A registered listener
pub type Hook<V, F> = Box<dyn FnMut(&mut Theme<V, F>) -> ThemeResult<()>>;

type Listeners<V, F> = HashMap<ThemeEvent, Vec<Hook<V, F>>>;

/// Ordered listener lists, global and per theme
pub struct HookRegistry<V, F> {
    global: Listeners<V, F>,
    themed: HashMap<String, Listeners<V, F>>,
}

impl<V, F> Default for HookRegistry<V, F> {
    fn default() -> Self {
        Self {
            global: HashMap::new(),
            themed: HashMap::new(),
        }
    }
}

/// Listeners checked out of the registry for one dispatch
pub(crate) struct Dispatch<V, F> {
    event: ThemeEvent,
    theme: Option<String>,
    global: Vec<Hook<V, F>>,
    themed: Vec<Hook<V, F>>,
}

impl<V, F> Dispatch<V, F> {
    /// Listeners to run, in order
    pub(crate) fn active(&mut self) -> Vec<&mut Hook<V, F>> {
        if self.event == ThemeEvent::Before {
            return self.global.iter_mut().chain(self.themed.iter_mut()).collect();
        }
        if self.themed.is_empty() {
            self.global.iter_mut().collect()
        } else {
            self.themed.iter_mut().collect()
        }
    }
}

impl<V, F> HookRegistry<V, F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen to an event for every theme
    pub fn on(&mut self, event: ThemeEvent, hook: Hook<V, F>) {
        self.global.entry(event).or_default().push(hook);
    }

    /// Listen to an event while `theme` is selected
    pub fn on_theme(&mut self, theme: &str, event: ThemeEvent, hook: Hook<V, F>) {
        self.themed
            .entry(theme.to_string())
            .or_default()
            .entry(event)
            .or_default()
            .push(hook);
    }

    /// Number of listeners that would run for `event`
    pub fn count(&self, event: &ThemeEvent, theme: Option<&str>) -> usize {
        let global = self.global.get(event).map_or(0, Vec::len);
        let themed = theme
            .and_then(|t| self.themed.get(t))
            .and_then(|l| l.get(event))
            .map_or(0, Vec::len);
        match (event, themed) {
            (ThemeEvent::Before, _) => global + themed,
            (_, 0) => global,
            _ => themed,
        }
    }

    /// Take the listeners of an event out for dispatch
    pub(crate) fn checkout(&mut self, event: &ThemeEvent, theme: Option<&str>) -> Dispatch<V, F> {
        let global = self.global.remove(event).unwrap_or_default();
        let themed = theme
            .and_then(|t| self.themed.get_mut(t))
            .and_then(|l| l.remove(event))
            .unwrap_or_default();
        Dispatch {
            event: event.clone(),
            theme: theme.map(str::to_string),
            global,
            themed,
        }
    }

    /// Put dispatched listeners back ahead of any registered meanwhile
    pub(crate) fn restore(&mut self, dispatch: Dispatch<V, F>) {
        let Dispatch {
            event,
            theme,
            global,
            themed,
        } = dispatch;

        if !global.is_empty() {
            let slot = self.global.entry(event.clone()).or_default();
            let added = std::mem::replace(slot, global);
            slot.extend(added);
        }
        if let Some(theme) = theme {
            if !themed.is_empty() {
                let slot = self.themed.entry(theme).or_default().entry(event).or_default();
                let added = std::mem::replace(slot, themed);
                slot.extend(added);
            }
        }
    }
}
