//! Widgets
//!
//! A widget is a small component with its own template. Factories are
//! registered under a key up front; [`super::Theme::widget`] builds each key
//! once per context and reuses the instance afterwards.

use std::collections::HashMap;
use std::fmt;

use crate::application::assets::AssetManager;
use crate::domain::entities::RegionStore;
use crate::domain::ports::ViewData;
use crate::error::{ThemeError, ThemeResult};

/// What a widget may touch while it runs
pub struct WidgetContext<'a> {
    pub assets: &'a mut AssetManager,
    pub regions: &'a mut RegionStore,
}

pub trait Widget {
    /// Template name under the theme's widget directory
    fn template(&self) -> &str;

    /// Disabled widgets render to the empty string
    fn enabled(&self) -> bool {
        true
    }

    /// Called on every render before [`Widget::run`]
    fn init(&mut self, _attributes: &ViewData, _cx: &mut WidgetContext<'_>) {}

    /// Data for the template; merged over the attributes
    fn run(&mut self, attributes: &ViewData, cx: &mut WidgetContext<'_>) -> ViewData;
}

type Factory = Box<dyn Fn() -> Box<dyn Widget>>;

/// A constructed widget and the attributes it has accumulated
pub(crate) struct WidgetSlot {
    pub(crate) widget: Box<dyn Widget>,
    pub(crate) attributes: ViewData,
}

impl WidgetSlot {
    /// Merge attributes, init, run; returns the template data
    pub(crate) fn prepare(&mut self, attributes: &ViewData, cx: &mut WidgetContext<'_>) -> ViewData {
        for (key, value) in attributes {
            self.attributes.insert(key.clone(), value.clone());
        }
        self.widget.init(&self.attributes, cx);
        let output = self.widget.run(&self.attributes, cx);

        let mut data = self.attributes.clone();
        data.extend(output);
        data
    }
}

/// Widget factories by key, plus the instances built so far
#[derive(Default)]
pub struct WidgetRegistry {
    factories: HashMap<String, Factory>,
    instances: HashMap<String, WidgetSlot>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory; a later registration of the same key wins
    pub fn register<W, C>(&mut self, key: &str, factory: C) -> &mut Self
    where
        W: Widget + 'static,
        C: Fn() -> W + 'static,
    {
        let factory: Factory = Box::new(move || Box::new(factory()) as Box<dyn Widget>);
        self.factories.insert(key.to_string(), factory);
        self.instances.remove(key);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    /// Number of widgets constructed so far
    pub fn instantiated(&self) -> usize {
        self.instances.len()
    }

    pub(crate) fn instance(&mut self, key: &str) -> ThemeResult<&mut WidgetSlot> {
        if !self.instances.contains_key(key) {
            let factory = self
                .factories
                .get(key)
                .ok_or_else(|| ThemeError::UnknownWidget {
                    key: key.to_string(),
                })?;
            self.instances.insert(
                key.to_string(),
                WidgetSlot {
                    widget: factory(),
                    attributes: ViewData::new(),
                },
            );
        }
        self.instances
            .get_mut(key)
            .ok_or_else(|| ThemeError::UnknownWidget {
                key: key.to_string(),
            })
    }
}

impl fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.factories.keys().collect();
        keys.sort();
        f.debug_struct("WidgetRegistry")
            .field("factories", &keys)
            .field("instantiated", &self.instances.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::assets::UrlResolver;
    use serde_json::json;

    struct Counter {
        runs: u64,
    }

    impl Widget for Counter {
        fn template(&self) -> &str {
            "counter"
        }

        fn run(&mut self, _attributes: &ViewData, cx: &mut WidgetContext<'_>) -> ViewData {
            self.runs += 1;
            cx.regions.append("log", "run;");
            let mut data = ViewData::new();
            data.insert("runs".into(), json!(self.runs));
            data
        }
    }

    fn attrs(pairs: &[(&str, serde_json::Value)]) -> ViewData {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn unknown_key() {
        let mut widgets = WidgetRegistry::new();
        assert!(matches!(
            widgets.instance("nope"),
            Err(ThemeError::UnknownWidget { key }) if key == "nope"
        ));
    }

    #[test]
    fn instances_are_memoized_and_attributes_accumulate() {
        let mut widgets = WidgetRegistry::new();
        widgets.register("counter", || Counter { runs: 0 });

        let mut assets = AssetManager::new(UrlResolver::default(), false);
        let mut regions = RegionStore::new();
        let mut cx = WidgetContext {
            assets: &mut assets,
            regions: &mut regions,
        };

        let first = widgets
            .instance("counter")
            .unwrap()
            .prepare(&attrs(&[("label", json!("a")), ("runs", json!(99))]), &mut cx);
        assert_eq!(first["runs"], json!(1));
        assert_eq!(first["label"], json!("a"));

        let second = widgets
            .instance("counter")
            .unwrap()
            .prepare(&attrs(&[("size", json!(2))]), &mut cx);
        assert_eq!(second["runs"], json!(2));
        assert_eq!(second["label"], json!("a"));
        assert_eq!(second["size"], json!(2));

        assert_eq!(widgets.instantiated(), 1);
        assert_eq!(regions.get("log", ""), "run;run;");
    }

    #[test]
    fn reregistering_drops_the_instance() {
        let mut widgets = WidgetRegistry::new();
        widgets.register("counter", || Counter { runs: 0 });
        widgets.instance("counter").unwrap();
        assert_eq!(widgets.instantiated(), 1);

        widgets.register("counter", || Counter { runs: 10 });
        assert_eq!(widgets.instantiated(), 0);
        assert!(widgets.contains("counter"));
    }
}
