//! Theme render context, lifecycle hooks and widgets

mod context;
mod hooks;
mod widget;

pub use context::{RenderKind, Theme, ThemeState};
pub use hooks::{Hook, HookRegistry, ThemeEvent};
pub use widget::{Widget, WidgetContext, WidgetRegistry};
