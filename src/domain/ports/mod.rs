//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod view_renderer;

pub use file_system::{FileSystem, FsError, FsResult};
pub use view_renderer::{
    split_view_name, with_shared, ViewData, ViewError, ViewRenderer, NAMESPACE_SEPARATOR,
};
