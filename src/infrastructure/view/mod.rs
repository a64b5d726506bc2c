//! View Renderer Implementations
//!
//! Concrete implementations of the ViewRenderer port.

mod finder;
mod fs_views;
mod memory;

pub use finder::{ViewFinder, DEFAULT_EXTENSIONS};
pub use fs_views::FsViewRenderer;
pub use memory::MemoryViews;
