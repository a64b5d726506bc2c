//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `view/` - View renderer implementations (tera files, in-memory blade)

pub mod fs;
pub mod view;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};
pub use view::{FsViewRenderer, MemoryViews, ViewFinder};
