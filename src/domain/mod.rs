//! Domain Layer
//!
//! The core of themekit - asset ordering, minification and region state
//! without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Asset, RegionStore, Breadcrumb)
//! - `value_objects/` - Immutable value types (AssetGroup, AssetSource, ContentHash)
//! - `services/` - Domain services (arrange, minifiers, css url rewriting, inline templates)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
