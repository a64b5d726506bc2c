//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Asset` - A registered script or stylesheet
//! - `RegionStore` - Named content slots of one render
//! - `Breadcrumb` - Page trail rendered into layouts

mod asset;
mod breadcrumb;
mod region;

pub use asset::Asset;
pub use breadcrumb::{
    strip_tags, Breadcrumb, Crumb, DEFAULT_TEMPLATE as DEFAULT_BREADCRUMB_TEMPLATE,
};
pub use region::{RegionStore, CONTENT_REGION};
