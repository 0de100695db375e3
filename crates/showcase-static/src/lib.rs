//! Demo discovery and static page generation for showcase.
//!
//! Scans demo folders for HTML pages and renders a list-view index and a
//! screenshot grid preview linking to them.

pub mod assets;
pub mod builder;
pub mod discovery;
pub mod group;
pub mod record;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder, DEFAULT_SOURCE_DIRS};
pub use discovery::{discover, Discovery};
pub use group::{group_by_folder, Group};
pub use record::{display_title, DemoRecord, Preview};
