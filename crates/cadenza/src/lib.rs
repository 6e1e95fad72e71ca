//! Cadenza front end: the screens and plumbing around the UI core.
//!
//! The interesting machinery (layout, selection, windowing) lives in
//! `cadenza_ui`; this crate supplies what a playable front end needs around
//! it: user configuration, the on-disk map catalog, the delayed-request
//! queue, the menu and map-browser views, and the frame driver tying them
//! together.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod request;
pub mod view;

pub use app::App;
pub use catalog::{MapCatalog, MapInfo};
pub use config::Config;
pub use error::{FrontError, FrontResult};
pub use request::{Request, RequestQueue};
pub use view::{InputEvent, Key, View, ViewId};
