//! # Cadenza UI Core
//!
//! A retained-mode tree of positioned, sized, paintable components driving the
//! Cadenza menus and map browser.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     FRAME PIPELINE                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  Input Snapshot → update(dt) → render(surface)            │
//! │        │               │              │                   │
//! │  Edge Detection   Tree Fan-Out   Dirty Redraw + Blit      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The pieces, leaf-first:
//! - [`Unit`] - a deferred scalar resolved against the viewport or the parent
//!   only when read.
//! - [`Component`] - the base node: geometry as units, visual attributes, a
//!   dirty flag, and a cached absolute position.
//! - [`ComponentTree`] - arena storage for the whole tree: name-addressed,
//!   insertion-ordered children, invalidation cascades, update/render fan-out.
//! - selectable lists ([`ListState`]) and the index-windowed browser
//!   ([`BrowserState`]) that virtualizes an arbitrarily long backing sequence
//!   into a small odd-sized pool of live slots.
//!
//! Everything is single-threaded and frame-driven: each operation runs to
//! completion inside the calling frame, and `update` mutations are visible to
//! the same frame's `render`.

pub mod browser;
pub mod callback;
pub mod component;
pub mod error;
pub mod input;
pub mod list;
pub mod render;
pub mod tree;
pub mod unit;

pub use browser::{visible_count_for, BrowserItem, BrowserState};
pub use callback::Callback;
pub use component::{AttrValue, Behavior, ButtonState, Component, ComponentId};
pub use error::{UiError, UiResult};
pub use input::{PointerEvents, PointerState, PointerTracker};
pub use list::ListState;
pub use render::{Color, HeadlessRenderer, HeadlessSurface, Renderer};
pub use tree::ComponentTree;
pub use unit::{Axis, Frame, Unit, UnitContext};
