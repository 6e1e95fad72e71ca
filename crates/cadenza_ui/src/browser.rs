//! Windowed list: a fixed odd-sized slot pool over a long backing sequence.
//!
//! The browser never grows one child per backing item. It keeps exactly
//! `visible_count` slot buttons alive, named by their relative offset from the
//! selection, and rebinds them whenever the selection moves. Slots whose
//! mapped index falls outside the data are hidden and reset to a placeholder.

use std::fmt;
use std::rc::Rc;

use crate::component::{Behavior, Component, ComponentId};
use crate::render::{Color, Renderer};
use crate::tree::ComponentTree;
use crate::unit::Unit;

/// One entry of a browser's backing sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserItem {
    /// Display title, shown on the slot.
    pub title: String,
    /// Author or artist credit.
    pub author: String,
    /// Opaque reference to the item's media (a path or locator).
    pub media_ref: String,
}

/// Windowing state for a browser container.
///
/// `visible_count` is derived from the resolved container height when the
/// slot pool is (re)built; it is always odd so one slot sits centered on the
/// selection.
pub struct BrowserState {
    pub(crate) items: Vec<BrowserItem>,
    pub(crate) selected: usize,
    pub(crate) visible_count: usize,
    pub(crate) item_height: f32,
    pub(crate) item_spacing: f32,
    pub(crate) depth_falloff: f32,
    pub(crate) placeholder: String,
    pub(crate) activate: Rc<dyn Fn(BrowserItem)>,
}

impl BrowserState {
    /// Creates an empty browser state with the default slot metrics.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            visible_count: 0,
            item_height: 150.0,
            item_spacing: 50.0,
            depth_falloff: 6.0,
            placeholder: "???".to_owned(),
            activate: Rc::new(|_| {}),
        }
    }

    /// Replaces the slot metrics (item height and vertical spacing).
    #[must_use]
    pub fn with_metrics(mut self, item_height: f32, item_spacing: f32) -> Self {
        self.item_height = item_height;
        self.item_spacing = item_spacing;
        self
    }

    /// The backing items.
    #[must_use]
    pub fn items(&self) -> &[BrowserItem] {
        &self.items
    }

    /// The selected backing index.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The live slot count. Zero until the pool has been built.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BrowserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserState")
            .field("items", &self.items.len())
            .field("selected", &self.selected)
            .field("visible_count", &self.visible_count)
            .field("item_height", &self.item_height)
            .field("item_spacing", &self.item_spacing)
            .field("activate", &"..")
            .finish()
    }
}

/// Slot count needed to cover `container_height`, plus one margin row on each
/// side. Always odd, so the selection has a single centered slot.
#[must_use]
pub fn visible_count_for(container_height: f32, item_height: f32, item_spacing: f32) -> usize {
    let per_item = item_height + item_spacing;
    if per_item <= 0.0 {
        return 1;
    }
    let side = ((container_height / per_item - 1.0) / 2.0).ceil().max(0.0);
    side as usize * 2 + 1
}

impl<R: Renderer> ComponentTree<R> {
    /// Replaces a browser's backing sequence and rebuilds its slot pool.
    ///
    /// The selection resets to the first item. No-op on non-browser nodes.
    pub fn set_browser_items(&mut self, id: ComponentId, items: Vec<BrowserItem>) {
        if let Some(Behavior::Browser(state)) = self.behavior_mut(id) {
            state.items = items;
            state.selected = 0;
        } else {
            return;
        }
        self.rebuild_browser_pool(id);
    }

    /// Binds the activation sink invoked with the chosen [`BrowserItem`] when
    /// a slot is clicked or the centered slot is entered.
    pub fn set_browser_activation(
        &mut self,
        id: ComponentId,
        activate: impl Fn(BrowserItem) + 'static,
    ) {
        if let Some(Behavior::Browser(state)) = self.behavior_mut(id) {
            state.activate = Rc::new(activate);
        } else {
            return;
        }
        // Existing slots hold closures over the old sink.
        self.refresh_visible(id);
    }

    /// The backing item under the selection, if any.
    #[must_use]
    pub fn browser_selected(&self, id: ComponentId) -> Option<&BrowserItem> {
        match self.get(id).map(Component::behavior)? {
            Behavior::Browser(state) => state.items.get(state.selected),
            _ => None,
        }
    }

    /// Discards and recreates the slot pool at the size the container's
    /// resolved height calls for, then refreshes the window.
    ///
    /// Called on initial load and after viewport resizes; slot components are
    /// reused across selection changes, never across rebuilds.
    pub(crate) fn rebuild_browser_pool(&mut self, id: ComponentId) {
        let (item_height, item_spacing, placeholder) = match self.get(id).map(Component::behavior)
        {
            Some(Behavior::Browser(state)) => {
                (state.item_height, state.item_spacing, state.placeholder.clone())
            }
            _ => return,
        };

        for slot in self.children(id).to_vec() {
            self.remove(slot);
        }

        let height = self.height(id);
        let visible_count = visible_count_for(height, item_height, item_spacing);
        if let Some(Behavior::Browser(state)) = self.behavior_mut(id) {
            state.visible_count = visible_count;
        }

        let half = (visible_count / 2) as i64;
        for offset in -half..=half {
            let mut slot = Component::button(
                format!("slot_{offset}"),
                [Unit::ZERO, Unit::ZERO, Unit::pw(100.0), Unit::px(item_height)],
            );
            slot.centered = true;
            slot.color = Color::rgb(0.78, 0.78, 0.78);
            slot.text = placeholder.clone();
            slot.text_size = Unit::px(item_height * 0.5);
            // Offsets are distinct, so the names cannot collide.
            let _ = self.add_child(id, slot);
        }

        self.refresh_visible(id);
    }

    /// Recenters the slot window around the current selection.
    ///
    /// For each relative offset `r`, the slot maps to backing index
    /// `selected + r`: out-of-range slots are hidden, placeholder-texted, and
    /// stripped of their activation callback; in-range slots are positioned
    /// at `r * (item_height + item_spacing)`, narrowed by the depth falloff
    /// at larger `|r|`, retitled, and bound to a closure capturing that item
    /// (not its index, which shifts under the reused pool).
    pub(crate) fn refresh_visible(&mut self, id: ComponentId) {
        let window = match self.get(id).map(Component::behavior) {
            Some(Behavior::Browser(state)) => {
                let half = (state.visible_count / 2) as i64;
                let selected = state.selected as i64;
                let len = state.items.len() as i64;
                let items: Vec<(i64, Option<BrowserItem>)> = (-half..=half)
                    .map(|offset| {
                        let index = selected + offset;
                        let item = (0..len)
                            .contains(&index)
                            .then(|| state.items[index as usize].clone());
                        (offset, item)
                    })
                    .collect();
                Window {
                    items,
                    item_height: state.item_height,
                    item_spacing: state.item_spacing,
                    depth_falloff: state.depth_falloff,
                    placeholder: state.placeholder.clone(),
                    activate: Rc::clone(&state.activate),
                }
            }
            _ => return,
        };

        let stride = window.item_height + window.item_spacing;
        for (position, (offset, item)) in window.items.into_iter().enumerate() {
            let Some(slot) = self.child_at(id, position) else { continue };

            match item {
                Some(item) => {
                    self.set_hidden(slot, false);
                    self.set_y(slot, Unit::px(offset as f32 * stride));
                    let falloff = window.depth_falloff * offset.unsigned_abs() as f32;
                    self.set_width(slot, Unit::pw(100.0 - falloff));
                    self.set_text(slot, &item.title);

                    let sink = Rc::clone(&window.activate);
                    if let Some(Behavior::Button(button)) = self.behavior_mut(slot) {
                        button.on_click.set(move || sink(item.clone()));
                    }
                }
                None => {
                    self.set_hidden(slot, true);
                    self.set_text(slot, &window.placeholder);
                    if let Some(Behavior::Button(button)) = self.behavior_mut(slot) {
                        button.on_click.clear();
                    }
                }
            }
        }
    }
}

/// Snapshot of one refresh pass, taken before any slot is mutated.
struct Window {
    items: Vec<(i64, Option<BrowserItem>)>,
    item_height: f32,
    item_spacing: f32,
    depth_falloff: f32,
    placeholder: String,
    activate: Rc<dyn Fn(BrowserItem)>,
}
