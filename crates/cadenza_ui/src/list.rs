//! Selection state and bounded navigation for list containers.
//!
//! A list is an ordinary container whose children double as selectable items;
//! the [`ListState`] payload tracks the current index. Navigation either wraps
//! (mathematical modulo, never negative) or clamps at the ends, and every
//! operation is a no-op on an empty list.

use crate::component::{Behavior, ComponentId};
use crate::render::Renderer;
use crate::tree::ComponentTree;

/// Selection index over a list container's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    pub(crate) selected: usize,
}

impl ListState {
    /// Creates a list state with the first item selected.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// The currently selected index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }
}

/// Steps `index` by `delta` over `count` items, wrapping around the ends.
///
/// Uses euclidean remainder so stepping backwards from zero lands on
/// `count - 1` instead of going negative.
pub(crate) fn step_wrapped(index: usize, delta: i64, count: usize) -> usize {
    debug_assert!(count > 0);
    let count = count as i64;
    let stepped = (index as i64 + delta).rem_euclid(count);
    stepped as usize
}

/// Steps `index` by `delta` over `count` items, clamping at the ends.
pub(crate) fn step_clamped(index: usize, delta: i64, count: usize) -> usize {
    debug_assert!(count > 0);
    let max = count as i64 - 1;
    let stepped = (index as i64 + delta).clamp(0, max);
    stepped as usize
}

impl<R: Renderer> ComponentTree<R> {
    /// The selected index of a list or browser node, when it has items.
    #[must_use]
    pub fn selected_index(&self, id: ComponentId) -> Option<usize> {
        match self.get(id).map(crate::component::Component::behavior)? {
            Behavior::List(state) if self.child_count(id) > 0 => Some(state.selected),
            Behavior::Browser(state) if !state.items.is_empty() => Some(state.selected),
            _ => None,
        }
    }

    /// Moves the selection forward by one.
    ///
    /// `wrap` chooses between wrapping past the last item and clamping at it.
    /// No-op on empty lists and non-list nodes.
    pub fn select_next(&mut self, id: ComponentId, wrap: bool) {
        self.step_selection(id, 1, wrap);
    }

    /// Moves the selection backward by one. See [`Self::select_next`].
    pub fn select_previous(&mut self, id: ComponentId, wrap: bool) {
        self.step_selection(id, -1, wrap);
    }

    /// Invokes the selected item's activation callback.
    ///
    /// For a plain list that is the selected child's click slot; a browser
    /// delegates to its centered slot, which holds the callback bound to the
    /// centered backing item. No-op when empty or the item is not interactive.
    pub fn select_enter(&mut self, id: ComponentId) {
        let target = match self.get(id).map(crate::component::Component::behavior) {
            Some(Behavior::List(state)) if self.child_count(id) > 0 => {
                self.child_at(id, state.selected)
            }
            Some(Behavior::Browser(state)) if !state.items.is_empty() => {
                self.child_at(id, state.visible_count / 2)
            }
            _ => None,
        };

        if let Some(item) = target {
            if let Some(Behavior::Button(button)) = self.behavior_mut(item) {
                button.on_click.invoke();
            }
        }
    }

    fn step_selection(&mut self, id: ComponentId, delta: i64, wrap: bool) {
        let step = |index: usize, count: usize| {
            if wrap {
                step_wrapped(index, delta, count)
            } else {
                step_clamped(index, delta, count)
            }
        };

        let count = self.child_count(id);
        let refresh = match self.behavior_mut(id) {
            Some(Behavior::List(state)) if count > 0 => {
                state.selected = step(state.selected, count);
                false
            }
            Some(Behavior::Browser(state)) if !state.items.is_empty() => {
                state.selected = step(state.selected, state.items.len());
                true
            }
            _ => false,
        };

        // The browser window recenters around the selection.
        if refresh {
            self.refresh_visible(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::render::HeadlessRenderer;
    use crate::unit::Unit;
    use std::cell::Cell;
    use std::rc::Rc;

    type Tree = ComponentTree<HeadlessRenderer>;

    fn rect() -> [Unit; 4] {
        [Unit::ZERO, Unit::ZERO, Unit::px(100.0), Unit::px(40.0)]
    }

    fn menu_with_buttons(tree: &mut Tree, count: usize) -> ComponentId {
        let menu = tree.insert(Component::list("menu", rect()));
        for i in 0..count {
            tree.add_child(menu, Component::button(format!("button_{i}"), rect()))
                .expect("distinct names");
        }
        menu
    }

    #[test]
    fn wrapping_navigation_stays_in_bounds() {
        let mut tree = Tree::new((1600.0, 900.0));
        let menu = menu_with_buttons(&mut tree, 5);

        assert_eq!(tree.selected_index(menu), Some(0));
        tree.select_previous(menu, true);
        assert_eq!(tree.selected_index(menu), Some(4));
        tree.select_next(menu, true);
        tree.select_next(menu, true);
        assert_eq!(tree.selected_index(menu), Some(1));
    }

    #[test]
    fn n_wrapped_steps_return_to_the_start() {
        let mut tree = Tree::new((1600.0, 900.0));
        let menu = menu_with_buttons(&mut tree, 5);

        tree.select_next(menu, true);
        tree.select_next(menu, true);
        let start = tree.selected_index(menu);
        for _ in 0..5 {
            tree.select_next(menu, true);
        }
        assert_eq!(tree.selected_index(menu), start);
    }

    #[test]
    fn clamped_navigation_sticks_at_the_ends() {
        let mut tree = Tree::new((1600.0, 900.0));
        let menu = menu_with_buttons(&mut tree, 3);

        tree.select_previous(menu, false);
        assert_eq!(tree.selected_index(menu), Some(0));

        for _ in 0..10 {
            tree.select_next(menu, false);
        }
        assert_eq!(tree.selected_index(menu), Some(2));
    }

    #[test]
    fn empty_list_navigation_is_a_noop() {
        let mut tree = Tree::new((1600.0, 900.0));
        let menu = tree.insert(Component::list("menu", rect()));

        tree.select_next(menu, true);
        tree.select_previous(menu, false);
        tree.select_enter(menu);
        assert_eq!(tree.selected_index(menu), None);
    }

    #[test]
    fn enter_invokes_the_selected_items_click_slot() {
        let mut tree = Tree::new((1600.0, 900.0));
        let menu = menu_with_buttons(&mut tree, 3);

        let hits = Rc::new(Cell::new(0));
        let second = tree.child_at(menu, 1).expect("child exists");
        if let Some(crate::component::Behavior::Button(button)) = tree.behavior_mut(second) {
            let counter = Rc::clone(&hits);
            button.on_click.set(move || counter.set(counter.get() + 1));
        }

        tree.select_next(menu, true);
        tree.select_enter(menu);
        assert_eq!(hits.get(), 1);
    }
}
