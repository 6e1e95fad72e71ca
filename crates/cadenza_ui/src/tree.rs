//! The component tree: arena storage, lookup, invalidation, traversal.
//!
//! Nodes live in an id-keyed arena with insertion-ordered child lists, so the
//! parent back-reference is a plain [`ComponentId`] and invalidation cascades
//! are simple walks. All geometry reads resolve units lazily against the
//! current viewport; only the absolute position is cached, and it is always
//! recomputed from scratch after invalidation rather than patched, to avoid
//! compounding floating-point drift.

use std::collections::HashMap;

use tracing::debug;

use crate::component::{Behavior, Component, ComponentId};
use crate::error::{UiError, UiResult};
use crate::input::PointerState;
use crate::render::{Color, Renderer};
use crate::unit::{Unit, UnitContext};

/// Arena-backed tree of [`Component`] nodes sharing one viewport.
///
/// Reads of ids that are not (or no longer) in the tree degrade to defaults
/// and writes to them are no-ops; ids are only produced by [`Self::insert`]
/// and [`Self::add_child`], so a missing id means the node was removed.
pub struct ComponentTree<R: Renderer> {
    pub(crate) nodes: HashMap<ComponentId, Component>,
    pub(crate) children: HashMap<ComponentId, Vec<ComponentId>>,
    pub(crate) roots: Vec<ComponentId>,
    pub(crate) surfaces: HashMap<ComponentId, R::Surface>,
    pub(crate) viewport: (f32, f32),
    next_id: u64,
}

impl<R: Renderer> ComponentTree<R> {
    /// Creates an empty tree for the given viewport size.
    #[must_use]
    pub fn new(viewport: (f32, f32)) -> Self {
        Self {
            nodes: HashMap::with_capacity(64),
            children: HashMap::with_capacity(64),
            roots: Vec::with_capacity(8),
            surfaces: HashMap::with_capacity(64),
            viewport,
            next_id: 1,
        }
    }

    /// The current viewport size.
    #[must_use]
    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------

    /// Inserts a detached component as a root node and returns its id.
    pub fn insert(&mut self, component: Component) -> ComponentId {
        let id = ComponentId::new(self.next_id);
        self.next_id += 1;

        self.nodes.insert(id, component);
        self.children.insert(id, Vec::new());
        self.roots.push(id);
        id
    }

    /// Attaches an existing root node under a parent.
    ///
    /// Parent assignment is single-shot: re-attaching to the same parent is a
    /// no-op, re-attaching elsewhere fails and the existing link is kept. On
    /// success the child's subtree gets the viewport-resize treatment, since
    /// parent-relative units now resolve against a different frame.
    ///
    /// # Errors
    ///
    /// [`UiError::DuplicateName`] if the parent already holds a child with
    /// the same name, [`UiError::ParentReassigned`] if the child has a
    /// different parent, [`UiError::ParentCycle`] if the parent sits inside
    /// the child's own subtree.
    pub fn attach(&mut self, parent: ComponentId, child: ComponentId) -> UiResult<()> {
        if !self.nodes.contains_key(&parent) {
            return Ok(());
        }
        let Some(child_node) = self.nodes.get(&child) else {
            return Ok(());
        };

        match child_node.parent {
            Some(existing) if existing == parent => return Ok(()),
            Some(_) => {
                return Err(UiError::ParentReassigned { component: child_node.name.clone() })
            }
            None => {}
        }

        let child_name = child_node.name.clone();
        if self.find_child(parent, &child_name).is_some() {
            return Err(UiError::DuplicateName {
                container: self.name_of(parent),
                name: child_name,
            });
        }

        // A detached child is the root of its own subtree; make sure the new
        // parent is not inside it.
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(UiError::ParentCycle { component: child_name });
            }
            cursor = self.nodes.get(&id).and_then(|node| node.parent);
        }

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        self.roots.retain(|&id| id != child);
        self.children.entry(parent).or_default().push(child);

        // Parent-relative units just changed meaning.
        self.refresh_subtree_geometry(child);
        Ok(())
    }

    /// Inserts a component directly under a parent.
    ///
    /// # Errors
    ///
    /// [`UiError::DuplicateName`] if the parent already holds a child with
    /// the same name; the tree is left unmodified.
    pub fn add_child(&mut self, parent: ComponentId, component: Component) -> UiResult<ComponentId> {
        if self.find_child(parent, component.name()).is_some() {
            return Err(UiError::DuplicateName {
                container: self.name_of(parent),
                name: component.name().to_owned(),
            });
        }
        let id = self.insert(component);
        // Fresh node: no duplicate, no parent, no cycle possible.
        self.attach(parent, id)?;
        Ok(id)
    }

    /// Removes a node and its whole subtree.
    pub fn remove(&mut self, id: ComponentId) {
        if let Some(kids) = self.children.remove(&id) {
            for child in kids {
                self.remove(child);
            }
        }

        if let Some(parent) = self.nodes.get(&id).and_then(|node| node.parent) {
            if let Some(siblings) = self.children.get_mut(&parent) {
                siblings.retain(|&sibling| sibling != id);
            }
        }

        self.roots.retain(|&root| root != id);
        self.surfaces.remove(&id);
        self.nodes.remove(&id);
    }

    /// Returns the child with the given name.
    ///
    /// # Errors
    ///
    /// [`UiError::MissingChild`] naming the container and the missing name.
    pub fn lookup(&self, parent: ComponentId, name: &str) -> UiResult<ComponentId> {
        self.find_child(parent, name).ok_or_else(|| UiError::MissingChild {
            container: self.name_of(parent),
            name: name.to_owned(),
        })
    }

    /// Returns the child at the given insertion-order position.
    #[must_use]
    pub fn child_at(&self, parent: ComponentId, index: usize) -> Option<ComponentId> {
        self.children.get(&parent).and_then(|kids| kids.get(index)).copied()
    }

    /// Children of a node in insertion order.
    #[must_use]
    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        self.children.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Number of children of a node.
    #[must_use]
    pub fn child_count(&self, id: ComponentId) -> usize {
        self.children.get(&id).map_or(0, Vec::len)
    }

    /// Root nodes in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[ComponentId] {
        &self.roots
    }

    /// Shared access to a node.
    #[must_use]
    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.nodes.get(&id)
    }

    /// Mutable access to a node's behavior payload.
    ///
    /// Behavior state (callbacks, selection) never affects geometry, so this
    /// bypasses the invalidation setters safely.
    pub fn behavior_mut(&mut self, id: ComponentId) -> Option<&mut Behavior> {
        self.nodes.get_mut(&id).map(Component::behavior_mut)
    }

    fn find_child(&self, parent: ComponentId, name: &str) -> Option<ComponentId> {
        self.children
            .get(&parent)?
            .iter()
            .copied()
            .find(|id| self.nodes.get(id).is_some_and(|node| node.name == name))
    }

    fn name_of(&self, id: ComponentId) -> String {
        self.nodes.get(&id).map_or_else(|| "<detached>".to_owned(), |node| node.name.clone())
    }

    // -------------------------------------------------------------------
    // Geometry reads (lazy unit resolution)
    // -------------------------------------------------------------------

    fn context_for(&self, id: ComponentId) -> UnitContext {
        let parent = self.nodes.get(&id).and_then(|node| node.parent);
        let parent_size = parent.map(|p| (self.width(p), self.height(p)));
        UnitContext::new(self.viewport, parent_size)
    }

    /// Resolved local X offset.
    #[must_use]
    pub fn x(&self, id: ComponentId) -> f32 {
        self.nodes.get(&id).map_or(0.0, |node| node.x.resolve(self.context_for(id)))
    }

    /// Resolved local Y offset.
    #[must_use]
    pub fn y(&self, id: ComponentId) -> f32 {
        self.nodes.get(&id).map_or(0.0, |node| node.y.resolve(self.context_for(id)))
    }

    /// Resolved width.
    #[must_use]
    pub fn width(&self, id: ComponentId) -> f32 {
        self.nodes.get(&id).map_or(0.0, |node| node.width.resolve(self.context_for(id)))
    }

    /// Resolved height.
    #[must_use]
    pub fn height(&self, id: ComponentId) -> f32 {
        self.nodes.get(&id).map_or(0.0, |node| node.height.resolve(self.context_for(id)))
    }

    /// Resolved local position pair.
    #[must_use]
    pub fn position(&self, id: ComponentId) -> (f32, f32) {
        (self.x(id), self.y(id))
    }

    /// Resolved size pair.
    #[must_use]
    pub fn size(&self, id: ComponentId) -> (f32, f32) {
        (self.width(id), self.height(id))
    }

    /// Resolved text size.
    #[must_use]
    pub fn text_size(&self, id: ComponentId) -> f32 {
        self.nodes.get(&id).map_or(0.0, |node| node.text_size.resolve(self.context_for(id)))
    }

    /// Screen-space position: local offset (adjusted for centering) plus the
    /// parent's absolute position.
    ///
    /// Computed on first access after invalidation, then cached. Always
    /// recomputed whole rather than patched incrementally.
    pub fn absolute_position(&mut self, id: ComponentId) -> (f32, f32) {
        if let Some(cached) = self.nodes.get(&id).and_then(|node| node.absolute) {
            return cached;
        }
        let Some(node) = self.nodes.get(&id) else {
            return (0.0, 0.0);
        };
        let parent = node.parent;
        let centered = node.centered;

        let (mut x, mut y) = self.position(id);
        if centered {
            let (frame_w, frame_h) =
                parent.map_or(self.viewport, |p| (self.width(p), self.height(p)));
            let (w, h) = self.size(id);
            x = frame_w / 2.0 + x - w / 2.0;
            y = frame_h / 2.0 + y - h / 2.0;
        }

        let position = match parent {
            Some(p) => {
                let (px, py) = self.absolute_position(p);
                (x + px, y + py)
            }
            None => (x, y),
        };

        if let Some(node) = self.nodes.get_mut(&id) {
            node.absolute = Some(position);
        }
        position
    }

    // -------------------------------------------------------------------
    // Geometry writes (invalidation cascades)
    // -------------------------------------------------------------------

    /// Replaces the local X unit and invalidates cached absolute positions.
    pub fn set_x(&mut self, id: ComponentId, unit: Unit) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.x = unit;
        } else {
            return;
        }
        self.invalidate_absolute(id);
    }

    /// Replaces the local Y unit and invalidates cached absolute positions.
    pub fn set_y(&mut self, id: ComponentId, unit: Unit) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.y = unit;
        } else {
            return;
        }
        self.invalidate_absolute(id);
    }

    /// Replaces both position units.
    pub fn set_position(&mut self, id: ComponentId, x: Unit, y: Unit) {
        self.set_x(id, x);
        self.set_y(id, y);
    }

    /// Replaces the width unit and marks the paint surface dirty.
    ///
    /// The absolute-position cache is only invalidated when the component is
    /// centered: for top-left anchored components the width does not move the
    /// origin. Flagged for product-owner confirmation; do not "fix" this to
    /// an unconditional invalidation.
    pub fn set_width(&mut self, id: ComponentId, unit: Unit) {
        let centered = match self.nodes.get_mut(&id) {
            Some(node) => {
                node.width = unit;
                node.is_dirty = true;
                node.centered
            }
            None => return,
        };
        if centered {
            self.invalidate_absolute(id);
        }
    }

    /// Replaces the height unit and marks the paint surface dirty.
    ///
    /// Same centered-only invalidation rule as [`Self::set_width`].
    pub fn set_height(&mut self, id: ComponentId, unit: Unit) {
        let centered = match self.nodes.get_mut(&id) {
            Some(node) => {
                node.height = unit;
                node.is_dirty = true;
                node.centered
            }
            None => return,
        };
        if centered {
            self.invalidate_absolute(id);
        }
    }

    /// Replaces both size units.
    pub fn set_size(&mut self, id: ComponentId, width: Unit, height: Unit) {
        self.set_width(id, width);
        self.set_height(id, height);
    }

    /// Toggles center-anchored positioning; always invalidates the cache.
    pub fn set_centered(&mut self, id: ComponentId, centered: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.centered = centered;
        } else {
            return;
        }
        self.invalidate_absolute(id);
    }

    /// Shows or hides a component.
    ///
    /// When the component opted into `cascade_hidden`, the flag is pushed to
    /// every descendant so a whole menu toggles atomically.
    pub fn set_hidden(&mut self, id: ComponentId, hidden: bool) {
        let cascade = match self.nodes.get_mut(&id) {
            Some(node) => {
                node.hidden = hidden;
                node.cascade_hidden
            }
            None => return,
        };
        if cascade {
            for descendant in self.subtree(id) {
                if let Some(node) = self.nodes.get_mut(&descendant) {
                    node.hidden = hidden;
                }
            }
        }
    }

    /// Sets the background color and marks the surface dirty.
    pub fn set_color(&mut self, id: ComponentId, color: Color) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.color = color;
            node.is_dirty = true;
        }
    }

    /// Sets the text content (trimmed) and marks the surface dirty.
    pub fn set_text(&mut self, id: ComponentId, text: impl AsRef<str>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.text = text.as_ref().trim().to_owned();
            node.is_dirty = true;
        }
    }

    /// Replaces the text-size unit; dirties the surface only when there is
    /// text to redraw.
    pub fn set_text_size(&mut self, id: ComponentId, unit: Unit) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.text_size = unit;
            if !node.text.is_empty() {
                node.is_dirty = true;
            }
        }
    }

    /// Sets the text color; dirties the surface only when there is text.
    pub fn set_text_color(&mut self, id: ComponentId, color: Color) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.text_color = color;
            if !node.text.is_empty() {
                node.is_dirty = true;
            }
        }
    }

    /// Marks the paint surface for redraw on next render.
    pub fn mark_dirty(&mut self, id: ComponentId) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.is_dirty = true;
        }
    }

    /// Clears the cached absolute position of a node and every descendant
    /// (their caches are derived from this node's).
    pub fn invalidate_absolute(&mut self, id: ComponentId) {
        for member in self.subtree(id) {
            if let Some(node) = self.nodes.get_mut(&member) {
                node.absolute = None;
            }
        }
    }

    // -------------------------------------------------------------------
    // Frame lifecycle
    // -------------------------------------------------------------------

    /// Advances component state for one frame.
    ///
    /// Children are visited before their parents, in insertion order, and the
    /// whole pass completes before any render work: mutations made here are
    /// visible to the same frame's [`Self::render`]. Interactive nodes run
    /// pointer edge detection against their absolute bounds.
    pub fn update(&mut self, _dt: f32, pointer: PointerState) {
        for id in self.post_order() {
            let is_button =
                matches!(self.nodes.get(&id).map(Component::behavior), Some(Behavior::Button(_)));
            if !is_button {
                continue;
            }

            let (ax, ay) = self.absolute_position(id);
            let (w, h) = self.size(id);

            let Some(node) = self.nodes.get_mut(&id) else { continue };
            if let Behavior::Button(button) = node.behavior_mut() {
                let events = button.tracker.advance(pointer, (ax, ay, w, h));
                if events.entered {
                    button.on_enter.invoke();
                }
                if events.left {
                    button.on_leave.invoke();
                }
                if events.over {
                    button.on_over.invoke();
                }
                if events.down {
                    button.on_down.invoke();
                }
                if events.pressed {
                    button.on_pressed.invoke();
                }
                if events.up {
                    button.on_up.invoke();
                }
                if events.clicked {
                    button.on_click.invoke();
                }
            }
        }
    }

    /// Draws the tree onto the screen surface.
    ///
    /// Parents are drawn before their children, in insertion order, each node
    /// blitting onto the same target at its own cached absolute position (no
    /// intermediate per-child surfaces, so alpha/position errors cannot
    /// compound across nesting levels). Hidden nodes skip their own blit;
    /// their children still follow their own flags. A dirty node refills its
    /// backing surface (background color, then the text overlay) before the
    /// blit.
    pub fn render(&mut self, renderer: &mut R, screen: &mut R::Surface) {
        for id in self.pre_order() {
            let Some((hidden, dirty, color, text, text_color)) = self
                .nodes
                .get(&id)
                .map(|n| (n.hidden, n.is_dirty, n.color, n.text.clone(), n.text_color))
            else {
                continue;
            };
            if hidden {
                continue;
            }

            let position = self.absolute_position(id);
            let (w, h) = self.size(id);
            let text_size = self.text_size(id);

            if let Some(node) = self.nodes.get_mut(&id) {
                node.is_dirty = false;
            }

            let surface = self
                .surfaces
                .entry(id)
                .or_insert_with(|| renderer.create_surface(w.max(1.0), h.max(1.0)));

            if dirty {
                renderer.fill_rect(surface, color);
                if !text.is_empty() {
                    renderer.draw_text(surface, &text, text_size, text_color);
                }
            }
            renderer.blit(screen, surface, position);
        }
    }

    /// Applies a new viewport size: every node rebuilds its backing surface
    /// at the newly resolved size, is marked dirty, and loses its cached
    /// absolute position. Browser nodes then rebuild their slot pools, since
    /// the visible count depends on the resolved height.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        debug!(width, height, "viewport resized");

        for id in self.pre_order() {
            self.refresh_geometry(id);
        }

        let browsers: Vec<ComponentId> = self
            .nodes
            .iter()
            .filter(|(_, node)| matches!(node.behavior, Behavior::Browser(_)))
            .map(|(&id, _)| id)
            .collect();
        for id in browsers {
            self.rebuild_browser_pool(id);
        }
    }

    /// Per-node part of the resize treatment: drop the backing surface (it is
    /// recreated at the resolved size on next render), mark dirty, and clear
    /// the absolute-position cache.
    fn refresh_geometry(&mut self, id: ComponentId) {
        self.surfaces.remove(&id);
        if let Some(node) = self.nodes.get_mut(&id) {
            node.is_dirty = true;
            node.absolute = None;
        }
    }

    pub(crate) fn refresh_subtree_geometry(&mut self, id: ComponentId) {
        for member in self.subtree(id) {
            self.refresh_geometry(member);
        }
    }

    // -------------------------------------------------------------------
    // Traversal
    // -------------------------------------------------------------------

    /// All ids of the subtree rooted at `id`, parent first.
    fn subtree(&self, id: ComponentId) -> Vec<ComponentId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(&current) {
                continue;
            }
            order.push(current);
            if let Some(kids) = self.children.get(&current) {
                stack.extend(kids.iter().rev().copied());
            }
        }
        order
    }

    /// Whole-tree traversal, parents before children, insertion order.
    fn pre_order(&self) -> Vec<ComponentId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<ComponentId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(kids) = self.children.get(&id) {
                stack.extend(kids.iter().rev().copied());
            }
        }
        order
    }

    /// Whole-tree traversal, children before parents, insertion order.
    fn post_order(&self) -> Vec<ComponentId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<ComponentId> = self.roots.clone();
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(kids) = self.children.get(&id) {
                stack.extend(kids.iter().copied());
            }
        }
        order.reverse();
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HeadlessRenderer;

    type Tree = ComponentTree<HeadlessRenderer>;

    const VIEWPORT: (f32, f32) = (1600.0, 900.0);

    fn panel(name: &str, rect: [f32; 4]) -> Component {
        let [x, y, w, h] = rect;
        Component::new(name, [Unit::px(x), Unit::px(y), Unit::px(w), Unit::px(h)])
    }

    #[test]
    fn duplicate_names_are_rejected_and_leave_the_container_unchanged() {
        let mut tree = Tree::new(VIEWPORT);
        let root = tree.insert(panel("root", [0.0, 0.0, 100.0, 100.0]));

        tree.add_child(root, panel("a", [0.0, 0.0, 10.0, 10.0])).expect("first add");
        let err = tree
            .add_child(root, panel("a", [5.0, 5.0, 10.0, 10.0]))
            .expect_err("second add must fail");

        assert_eq!(
            err,
            UiError::DuplicateName { container: "root".to_owned(), name: "a".to_owned() }
        );
        assert_eq!(tree.child_count(root), 1);
    }

    #[test]
    fn lookup_finds_children_by_name() {
        let mut tree = Tree::new(VIEWPORT);
        let root = tree.insert(panel("root", [0.0, 0.0, 100.0, 100.0]));
        let play = tree.add_child(root, panel("play", [0.0, 0.0, 10.0, 10.0])).expect("add");

        assert_eq!(tree.lookup(root, "play"), Ok(play));
        assert_eq!(
            tree.lookup(root, "settings"),
            Err(UiError::MissingChild {
                container: "root".to_owned(),
                name: "settings".to_owned()
            })
        );
    }

    #[test]
    fn parent_assignment_is_single_shot() {
        let mut tree = Tree::new(VIEWPORT);
        let first = tree.insert(panel("first", [0.0, 0.0, 100.0, 100.0]));
        let second = tree.insert(panel("second", [0.0, 0.0, 100.0, 100.0]));
        let child = tree.insert(panel("child", [0.0, 0.0, 10.0, 10.0]));

        tree.attach(first, child).expect("first attach");
        // Same parent again is a no-op.
        tree.attach(first, child).expect("idempotent attach");

        let err = tree.attach(second, child).expect_err("reassign must fail");
        assert_eq!(err, UiError::ParentReassigned { component: "child".to_owned() });
        assert_eq!(tree.get(child).and_then(Component::parent), Some(first));
    }

    #[test]
    fn attaching_inside_own_subtree_fails() {
        let mut tree = Tree::new(VIEWPORT);
        let outer = tree.insert(panel("outer", [0.0, 0.0, 100.0, 100.0]));
        let inner = tree.add_child(outer, panel("inner", [0.0, 0.0, 50.0, 50.0])).expect("add");

        let err = tree.attach(inner, outer).expect_err("cycle must fail");
        assert_eq!(err, UiError::ParentCycle { component: "outer".to_owned() });
    }

    #[test]
    fn absolute_position_adds_ancestor_offsets() {
        let mut tree = Tree::new(VIEWPORT);
        let root = tree.insert(panel("root", [100.0, 50.0, 400.0, 300.0]));
        let child = tree.add_child(root, panel("child", [10.0, 20.0, 50.0, 50.0])).expect("add");

        assert_eq!(tree.absolute_position(root), (100.0, 50.0));
        assert_eq!(tree.absolute_position(child), (110.0, 70.0));
    }

    #[test]
    fn ancestor_moves_invalidate_descendant_caches() {
        let mut tree = Tree::new(VIEWPORT);
        let root = tree.insert(panel("root", [100.0, 50.0, 400.0, 300.0]));
        let child = tree.add_child(root, panel("child", [10.0, 20.0, 50.0, 50.0])).expect("add");

        // Warm the caches, then move the ancestor.
        tree.absolute_position(child);
        tree.set_x(root, Unit::px(200.0));

        assert_eq!(tree.absolute_position(child), (210.0, 70.0));
    }

    #[test]
    fn centered_positioning_offsets_from_the_frame_center() {
        let mut tree = Tree::new(VIEWPORT);
        let root = tree.insert(panel("root", [0.0, 0.0, 400.0, 300.0]));
        let child = tree.add_child(root, panel("child", [0.0, 0.0, 100.0, 50.0])).expect("add");
        tree.set_centered(child, true);

        // Parent center (200, 150) minus half the child size.
        assert_eq!(tree.absolute_position(child), (150.0, 125.0));
    }

    #[test]
    fn centered_root_uses_the_viewport_as_its_frame() {
        let mut tree = Tree::new(VIEWPORT);
        let root = tree.insert(panel("root", [0.0, 0.0, 200.0, 100.0]));
        tree.set_centered(root, true);

        assert_eq!(tree.absolute_position(root), (700.0, 400.0));
    }

    #[test]
    fn width_changes_only_recompute_when_centered() {
        let mut tree = Tree::new(VIEWPORT);
        let anchored = tree.insert(panel("anchored", [10.0, 10.0, 100.0, 100.0]));
        let centered = tree.insert(panel("centered", [0.0, 0.0, 100.0, 100.0]));
        tree.set_centered(centered, true);

        let anchored_before = tree.absolute_position(anchored);
        let centered_before = tree.absolute_position(centered);

        tree.set_width(anchored, Unit::px(300.0));
        tree.set_width(centered, Unit::px(300.0));

        // The anchored node keeps its stale cache by design.
        assert_eq!(tree.get(anchored).and_then(|n| n.absolute), Some(anchored_before));
        assert_eq!(tree.get(centered).and_then(|n| n.absolute), None);
        assert_ne!(tree.absolute_position(centered), centered_before);
    }

    #[test]
    fn percent_units_resolve_against_parent_then_viewport() {
        let mut tree = Tree::new(VIEWPORT);
        let root = tree.insert(Component::new(
            "root",
            [Unit::vw(15.0), Unit::px(0.0), Unit::vh(70.0), Unit::vh(50.0)],
        ));
        let child = tree
            .add_child(
                root,
                Component::new(
                    "child",
                    [Unit::px(0.0), Unit::px(0.0), Unit::pw(80.0), Unit::ph(10.0)],
                ),
            )
            .expect("add");

        assert_eq!(tree.x(root), 240.0);
        assert_eq!(tree.size(root), (630.0, 450.0));
        assert_eq!(tree.size(child), (504.0, 45.0));

        // Root-level parent units fall back to the viewport.
        let loose = tree.insert(Component::new(
            "loose",
            [Unit::px(0.0), Unit::px(0.0), Unit::pw(50.0), Unit::ph(50.0)],
        ));
        assert_eq!(tree.size(loose), (800.0, 450.0));
    }

    #[test]
    fn viewport_resize_rederives_geometry() {
        let mut tree = Tree::new(VIEWPORT);
        let root = tree.insert(Component::new(
            "root",
            [Unit::px(0.0), Unit::px(0.0), Unit::vw(50.0), Unit::vh(50.0)],
        ));

        let mut renderer = HeadlessRenderer::new();
        let mut screen = renderer.create_surface(VIEWPORT.0, VIEWPORT.1);
        tree.render(&mut renderer, &mut screen);

        let before = tree.surfaces.get(&root).cloned().expect("surface exists");
        assert_eq!((before.width, before.height), (800.0, 450.0));

        tree.set_viewport(800.0, 600.0);
        assert!(tree.surfaces.get(&root).is_none());
        assert!(tree.get(root).is_some_and(Component::is_dirty));

        tree.render(&mut renderer, &mut screen);
        let after = tree.surfaces.get(&root).cloned().expect("surface rebuilt");
        assert_eq!((after.width, after.height), (400.0, 300.0));
    }

    #[test]
    fn render_skips_hidden_and_redraws_dirty_once() {
        let mut tree = Tree::new(VIEWPORT);
        let root = tree.insert(panel("root", [0.0, 0.0, 100.0, 100.0]));
        let label = tree.add_child(root, panel("label", [0.0, 0.0, 50.0, 20.0])).expect("add");
        tree.set_text(label, "PLAY");
        tree.set_hidden(label, true);

        let mut renderer = HeadlessRenderer::new();
        let mut screen = renderer.create_surface(VIEWPORT.0, VIEWPORT.1);

        renderer.begin_frame();
        tree.render(&mut renderer, &mut screen);
        assert_eq!(renderer.blits.len(), 1); // only the root
        assert_eq!(renderer.fill_count, 1);

        tree.set_hidden(label, false);
        renderer.begin_frame();
        tree.render(&mut renderer, &mut screen);
        assert_eq!(renderer.blits.len(), 2);
        assert_eq!(renderer.fill_count, 2);
        assert_eq!(renderer.text_count, 1);

        // A clean tree blits without redrawing.
        renderer.begin_frame();
        tree.render(&mut renderer, &mut screen);
        assert_eq!(renderer.blits.len(), 2);
        assert_eq!(renderer.fill_count, 2);
        assert_eq!(renderer.text_count, 1);
    }

    #[test]
    fn hidden_cascades_only_when_opted_in() {
        let mut tree = Tree::new(VIEWPORT);
        let plain = tree.insert(panel("plain", [0.0, 0.0, 100.0, 100.0]));
        let plain_kid = tree.add_child(plain, panel("kid", [0.0, 0.0, 10.0, 10.0])).expect("add");

        let menu = tree.insert(
            panel("menu", [0.0, 0.0, 100.0, 100.0])
                .configure([("cascade_hidden", crate::component::AttrValue::Flag(true))])
                .expect("configure"),
        );
        let menu_kid = tree.add_child(menu, panel("kid", [0.0, 0.0, 10.0, 10.0])).expect("add");

        tree.set_hidden(plain, true);
        assert!(!tree.get(plain_kid).is_some_and(Component::is_hidden));

        tree.set_hidden(menu, true);
        assert!(tree.get(menu_kid).is_some_and(Component::is_hidden));

        tree.set_hidden(menu, false);
        assert!(!tree.get(menu_kid).is_some_and(Component::is_hidden));
    }

    #[test]
    fn removal_detaches_the_whole_subtree() {
        let mut tree = Tree::new(VIEWPORT);
        let root = tree.insert(panel("root", [0.0, 0.0, 100.0, 100.0]));
        let child = tree.add_child(root, panel("child", [0.0, 0.0, 50.0, 50.0])).expect("add");
        let grandchild =
            tree.add_child(child, panel("grandchild", [0.0, 0.0, 10.0, 10.0])).expect("add");

        tree.remove(child);
        assert!(tree.get(child).is_none());
        assert!(tree.get(grandchild).is_none());
        assert_eq!(tree.child_count(root), 0);
        assert_eq!(tree.len(), 1);
    }
}
