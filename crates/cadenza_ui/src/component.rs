//! Component nodes and bulk configuration.
//!
//! A [`Component`] is the base positioned/sized, paintable node: geometry as
//! deferred [`Unit`]s, visual attributes, a dirty flag, a cached absolute
//! position, and a single-shot parent link. Role-specific state (button, list,
//! browser) rides along in the [`Behavior`] payload, so containers can hold a
//! uniform tree of nodes.

use crate::browser::BrowserState;
use crate::callback::Callback;
use crate::error::{UiError, UiResult};
use crate::input::PointerTracker;
use crate::list::ListState;
use crate::render::Color;
use crate::unit::Unit;

/// Identifier of a node inside a [`ComponentTree`](crate::tree::ComponentTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    /// Creates an id from a raw value.
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Event slots and pointer bookkeeping for an interactive component.
#[derive(Debug, Default)]
pub struct ButtonState {
    /// Edge-detection state fed by the per-frame pointer snapshot.
    pub tracker: PointerTracker,
    /// Fires once when the pointer crosses into the component.
    pub on_enter: Callback,
    /// Fires once when the pointer crosses out of the component.
    pub on_leave: Callback,
    /// Fires every frame the pointer is over the component.
    pub on_over: Callback,
    /// Fires once when a press begins inside the component.
    pub on_down: Callback,
    /// Fires every frame a press is held over the component.
    pub on_pressed: Callback,
    /// Fires once when a press is released over the component.
    pub on_up: Callback,
    /// Fires once when a press that began inside is released inside.
    pub on_click: Callback,
}

/// Role-specific state attached to a component.
#[derive(Debug, Default)]
pub enum Behavior {
    /// Plain paintable node. Any node may hold children; this is also the
    /// generic container case.
    #[default]
    Panel,
    /// Interactive node with pointer edge detection and event slots.
    Button(ButtonState),
    /// Container with a current-selection index over its children.
    List(ListState),
    /// Selectable list windowing a long backing sequence into a slot pool.
    Browser(BrowserState),
}

/// Dynamically-typed attribute value for bulk configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A geometry or text-size unit.
    Unit(Unit),
    /// A color value.
    Color(Color),
    /// Text content.
    Text(String),
    /// A boolean flag.
    Flag(bool),
}

/// A positioned, sized, paintable node.
///
/// Geometry is stored as [`Unit`]s and resolved lazily by the owning tree;
/// the absolute position is cached per node and invalidated by the tree's
/// setters.
#[derive(Debug)]
pub struct Component {
    pub(crate) name: String,
    pub(crate) x: Unit,
    pub(crate) y: Unit,
    pub(crate) width: Unit,
    pub(crate) height: Unit,
    pub(crate) centered: bool,
    pub(crate) hidden: bool,
    pub(crate) cascade_hidden: bool,
    pub(crate) color: Color,
    pub(crate) text: String,
    pub(crate) text_size: Unit,
    pub(crate) text_color: Color,
    pub(crate) is_dirty: bool,
    pub(crate) absolute: Option<(f32, f32)>,
    pub(crate) parent: Option<ComponentId>,
    pub(crate) behavior: Behavior,
}

impl Component {
    /// Creates a plain component with a name and geometry `[x, y, width, height]`.
    ///
    /// The dirty flag starts set so the surface is drawn on first render; the
    /// text size defaults to the component height.
    #[must_use]
    pub fn new(name: impl Into<String>, rect: [Unit; 4]) -> Self {
        let [x, y, width, height] = rect;
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
            centered: false,
            hidden: false,
            cascade_hidden: false,
            color: Color::BLACK,
            text: String::new(),
            text_size: height,
            text_color: Color::BLACK,
            is_dirty: true,
            absolute: None,
            parent: None,
            behavior: Behavior::Panel,
        }
    }

    /// Creates an interactive button component.
    #[must_use]
    pub fn button(name: impl Into<String>, rect: [Unit; 4]) -> Self {
        Self::new(name, rect).with_behavior(Behavior::Button(ButtonState::default()))
    }

    /// Creates a selectable list container.
    #[must_use]
    pub fn list(name: impl Into<String>, rect: [Unit; 4]) -> Self {
        Self::new(name, rect).with_behavior(Behavior::List(ListState::new()))
    }

    /// Creates a windowed browser container.
    #[must_use]
    pub fn browser(name: impl Into<String>, rect: [Unit; 4], state: BrowserState) -> Self {
        Self::new(name, rect).with_behavior(Behavior::Browser(state))
    }

    /// Replaces the behavior payload.
    #[must_use]
    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Applies attributes by name, failing on the first unknown attribute or
    /// mismatched value. Geometry is untouched when an error is returned
    /// before any assignment happened for that attribute.
    ///
    /// # Errors
    ///
    /// [`UiError::UnknownAttribute`] for names that do not exist or are not
    /// user-assignable, [`UiError::AttributeValue`] for values of the wrong
    /// shape.
    pub fn configure<'a>(
        mut self,
        attrs: impl IntoIterator<Item = (&'a str, AttrValue)>,
    ) -> UiResult<Self> {
        for (attribute, value) in attrs {
            self.set_attr(attribute, value)?;
        }
        Ok(self)
    }

    /// Sets one attribute by name. See [`Self::configure`].
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::configure`].
    pub fn set_attr(&mut self, attribute: &str, value: AttrValue) -> UiResult<()> {
        let mismatch = |expected: &'static str| UiError::AttributeValue {
            component: self.name.clone(),
            attribute: attribute.to_owned(),
            expected,
        };

        match (attribute, value) {
            ("x", AttrValue::Unit(unit)) => self.x = unit,
            ("y", AttrValue::Unit(unit)) => self.y = unit,
            ("width", AttrValue::Unit(unit)) => self.width = unit,
            ("height", AttrValue::Unit(unit)) => self.height = unit,
            ("text_size", AttrValue::Unit(unit)) => self.text_size = unit,
            ("x" | "y" | "width" | "height" | "text_size", _) => return Err(mismatch("a unit")),

            ("color", AttrValue::Color(color)) => self.color = color,
            ("text_color", AttrValue::Color(color)) => self.text_color = color,
            ("color" | "text_color", _) => return Err(mismatch("a color")),

            ("text", AttrValue::Text(text)) => self.text = text.trim().to_owned(),
            ("text", _) => return Err(mismatch("text")),

            ("centered", AttrValue::Flag(flag)) => self.centered = flag,
            ("hidden", AttrValue::Flag(flag)) => self.hidden = flag,
            ("cascade_hidden", AttrValue::Flag(flag)) => self.cascade_hidden = flag,
            ("centered" | "hidden" | "cascade_hidden", _) => return Err(mismatch("a flag")),

            (unknown, _) => {
                return Err(UiError::UnknownAttribute {
                    component: self.name.clone(),
                    attribute: unknown.to_owned(),
                })
            }
        }
        Ok(())
    }

    /// The component's name, unique within its container scope only.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent id, if the component has been attached.
    #[must_use]
    pub fn parent(&self) -> Option<ComponentId> {
        self.parent
    }

    /// Whether the component is skipped by render.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the paint surface must be redrawn before the next blit.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Whether the component positions itself relative to its frame's center.
    #[must_use]
    pub fn is_centered(&self) -> bool {
        self.centered
    }

    /// The text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The background color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The behavior payload.
    #[must_use]
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Mutable access to the behavior payload.
    pub fn behavior_mut(&mut self) -> &mut Behavior {
        &mut self.behavior
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> [Unit; 4] {
        [Unit::px(0.0), Unit::px(0.0), Unit::px(100.0), Unit::px(40.0)]
    }

    #[test]
    fn configure_applies_known_attributes() {
        let component = Component::new("label", rect())
            .configure([
                ("centered", AttrValue::Flag(true)),
                ("text", AttrValue::Text("  PLAY  ".to_owned())),
                ("color", AttrValue::Color(Color::WHITE)),
                ("width", AttrValue::Unit(Unit::pw(80.0))),
            ])
            .expect("all attributes are valid");

        assert!(component.is_centered());
        assert_eq!(component.text(), "PLAY");
        assert_eq!(component.color(), Color::WHITE);
        assert_eq!(component.width, Unit::pw(80.0));
    }

    #[test]
    fn configure_rejects_unknown_attribute() {
        let err = Component::new("label", rect())
            .configure([("opacity", AttrValue::Flag(true))])
            .expect_err("opacity is not an attribute");

        assert_eq!(
            err,
            UiError::UnknownAttribute {
                component: "label".to_owned(),
                attribute: "opacity".to_owned(),
            }
        );
    }

    #[test]
    fn configure_rejects_mismatched_value() {
        let err = Component::new("label", rect())
            .configure([("x", AttrValue::Flag(true))])
            .expect_err("x takes a unit");

        assert_eq!(
            err,
            UiError::AttributeValue {
                component: "label".to_owned(),
                attribute: "x".to_owned(),
                expected: "a unit",
            }
        );
    }

    #[test]
    fn text_size_defaults_to_height() {
        let component = Component::new("label", rect());
        assert_eq!(component.text_size, Unit::px(40.0));
    }
}
