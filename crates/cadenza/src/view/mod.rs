//! Screens of the front end.
//!
//! Each view owns its own component tree and talks back to the frame driver
//! exclusively through queued [`Request`](crate::request::Request)s, so a
//! button callback deep inside a tree never needs a reference to the app.

mod main_menu;
mod map_select;

pub use main_menu::MainMenuView;
pub use map_select::MapSelectView;

use cadenza_ui::{PointerState, Renderer};

/// Identifies a view for change-view requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    /// The three-button main menu.
    MainMenu,
    /// The scrollable map browser.
    MapSelect,
}

/// Keyboard keys the views react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Enter/confirm.
    Return,
    /// Escape/back.
    Escape,
    /// The `P` shortcut (play).
    P,
    /// The `S` shortcut (settings).
    S,
    /// The `Q` shortcut (quit).
    Q,
}

/// Input events delivered once per frame, already decoded by the host.
///
/// Knob events come from the external controller's protocol decoder; to the
/// views they are just another navigation source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was asked to close.
    Quit,
    /// A key went down this frame.
    Key(Key),
    /// The controller knob turned clockwise.
    KnobCw,
    /// The controller knob turned counter-clockwise.
    KnobCcw,
}

/// One screen: input handling, per-frame update/render, resize and
/// activation hooks.
pub trait View<R: Renderer> {
    /// Reacts to this frame's input events.
    fn handle_input(&mut self, events: &[InputEvent]);

    /// Advances the view's component tree.
    fn update(&mut self, dt_ms: f32, pointer: PointerState);

    /// Draws the view onto the screen surface.
    fn render(&mut self, renderer: &mut R, screen: &mut R::Surface);

    /// Applies a new window size.
    fn on_resize(&mut self, width: f32, height: f32);

    /// Called when the view becomes active.
    fn prepare(&mut self);
}
