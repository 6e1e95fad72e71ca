//! The three-button main menu.

use std::sync::mpsc::Sender;

use tracing::debug;

use cadenza_ui::{
    AttrValue, Behavior, Color, Component, ComponentId, ComponentTree, PointerState, Renderer,
    Unit,
};

use crate::request::Request;
use crate::view::{InputEvent, Key, View, ViewId};

/// Main menu: a centered selectable list of PLAY / SETTINGS / QUIT.
pub struct MainMenuView<R: Renderer> {
    tree: ComponentTree<R>,
    menu: ComponentId,
    requests: Sender<Request>,
}

impl<R: Renderer> MainMenuView<R> {
    /// Builds the menu layout for the given viewport.
    ///
    /// The layout mirrors the shipped screen: the list is centered, each
    /// button is 80% of the list width and 10% of the viewport height,
    /// stacked 15% apart.
    #[must_use]
    pub fn new(viewport: (f32, f32), requests: Sender<Request>) -> Self {
        let mut tree = ComponentTree::new(viewport);

        let mut container = Component::list(
            "menu_container",
            [Unit::vw(15.0), Unit::ZERO, Unit::vh(70.0), Unit::vh(50.0)],
        );
        container.set_attr("centered", AttrValue::Flag(true)).ok();
        let menu = tree.insert(container);

        let entries = [
            ("button_play", "PLAY", -15.0),
            ("button_settings", "SETTINGS", 0.0),
            ("button_quit", "QUIT", 15.0),
        ];

        for (name, label, y_offset) in entries {
            let mut button = Component::button(
                name,
                [Unit::ZERO, Unit::vh(y_offset), Unit::pw(80.0), Unit::vh(10.0)],
            );
            button.set_attr("centered", AttrValue::Flag(true)).ok();
            button.set_attr("color", AttrValue::Color(Color::WHITE)).ok();
            button.set_attr("text", AttrValue::Text(label.to_owned())).ok();
            let _ = tree.add_child(menu, button);
        }

        let mut view = Self { tree, menu, requests };
        view.wire_callbacks();
        view
    }

    fn wire_callbacks(&mut self) {
        let bindings: [(&str, fn(&Sender<Request>)); 3] = [
            ("button_play", Self::request_play),
            ("button_settings", Self::request_settings),
            ("button_quit", Self::request_quit),
        ];

        for (name, action) in bindings {
            let Ok(button) = self.tree.lookup(self.menu, name) else { continue };
            let sender = self.requests.clone();
            if let Some(Behavior::Button(state)) = self.tree.behavior_mut(button) {
                state.on_click.set(move || action(&sender));
            }
        }
    }

    fn request_play(sender: &Sender<Request>) {
        let _ = sender.send(Request::ChangeView(ViewId::MapSelect));
    }

    fn request_settings(sender: &Sender<Request>) {
        // The settings screen is transition-only until it ships.
        let _ = sender.send(Request::TransitionOut { duration_ms: 200 });
        let _ = sender.send(Request::TransitionIn { duration_ms: 200 });
    }

    fn request_quit(sender: &Sender<Request>) {
        let _ = sender.send(Request::TransitionOut { duration_ms: 750 });
        let _ = sender.send(Request::Quit);
    }

    /// The menu's selected entry index, for tests and debug overlays.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.tree.selected_index(self.menu)
    }
}

impl<R: Renderer> View<R> for MainMenuView<R> {
    fn handle_input(&mut self, events: &[InputEvent]) {
        for event in events {
            match event {
                InputEvent::Quit => {
                    let _ = self.requests.send(Request::Quit);
                }
                InputEvent::Key(Key::Up) | InputEvent::KnobCcw => {
                    self.tree.select_previous(self.menu, true);
                }
                InputEvent::Key(Key::Down) | InputEvent::KnobCw => {
                    self.tree.select_next(self.menu, true);
                }
                InputEvent::Key(Key::Return) => self.tree.select_enter(self.menu),
                InputEvent::Key(Key::P) => Self::request_play(&self.requests),
                InputEvent::Key(Key::S) => Self::request_settings(&self.requests),
                InputEvent::Key(Key::Q) => Self::request_quit(&self.requests),
                InputEvent::Key(Key::Escape) => {}
            }
        }
    }

    fn update(&mut self, dt_ms: f32, pointer: PointerState) {
        self.tree.update(dt_ms, pointer);
    }

    fn render(&mut self, renderer: &mut R, screen: &mut R::Surface) {
        self.tree.render(renderer, screen);
    }

    fn on_resize(&mut self, width: f32, height: f32) {
        self.tree.set_viewport(width, height);
    }

    fn prepare(&mut self) {
        debug!("main menu active");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadenza_ui::HeadlessRenderer;
    use std::sync::mpsc;

    fn menu() -> (MainMenuView<HeadlessRenderer>, mpsc::Receiver<Request>) {
        let (tx, rx) = mpsc::channel();
        (MainMenuView::new((1600.0, 900.0), tx), rx)
    }

    #[test]
    fn navigation_wraps_over_three_entries() {
        let (mut view, _rx) = menu();
        assert_eq!(view.selected_index(), Some(0));

        view.handle_input(&[InputEvent::Key(Key::Up)]);
        assert_eq!(view.selected_index(), Some(2));

        view.handle_input(&[InputEvent::Key(Key::Down), InputEvent::Key(Key::Down)]);
        assert_eq!(view.selected_index(), Some(1));
    }

    #[test]
    fn entering_play_requests_the_map_browser() {
        let (mut view, rx) = menu();
        view.handle_input(&[InputEvent::Key(Key::Return)]);
        assert_eq!(rx.try_recv(), Ok(Request::ChangeView(ViewId::MapSelect)));
    }

    #[test]
    fn quit_shortcut_schedules_transition_then_quit() {
        let (mut view, rx) = menu();
        view.handle_input(&[InputEvent::Key(Key::Q)]);
        assert_eq!(rx.try_recv(), Ok(Request::TransitionOut { duration_ms: 750 }));
        assert_eq!(rx.try_recv(), Ok(Request::Quit));
    }

    #[test]
    fn knob_events_navigate_like_arrows() {
        let (mut view, _rx) = menu();
        view.handle_input(&[InputEvent::KnobCw]);
        assert_eq!(view.selected_index(), Some(1));
        view.handle_input(&[InputEvent::KnobCcw]);
        assert_eq!(view.selected_index(), Some(0));
    }
}
