//! The scrollable map browser screen.

use std::sync::mpsc::Sender;

use tracing::debug;

use cadenza_ui::{
    AttrValue, Behavior, BrowserItem, BrowserState, Color, Component, ComponentId, ComponentTree,
    PointerState, Renderer, Unit,
};

use crate::request::Request;
use crate::view::{InputEvent, Key, View, ViewId};

const TICK_SOUND: &str = "assets/menu_tick.ogg";
const SELECT_SOUND: &str = "assets/menu_select.ogg";

/// Map browser: a windowed list over the map catalog plus a return button.
pub struct MapSelectView<R: Renderer> {
    tree: ComponentTree<R>,
    browser: ComponentId,
    requests: Sender<Request>,
}

impl<R: Renderer> MapSelectView<R> {
    /// Builds the browser layout and binds the given catalog entries.
    #[must_use]
    pub fn new(viewport: (f32, f32), items: Vec<BrowserItem>, requests: Sender<Request>) -> Self {
        let mut tree = ComponentTree::new(viewport);

        // The return bar hugs the bottom edge, full width.
        let mut bar = Component::button(
            "button_return",
            [Unit::ZERO, Unit::vh(90.0), Unit::vw(100.0), Unit::vh(10.0)],
        );
        bar.set_attr("text", AttrValue::Text("RETURN".to_owned())).ok();
        bar.set_attr("text_color", AttrValue::Color(Color::WHITE)).ok();
        let return_button = tree.insert(bar);

        let mut index = Component::browser(
            "map_index",
            [Unit::ZERO, Unit::vh(-5.0), Unit::vw(60.0), Unit::vh(90.0)],
            BrowserState::new(),
        );
        index.set_attr("centered", AttrValue::Flag(true)).ok();
        let browser = tree.insert(index);
        tree.set_browser_items(browser, items);

        let sender = requests.clone();
        tree.set_browser_activation(browser, move |item: BrowserItem| {
            let _ = sender.send(Request::PlaySound(item.media_ref));
        });

        let sender = requests.clone();
        if let Some(Behavior::Button(state)) = tree.behavior_mut(return_button) {
            state.on_click.set(move || Self::request_return(&sender));
        }

        Self { tree, browser, requests }
    }

    fn request_return(sender: &Sender<Request>) {
        let _ = sender.send(Request::PlaySound(SELECT_SOUND.to_owned()));
        let _ = sender.send(Request::ChangeView(ViewId::MainMenu));
    }

    fn tick_and<F: FnOnce(&mut ComponentTree<R>, ComponentId)>(&mut self, navigate: F) {
        let _ = self.requests.send(Request::PlaySound(TICK_SOUND.to_owned()));
        navigate(&mut self.tree, self.browser);
    }

    /// The map under the selection, if the catalog is non-empty.
    #[must_use]
    pub fn selected_map(&self) -> Option<&BrowserItem> {
        self.tree.browser_selected(self.browser)
    }
}

impl<R: Renderer> View<R> for MapSelectView<R> {
    fn handle_input(&mut self, events: &[InputEvent]) {
        for event in events {
            match event {
                InputEvent::Quit => {
                    let _ = self.requests.send(Request::Quit);
                }
                InputEvent::Key(Key::Up) | InputEvent::KnobCcw => {
                    self.tick_and(|tree, browser| tree.select_previous(browser, true));
                }
                InputEvent::Key(Key::Down) | InputEvent::KnobCw => {
                    self.tick_and(|tree, browser| tree.select_next(browser, true));
                }
                InputEvent::Key(Key::Return) => {
                    let _ = self.requests.send(Request::PlaySound(SELECT_SOUND.to_owned()));
                    self.tree.select_enter(self.browser);
                }
                InputEvent::Key(Key::Escape) => Self::request_return(&self.requests),
                InputEvent::Key(Key::P | Key::S | Key::Q) => {}
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
        debug!(maps = self.tree.children(self.browser).len(), "map browser active");
    }
}
