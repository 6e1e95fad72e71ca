//! The frame driver: owns the views, the request queue, and the run flag.
//!
//! The host calls [`App::frame`] once per frame with that frame's decoded
//! input and a renderer/screen pair. Within a frame the order is fixed:
//! input, update, render, then request routing, so mutations made by input
//! and update are visible to the same frame's render, and queued requests
//! take effect no earlier than the frame they were scheduled for.

use std::sync::mpsc::{channel, Receiver, Sender};

use tracing::{debug, info, warn};

use cadenza_ui::{BrowserItem, PointerState, Renderer};

use crate::request::{Request, RequestQueue};
use crate::view::{InputEvent, MainMenuView, MapSelectView, View, ViewId};

/// Initial window width in pixels.
pub const WINDOW_WIDTH: f32 = 1600.0;
/// Initial window height in pixels.
pub const WINDOW_HEIGHT: f32 = 900.0;

/// Top-level application state.
pub struct App<R: Renderer> {
    main_menu: MainMenuView<R>,
    map_select: MapSelectView<R>,
    active: ViewId,
    queue: RequestQueue,
    incoming: Receiver<Request>,
    sender: Sender<Request>,
    viewport: (f32, f32),
    running: bool,
}

impl<R: Renderer> App<R> {
    /// Builds both views over the given map catalog entries and starts on
    /// the main menu.
    #[must_use]
    pub fn new(maps: Vec<BrowserItem>) -> Self {
        let (sender, incoming) = channel();
        let viewport = (WINDOW_WIDTH, WINDOW_HEIGHT);

        info!(maps = maps.len(), "starting front end");
        Self {
            main_menu: MainMenuView::new(viewport, sender.clone()),
            map_select: MapSelectView::new(viewport, maps, sender.clone()),
            active: ViewId::MainMenu,
            queue: RequestQueue::default(),
            incoming,
            sender,
            viewport,
            running: true,
        }
    }

    /// Whether the app should keep running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The currently active view.
    #[must_use]
    pub fn active_view(&self) -> ViewId {
        self.active
    }

    /// A handle for injecting requests from outside the views.
    #[must_use]
    pub fn request_sender(&self) -> Sender<Request> {
        self.sender.clone()
    }

    /// Runs one frame: input, update, render, then request processing.
    pub fn frame(
        &mut self,
        dt_ms: f32,
        events: &[InputEvent],
        pointer: PointerState,
        renderer: &mut R,
        screen: &mut R::Surface,
    ) {
        let view = match self.active {
            ViewId::MainMenu => &mut self.main_menu as &mut dyn View<R>,
            ViewId::MapSelect => &mut self.map_select,
        };
        view.handle_input(events);
        view.update(dt_ms, pointer);
        view.render(renderer, screen);

        while let Ok(request) = self.incoming.try_recv() {
            self.route(request);
        }
        if let Some(request) = self.queue.process(dt_ms) {
            self.apply(request);
        }
    }

    /// Applies a new window size to the active view.
    ///
    /// Inactive views catch up when they next become active.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        match self.active {
            ViewId::MainMenu => self.main_menu.on_resize(width, height),
            ViewId::MapSelect => self.map_select.on_resize(width, height),
        }
    }

    /// Transitions block the queue for their duration; everything else is
    /// scheduled immediately.
    fn route(&mut self, request: Request) {
        match request {
            Request::TransitionOut { duration_ms } | Request::TransitionIn { duration_ms } => {
                let result = self.queue.add_blocking(request, duration_ms);
                if let Err(error) = result {
                    warn!(%error, "transition request dropped");
                }
            }
            other => self.queue.add(other),
        }
    }

    fn apply(&mut self, request: Request) {
        match request {
            Request::ChangeView(id) => self.change_view(id),
            Request::Quit => {
                info!("quit requested");
                self.running = false;
            }
            // Audio and the fade animation are host-side collaborators; the
            // driver only sequences them.
            Request::PlaySound(media_ref) => debug!(%media_ref, "sound requested"),
            Request::TransitionIn { duration_ms } => debug!(duration_ms, "transition in"),
            Request::TransitionOut { duration_ms } => debug!(duration_ms, "transition out"),
        }
    }

    fn change_view(&mut self, id: ViewId) {
        if id == self.active {
            return;
        }
        debug!(?id, "changing view");
        self.active = id;

        let (width, height) = self.viewport;
        match id {
            ViewId::MainMenu => {
                self.main_menu.on_resize(width, height);
                self.main_menu.prepare();
            }
            ViewId::MapSelect => {
                self.map_select.on_resize(width, height);
                self.map_select.prepare();
            }
        }
    }
}
