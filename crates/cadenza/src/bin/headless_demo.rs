//! Scripted run of the front end against the recording renderer.
//!
//! Loads the user config and map catalog (falling back to a built-in sample
//! set when the map directory is empty or unreadable), then drives a short
//! scripted session: browse the menu, open the map browser, scroll with the
//! knob, pick a map, return, and quit.

use tracing::{info, warn};

use cadenza::{App, Config, InputEvent, Key, MapCatalog};
use cadenza_ui::{BrowserItem, HeadlessRenderer, PointerState, Renderer};

const FRAME_MS: f32 = 16.7;
const MAX_FRAMES: usize = 600;

fn sample_items() -> Vec<BrowserItem> {
    ["Moonlight Drive", "Static Bloom", "Afterglow"]
        .iter()
        .enumerate()
        .map(|(i, title)| BrowserItem {
            title: (*title).to_owned(),
            author: "Demo".to_owned(),
            media_ref: format!("maps/demo_{i}.smm"),
        })
        .collect()
}

fn load_maps() -> Vec<BrowserItem> {
    let config = Config::load();
    let mut catalog = MapCatalog::new(config.map_dir);
    match catalog.load_available() {
        Ok(maps) if !maps.is_empty() => catalog.browser_items(),
        Ok(_) => {
            info!("map directory is empty, using the sample set");
            sample_items()
        }
        Err(error) => {
            warn!(%error, "map catalog unavailable, using the sample set");
            sample_items()
        }
    }
}

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let mut app: App<HeadlessRenderer> = App::new(load_maps());
    let mut renderer = HeadlessRenderer::new();
    let mut screen = renderer.create_surface(cadenza::app::WINDOW_WIDTH, cadenza::app::WINDOW_HEIGHT);

    // (frame, events) pairs; frames in between run with no input.
    let script: [(usize, &[InputEvent]); 7] = [
        (5, &[InputEvent::Key(Key::Down)]),
        (10, &[InputEvent::Key(Key::Up)]),
        (15, &[InputEvent::Key(Key::Return)]),
        (25, &[InputEvent::KnobCw, InputEvent::KnobCw]),
        (35, &[InputEvent::Key(Key::Return)]),
        (45, &[InputEvent::Key(Key::Escape)]),
        (60, &[InputEvent::Key(Key::Q)]),
    ];

    let mut frame = 0;
    while app.is_running() && frame < MAX_FRAMES {
        let events = script
            .iter()
            .find(|(at, _)| *at == frame)
            .map_or(&[][..], |(_, events)| *events);

        renderer.begin_frame();
        app.frame(FRAME_MS, events, PointerState::default(), &mut renderer, &mut screen);
        frame += 1;
    }

    info!(
        frames = frame,
        fills = renderer.fill_count,
        texts = renderer.text_count,
        "session finished"
    );
}
