//! Sideral Launch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

    use sideral_launch::persistence::{KeyValueStore, LocalStorage, MemoryStore};
    use sideral_launch::platform::{FrameClock, InputLatch, InputSignal};
    use sideral_launch::renderer::canvas::CanvasSurface;
    use sideral_launch::renderer::draw_ship_preview;
    use sideral_launch::stats::{FormattedReport, StatsSink};
    use sideral_launch::{Session, Settings, Tuning, WorldVariant};

    /// HUD elements looked up by id
    struct DomStats {
        document: Document,
    }

    impl DomStats {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_hidden(&self, id: &str, hidden: bool) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let classes = el.class_list();
                let result = if hidden {
                    classes.add_1("hidden")
                } else {
                    classes.remove_1("hidden")
                };
                if let Err(e) = result {
                    log::warn!("Could not toggle #{}: {:?}", id, e);
                }
            }
        }
    }

    impl StatsSink for DomStats {
        fn distance(&mut self, text: &str) {
            self.set_text("score", text);
        }

        fn total_coins(&mut self, text: &str) {
            self.set_text("total-coins", text);
        }

        fn flight_report(&mut self, report: &FormattedReport) {
            self.set_text("final-distance", &report.distance);
            self.set_text("coins-earned", &report.coins_earned);
            self.set_text("max-altitude", &report.max_altitude);
            self.set_text("max-speed", &report.max_speed);
            self.set_text("flight-time", &report.duration);
        }

        fn instructions_visible(&mut self, visible: bool) {
            self.set_hidden("instructions", !visible);
        }

        fn game_over_visible(&mut self, visible: bool) {
            self.set_hidden("game-over", !visible);
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        surface: CanvasSurface,
        stats: DomStats,
        clock: FrameClock,
        input: InputLatch,
    }

    impl Game {
        fn frame(&mut self, time: f64) {
            let dt = self.clock.frame_dt(time);
            for _ in 0..self.clock.ticks_for(dt) {
                let input = self.input.take();
                self.session.tick(&input, sideral_launch::consts::SIM_DT, &mut self.stats);
            }
            self.session.render(&mut self.surface);
        }
    }

    fn open_store() -> Box<dyn KeyValueStore> {
        match LocalStorage::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("LocalStorage unavailable ({}), coins will not persist", e);
                Box::new(MemoryStore::new())
            }
        }
    }

    /// Decoded value of `key` in the page query string
    fn query_param(window: &web_sys::Window, key: &str) -> Option<String> {
        let search = window.location().search().ok()?;
        let value = search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)?
            .1;
        js_sys::decode_uri_component(value).ok().map(String::from)
    }

    /// `?tuning={"gravity":0.3}` patches the variant's constants for this page load
    fn tuning_from_query(window: &web_sys::Window, base: Tuning) -> Tuning {
        let Some(json) = query_param(window, "tuning") else {
            return base;
        };
        match base.with_overrides(&json) {
            Ok(tuning) => {
                log::info!("Tuning overrides applied: {}", json);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning overrides ({}): {}", e, json);
                base
            }
        }
    }

    fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }

    fn canvas_by_id(document: &Document, id: &str) -> Result<HtmlCanvasElement, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no #{} element", id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(JsValue::from)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("logger init failed: {}", e)));
        }

        log::info!("Sideral Launch starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let mut store = open_store();
        let mut settings = Settings::load(store.as_ref());
        // `?world=classic` or `?world=sideral` switches (and remembers) the variant
        if let Some(variant) = query_param(&window, "world").and_then(|v| WorldVariant::from_str(&v)) {
            if variant != settings.variant {
                settings.variant = variant;
                settings.save(store.as_mut());
            }
        }
        let seed = js_sys::Date::now() as u64;
        let tuning = tuning_from_query(&window, settings.tuning());
        let session = Session::with_tuning(store, &settings, tuning, seed);

        let canvas = canvas_by_id(&document, "game-canvas")?;
        let viewport = session.state().tuning.viewport;
        canvas.set_width(viewport.x as u32);
        canvas.set_height(viewport.y as u32);

        // Static hangar preview, drawn once
        if let Ok(preview) = canvas_by_id(&document, "ship-preview-canvas") {
            let center = glam::Vec2::new(preview.width() as f32, preview.height() as f32) / 2.0;
            let mut surface = CanvasSurface::new(context_2d(&preview)?);
            draw_ship_preview(&mut surface, center, session.state().tuning.ship_size);
        }

        let mut stats = DomStats { document };
        session.sync(&mut stats);

        let game = Rc::new(RefCell::new(Game {
            session,
            surface: CanvasSurface::new(context_2d(&canvas)?),
            stats,
            clock: FrameClock::new(),
            input: InputLatch::new(),
        }));

        setup_input_handlers(&canvas, game.clone())?;
        setup_restart_button(game.clone())?;
        request_animation_frame(game);

        log::info!("Sideral Launch running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        for event_type in ["mousedown", "mouseup", "touchstart", "touchend"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                if let Some(signal) = InputSignal::from_event_type(&event.type_()) {
                    event.prevent_default();
                    game.borrow_mut().input.signal(signal);
                }
            });
            canvas.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Ok(());
        };
        let Some(btn) = document.get_element_by_id("restart-button") else {
            log::warn!("No restart button found");
            return Ok(());
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            event.prevent_default();
            game.borrow_mut().input.signal(InputSignal::Restart);
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sideral_launch::consts::SIM_DT;
    use sideral_launch::persistence::MemoryStore;
    use sideral_launch::sim::{GamePhase, TickInput};
    use sideral_launch::stats::LogStats;
    use sideral_launch::{Session, Settings, WorldVariant};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Sideral Launch (native) starting...");
    log::info!("Native mode runs a headless scripted flight - build for wasm32 to play");

    // Optional args: world variant, charge ticks, JSON tuning overrides
    let mut args = std::env::args().skip(1);
    let variant = args
        .next()
        .and_then(|s| WorldVariant::from_str(&s))
        .unwrap_or_default();
    let charge_ticks: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(40);

    let settings = Settings::for_variant(variant);
    let mut tuning = settings.tuning();
    if let Some(json) = args.next() {
        match tuning.with_overrides(&json) {
            Ok(t) => tuning = t,
            Err(e) => log::warn!("Ignoring tuning overrides ({}): {}", e, json),
        }
    }

    let mut session = Session::with_tuning(Box::new(MemoryStore::new()), &settings, tuning, 1);
    let mut stats = LogStats::default();
    session.sync(&mut stats);

    let press = TickInput {
        press: true,
        ..Default::default()
    };
    let release = TickInput {
        release: true,
        ..Default::default()
    };

    session.tick(&press, SIM_DT, &mut stats);
    for _ in 0..charge_ticks {
        session.tick(&TickInput::default(), SIM_DT, &mut stats);
    }
    session.tick(&release, SIM_DT, &mut stats);

    // Ten simulated minutes is far more than any flight needs
    let mut ticks = 0;
    while session.state().phase != GamePhase::GameOver && ticks < 36_000 {
        session.tick(&TickInput::default(), SIM_DT, &mut stats);
        ticks += 1;
    }

    if session.state().phase != GamePhase::GameOver {
        log::warn!("Flight did not come to rest after {} ticks", ticks);
    }
}
