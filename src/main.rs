//! Moon Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use moon_runner::Settings;
    use moon_runner::assets::{AssetManifest, AssetRegistry};
    use moon_runner::consts::SIM_DT;
    use moon_runner::input::{InputEvent, Key};
    use moon_runner::renderer::{CanvasPainter, DrawList};
    use moon_runner::scene::{RunnerScene, Scene, SceneEngine};

    /// Game instance holding all state
    struct Game {
        engine: SceneEngine,
        painter: CanvasPainter,
        draw_list: DrawList,
        last_time: f64,
        show_fps: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn update(&mut self, dt: f32, time: f64) {
            if let Err(e) = self.engine.frame(dt) {
                log::error!("Scene reload failed: {}", e);
            }

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        fn render(&mut self) {
            self.engine.render(&mut self.draw_list);
            self.painter.paint(&self.draw_list);
        }

        fn update_hud(&self) {
            if !self.show_fps {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.fps.to_string()));
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Moon Runner starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let dpr = window.device_pixel_ratio();
        canvas.set_width((canvas.client_width() as f64 * dpr) as u32);
        canvas.set_height((canvas.client_height() as f64 * dpr) as u32);

        let settings = Settings::load();
        let manifest = AssetManifest::builtin().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let registry = AssetRegistry::from_manifest(&manifest);

        let mut painter = CanvasPainter::new(&canvas)
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?;
        painter.load_images(&registry);

        let show_fps = settings.show_fps;
        let mut engine = SceneEngine::new();
        engine
            .next(move || {
                let seed = js_sys::Date::now() as u64;
                log::info!("New run with seed: {}", seed);
                Box::new(RunnerScene::new(settings.clone(), registry.clone(), seed)) as Box<dyn Scene>
            })
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Rc::new(RefCell::new(Game {
            engine,
            painter,
            draw_list: DrawList::new(),
            last_time: 0.0,
            show_fps,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }));

        setup_input_handlers(&window, game.clone());
        request_animation_frame(game);

        log::info!("Moon Runner running!");
        Ok(())
    }

    /// Translate DOM key events into queued input events
    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        for (kind, down) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_dom(&event.key(), &event.code()) else {
                    return;
                };
                // Keep space and arrows from scrolling the page
                event.prevent_default();
                let input = if down {
                    InputEvent::KeyDown(key)
                } else {
                    InputEvent::KeyUp(key)
                };
                game.borrow_mut().engine.push_input(input);
            });
            let _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

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
    env_logger::init();
    log::info!("Moon Runner (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    if let Err(e) = headless::run() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Plays one scripted run without a window: start, jump on a timer, report
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use moon_runner::Settings;
    use moon_runner::assets::{AssetManifest, AssetRegistry};
    use moon_runner::consts::SIM_DT;
    use moon_runner::input::{InputEvent, Key};
    use moon_runner::renderer::DrawList;
    use moon_runner::scene::{RunnerScene, Scene, SceneEngine};

    /// Simulated seconds
    const DEMO_SECONDS: u32 = 30;
    /// Press jump every this many frames
    const JUMP_EVERY: u32 = 90;

    pub fn run() -> moon_runner::Result<()> {
        let settings = Settings::load();
        let registry = AssetRegistry::from_manifest(&AssetManifest::builtin()?);
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        log::info!("Seed: {}", seed);

        let mut engine = SceneEngine::new();
        engine.next(move || {
            Box::new(RunnerScene::new(settings.clone(), registry.clone(), seed)) as Box<dyn Scene>
        })?;

        let mut draw_list = DrawList::new();
        let mut ticks = 0;
        for frame in 0..DEMO_SECONDS * 60 {
            if frame % JUMP_EVERY == 0 {
                engine.push_input(InputEvent::KeyDown(Key::Jump));
                engine.push_input(InputEvent::KeyUp(Key::Jump));
            }
            ticks += engine.frame(SIM_DT)?;
        }
        engine.render(&mut draw_list);
        log::info!(
            "Demo finished: {} ticks, {} draw commands in the last frame",
            ticks,
            draw_list.len()
        );
        Ok(())
    }
}
