use std::cell::RefCell;

use hopbox_core::{draw_frame, Color, Config, Rect, Renderer, World};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

thread_local! {
    static WORLD: RefCell<Option<World>> = RefCell::new(None);
}

fn with_world<R>(f: impl FnOnce(&mut World) -> R) -> Option<R> {
    WORLD.with(|cell| cell.borrow_mut().as_mut().map(f))
}

struct Canvas<'a>(&'a CanvasRenderingContext2d);

impl Renderer for Canvas<'_> {
    fn clear(&mut self, width: f32, height: f32) {
        self.0.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.0.set_fill_style_str(&color.to_css());
        self.0.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }
}

/// Create the world. `config_json` may be empty; a bad config is logged and
/// the defaults are used instead.
#[wasm_bindgen]
pub fn hopbox_init(config_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = if config_json.trim().is_empty() {
        Config::default()
    } else {
        Config::from_json(config_json).unwrap_or_else(|err| {
            log::warn!("hopbox: {err}; using defaults");
            Config::default()
        })
    };

    WORLD.with(|cell| *cell.borrow_mut() = Some(World::new(config)));
    log::info!("hopbox: initialized");
}

/// `code` is `KeyboardEvent.code`. Keys other than the arrows and space are
/// ignored.
#[wasm_bindgen]
pub fn hopbox_key_down(code: &str) {
    with_world(|w| w.key_down(code));
}

#[wasm_bindgen]
pub fn hopbox_key_up(code: &str) {
    with_world(|w| w.key_up(code));
}

/// Run one tick and redraw. The page calls this from its
/// `requestAnimationFrame` callback.
#[wasm_bindgen]
pub fn hopbox_frame(ctx: &CanvasRenderingContext2d) {
    with_world(|w| {
        w.tick();
        draw_frame(&mut Canvas(ctx), w);
    });
}

/// Current entity as a JS object, for HUDs and debugging.
#[wasm_bindgen]
pub fn hopbox_entity() -> JsValue {
    let obj = js_sys::Object::new();
    with_world(|w| {
        let e = &w.entity;
        for (k, v) in [
            ("x", JsValue::from_f64(e.x as f64)),
            ("y", JsValue::from_f64(e.y as f64)),
            ("dx", JsValue::from_f64(e.dx as f64)),
            ("dy", JsValue::from_f64(e.dy as f64)),
            ("grounded", JsValue::from_bool(e.grounded)),
            ("frame", JsValue::from_f64(w.frame() as f64)),
        ] {
            js_sys::Reflect::set(&obj, &JsValue::from_str(k), &v).unwrap();
        }
    });
    JsValue::from(obj)
}
