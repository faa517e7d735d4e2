//! Browser bridge for the burst-fx particle pool.
//!
//! JS calls `fx_init` once, `fx_add_batch` per visual event and `fx_frame`
//! (or `fx_tick`) once per animation frame, then reads
//! `get_instance_count()` sprite instances of `SpriteInstance::FLOATS` floats
//! each from wasm memory at `get_instances_ptr()`.

pub mod runner;

pub use runner::FxRunner;

use std::cell::RefCell;

use burst_fx::{FxConfig, ImageId, Millis, ParticleBatchSpec, Tint, Vec2};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<FxRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut FxRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("FX not initialized. Call fx_init() first.");
        f(runner)
    })
}

fn install(config: FxConfig) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("burst-fx: {} batch slots, {} instances", config.capacity, config.max_instances);
    let runner = FxRunner::new(config);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
}

/// Report a frame result to JS as a bool, logging the failure.
fn frame_ok(result: Result<(), burst_fx::DrawError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("burst-fx: frame failed: {}", e);
            false
        }
    }
}

#[wasm_bindgen]
pub fn fx_init(seed: u32) {
    install(FxConfig::default().with_seed(seed as u64));
}

#[wasm_bindgen]
pub fn fx_init_with_config(json: &str) {
    let config = FxConfig::from_json(json).unwrap_or_else(|e| {
        log::warn!("burst-fx: bad config ({}), using defaults", e);
        FxConfig::default()
    });
    install(config);
}

#[wasm_bindgen]
pub fn fx_register_images(count: u32) {
    with_runner(|r| r.register_images(count));
}

#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn fx_add_batch(
    x: f32,
    y: f32,
    center_angle: f32,
    spread_angle: f32,
    min_speed: f32,
    max_speed: f32,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
    start_ms: Millis,
    duration_ms: Millis,
    image: u32,
) {
    let spec = ParticleBatchSpec::new(ImageId(image), Vec2::new(x, y), start_ms, duration_ms)
        .with_direction(center_angle, spread_angle)
        .with_speed_range(min_speed, max_speed)
        .with_tint(Tint::rgba(r, g, b, a));
    with_runner(|runner| runner.add_batch(&spec));
}

/// Same as `fx_add_batch`, starting at the runner's own clock.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn fx_add_batch_now(
    x: f32,
    y: f32,
    center_angle: f32,
    spread_angle: f32,
    min_speed: f32,
    max_speed: f32,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
    duration_ms: Millis,
    image: u32,
) {
    let now = with_runner(|runner| runner.now());
    fx_add_batch(
        x, y, center_angle, spread_angle, min_speed, max_speed,
        r, g, b, a, now, duration_ms, image,
    );
}

#[wasm_bindgen]
pub fn fx_frame(now_ms: Millis) -> bool {
    with_runner(|r| frame_ok(r.frame(now_ms)))
}

#[wasm_bindgen]
pub fn fx_tick(dt: f32) -> bool {
    with_runner(|r| frame_ok(r.tick(dt)))
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_max_instances() -> u32 {
    with_runner(|r| r.max_instances())
}

#[wasm_bindgen]
pub fn get_batch_count() -> u32 {
    with_runner(|r| r.batch_count())
}
