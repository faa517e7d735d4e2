use burst_fx::{
    AnimationClock, DrawError, DrawList, FxConfig, ImageId, Millis,
    ParticleBatchPool, ParticleBatchSpec,
};

/// Owns the particle pool, its animation clock and the instance buffer the
/// browser renderer reads after every frame.
///
/// The `#[wasm_bindgen]` exports in `lib.rs` keep one runner in a
/// `thread_local!`, because wasm-bindgen cannot export generic structs.
pub struct FxRunner {
    pool: ParticleBatchPool,
    draw_list: DrawList,
    clock: AnimationClock,
    config: FxConfig,
}

impl FxRunner {
    pub fn new(config: FxConfig) -> Self {
        Self {
            pool: ParticleBatchPool::with_config(&config),
            draw_list: DrawList::with_capacity(config.max_instances),
            clock: AnimationClock::new(),
            config,
        }
    }

    /// Declare how many images the JS side has loaded. Ids `0..count` are valid.
    pub fn register_images(&mut self, count: u32) {
        self.draw_list.set_image_count(count);
    }

    pub fn add_batch(&mut self, spec: &ParticleBatchSpec<ImageId>) {
        self.pool.add_batch(spec);
    }

    /// Current value of the runner's own clock, for batches started "now".
    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    /// Render one frame at a host-supplied timestamp.
    /// On failure the instance buffer holds the draws recorded before the error.
    pub fn frame(&mut self, now: Millis) -> Result<(), DrawError> {
        self.draw_list.clear();
        self.pool.update_and_render(&mut self.draw_list, now)
    }

    /// Advance the runner clock by `dt` seconds and render at the new time.
    pub fn tick(&mut self, dt: f32) -> Result<(), DrawError> {
        let now = self.clock.advance(dt);
        self.frame(now)
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.draw_list.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.draw_list.instance_count()
    }

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }

    pub fn batch_count(&self) -> u32 {
        self.pool.len() as u32
    }
}
