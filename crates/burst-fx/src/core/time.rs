/// Animation clock value in milliseconds. Wraps at 2^32.
pub type Millis = u32;

/// Signed distance from `start` to `now`, tolerant of a `u32` wraparound
/// between the two. Negative while `now` is still before `start`.
///
/// Valid as long as the two timestamps are less than 2^31 ms apart.
#[inline]
pub fn elapsed_since(now: Millis, start: Millis) -> i64 {
    now.wrapping_sub(start) as i32 as i64
}

/// Elapsed time of a window `[start, start + duration)`, clamped to `[0, duration]`.
#[inline]
pub fn clamp_elapsed(now: Millis, start: Millis, duration: Millis) -> Millis {
    elapsed_since(now, start).clamp(0, duration as i64) as Millis
}

/// True once `now` has reached `start + duration`.
#[inline]
pub fn window_elapsed(now: Millis, start: Millis, duration: Millis) -> bool {
    elapsed_since(now, start) >= duration as i64
}

/// Millisecond animation clock driven by per-frame deltas.
/// For hosts that report frame time in seconds instead of a timestamp.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    now: Millis,
    /// Sub-millisecond remainder carried into the next frame.
    remainder: f32,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at an arbitrary timestamp.
    pub fn starting_at(now: Millis) -> Self {
        Self { now, remainder: 0.0 }
    }

    /// Advance by `frame_dt` seconds. Returns the new timestamp.
    /// Negative or non-finite deltas are ignored so the clock stays monotonic.
    pub fn advance(&mut self, frame_dt: f32) -> Millis {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return self.now;
        }
        let total = frame_dt * 1000.0 + self.remainder;
        let whole = total.floor();
        self.remainder = total - whole;
        self.now = self.now.wrapping_add(whole as u64 as Millis);
        self.now
    }

    pub fn now(&self) -> Millis {
        self.now
    }
}
