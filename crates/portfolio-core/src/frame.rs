/// Timing handed to a [`RenderTick`] each animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Host timestamp in milliseconds (requestAnimationFrame time).
    pub now_ms: f64,
    /// Seconds since the previous frame, clamped to `[0, MAX_FRAME_DT_SEC]`.
    pub dt_sec: f32,
}

impl FrameTime {
    pub fn now_sec(&self) -> f64 {
        self.now_ms / 1000.0
    }
}

pub const MAX_FRAME_DT_SEC: f32 = 0.25;

/// Work done once per animation frame; the host decides when.
pub trait RenderTick {
    fn tick(&mut self, time: FrameTime);
}

/// Turns raw host timestamps into [`FrameTime`]s.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn advance(&mut self, now_ms: f64) -> FrameTime {
        let dt_sec = match self.last_ms {
            Some(prev) => (((now_ms - prev) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT_SEC),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        FrameTime { now_ms, dt_sec }
    }
}
