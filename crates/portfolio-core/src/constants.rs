// Shared visual tuning constants for the background layers and cursor.

// Starfield
pub const STAR_COUNT: usize = 200;
pub const STAR_RADIUS_MIN: f32 = 0.5;
pub const STAR_RADIUS_SPAN: f32 = 2.0;
pub const STAR_SPEED_MIN: f32 = 0.1;
pub const STAR_SPEED_SPAN: f32 = 0.5;
pub const STAR_OPACITY_MIN: f32 = 0.2;
pub const STAR_OPACITY_SPAN: f32 = 0.8;
pub const STAR_CYAN_PROBABILITY: f64 = 0.3;
pub const STAR_GLOW_PER_RADIUS: f32 = 2.0; // shadow blur = radius * this

// Twinkle = sin(t + x * phase) * amplitude + bias, stays within [0.4, 1.0]
pub const TWINKLE_PHASE_PER_PX: f32 = 0.01;
pub const TWINKLE_AMPLITUDE: f32 = 0.3;
pub const TWINKLE_BIAS: f32 = 0.7;

// Nebula gradient stops
pub const NEBULA_MID_STOP: f32 = 0.5;
pub const NEBULA_MID_ALPHA: f32 = 0.05;

// Scroll
pub const SCROLL_SETTLE_MS: f64 = 150.0; // scrolling flag clears after this much quiet

// Cursor
pub const CURSOR_OUTER_IDLE: f32 = 45.0;
pub const CURSOR_OUTER_HOVER: f32 = 70.0;
pub const CURSOR_INNER_IDLE: f32 = 10.0;
pub const CURSOR_INNER_HOVER: f32 = 14.0;
pub const CURSOR_FOLLOW_STIFFNESS: f32 = 300.0;
pub const CURSOR_FOLLOW_DAMPING: f32 = 20.0;
pub const CURSOR_SIZE_STIFFNESS: f32 = 200.0;
pub const CURSOR_SIZE_DAMPING: f32 = 15.0;
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_DT_SEC: f32 = 0.1; // long stalls (hidden tab) are clamped

// Planets
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const PLANET_MOBILE_PARALLAX: f32 = 0.3;
pub const PLANET_MOBILE_SCALE: f32 = 0.6;
pub const PLANET_ROTATION_PER_PX: f32 = 0.1; // degrees per scrolled pixel
pub const PLANET_VISIBLE_OPACITY: f32 = 1.0;
pub const PLANET_HIDDEN_OPACITY: f32 = 0.3;
