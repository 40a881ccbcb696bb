use log::Level;

/// How long each gallery slide stays up before the carousel advances.
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;

/// Vertical scroll (px) after which the navbar switches to its frosted style.
pub const NAV_SCROLL_THRESHOLD: f64 = 10.0;

/// Margin applied to the viewport when deciding that a section has come into view.
pub const REVEAL_ROOT_MARGIN: &str = "-100px";

pub const FADE_DISTANCE_PX: u32 = 20;
pub const CARD_FADE_DISTANCE_PX: u32 = 10;

/// Delay added per item when a list of cards fades in one after another.
pub const STAGGER_STEP_SECS: f64 = 0.05;

pub const HERO_PARTICLE_COUNT: usize = 28;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
