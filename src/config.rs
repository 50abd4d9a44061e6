use log::Level;

/// Fraction of a block that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Delay before the hero entrance animation starts.
pub const HERO_LOAD_DELAY_MS: u32 = 100;

pub const CONTACT_EMAIL: &str = "bonjour@laloge-beaute.com";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
