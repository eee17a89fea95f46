//! Splash timing and the transition to the game screen.

use std::time::Instant;

use emberloom_config::schema::SplashConfig;

use super::types::BootPhase;

/// Manages the splash timing and phase transition.
#[derive(Debug)]
pub struct BootSequence {
    start_time: Instant,
    phase: BootPhase,
    splash_duration: f64,
    skip_on_key: bool,
}

impl BootSequence {
    /// Create a new boot sequence. A disabled splash starts in
    /// [`BootPhase::Ready`].
    pub fn new(config: &SplashConfig) -> Self {
        Self {
            start_time: Instant::now(),
            phase: if config.enabled {
                BootPhase::Splash
            } else {
                BootPhase::Ready
            },
            splash_duration: config.duration,
            skip_on_key: config.skip_on_key,
        }
    }

    /// End the splash immediately.
    pub fn skip(&mut self) {
        self.phase = BootPhase::Ready;
    }

    /// End the splash if key presses are allowed to skip it. Returns whether
    /// the phase changed.
    pub fn skip_by_key(&mut self) -> bool {
        if self.phase == BootPhase::Splash && self.skip_on_key {
            self.skip();
            return true;
        }
        false
    }

    /// Advance based on elapsed time.
    pub fn update(&mut self) {
        if self.phase == BootPhase::Splash
            && self.start_time.elapsed().as_secs_f64() >= self.splash_duration
        {
            self.phase = BootPhase::Ready;
        }
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == BootPhase::Ready
    }
}
