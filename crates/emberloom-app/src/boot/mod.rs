//! Boot sequence manager.
//!
//! Holds the splash screen for its configured duration before the game
//! screen, and with it the web resource loader, is created.

mod sequence;
mod types;

pub use sequence::BootSequence;
pub use types::BootPhase;
