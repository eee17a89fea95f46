/// Boot sequence phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    /// Splash screen shown, the game view does not exist yet.
    Splash,
    /// Splash finished; the game view may be created.
    Ready,
}
