/// Tracks the temporary "copied" label on the copy button.
///
/// Each successful copy starts a new pulse. Only the timer of the most recent
/// pulse may restore the idle label, so rapid repeated copies keep the
/// confirmation visible for the full duration after the last one.
#[derive(Debug, Default)]
pub struct FeedbackPulse {
    generation: u64,
}

impl FeedbackPulse {
    /// Start a pulse and return its token for the revert timer.
    pub fn begin(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Whether the pulse identified by `token` is still the latest one.
    pub fn should_revert(&self, token: u64) -> bool {
        self.generation == token
    }
}
