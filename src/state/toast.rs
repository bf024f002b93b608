//! Shared toast notification state.
//!
//! One message at a time, no queue. Each `show` bumps a generation
//! counter; the pending fade timeout only clears the message if its
//! generation still matches, so an overlapping `show` effectively resets
//! the timer.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays visible before fading.
pub const TOAST_FADE_MS: u64 = 2800;

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub message: Option<String>,
    pub generation: u64,
}

impl ToastState {
    /// Show a message, replacing any current one. Returns the generation
    /// the caller's fade timer should pass back to [`ToastState::clear`].
    pub fn show(&mut self, message: String) -> u64 {
        self.message = Some(message);
        self.generation += 1;
        self.generation
    }

    /// Clear the message, but only if no newer `show` has happened since.
    pub fn clear(&mut self, generation: u64) {
        if self.generation == generation {
            self.message = None;
        }
    }
}
