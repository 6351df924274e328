//! Reduced-motion capability check.
//!
//! All animated components consult a single [`MotionPreference`] instead of
//! each re-querying the environment. The preference is resolved once at
//! construction: an explicit override wins, otherwise the
//! `SPARKDECK_REDUCED_MOTION` environment variable is consulted
//! (`1`/`true`/`yes` enable it). At runtime the preference can be flipped
//! through [`MotionController`](crate::controllers::MotionController).

/// Environment variable consulted when no explicit override is set.
pub const REDUCED_MOTION_ENV: &str = "SPARKDECK_REDUCED_MOTION";

/// Resolved motion preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionPreference {
    reduced: bool,
}

impl MotionPreference {
    /// Resolve from the environment.
    pub fn from_env() -> Self {
        let reduced = std::env::var(REDUCED_MOTION_ENV)
            .map(|v| {
                let v = v.trim().to_ascii_lowercase();
                v == "1" || v == "true" || v == "yes"
            })
            .unwrap_or(false);
        Self { reduced }
    }

    /// Explicitly request full motion.
    pub fn full() -> Self {
        Self { reduced: false }
    }

    /// Explicitly request reduced motion: animations snap to their final
    /// value and decorative simulations do not start.
    pub fn reduced() -> Self {
        Self { reduced: true }
    }

    /// Whether non-essential animation should be suppressed.
    pub fn is_reduced(self) -> bool {
        self.reduced
    }
}

impl Default for MotionPreference {
    fn default() -> Self {
        Self::from_env()
    }
}
