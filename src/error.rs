//! Scene-specific error types.
//!
//! Configuration validation and the checked camera-fit helpers report
//! problems through [`SceneError`] instead of panicking, so a bad
//! `assets/scene.toml` degrades to compiled defaults.
//!
//! ## Usage
//!
//! ```rust
//! use scroll_gravity::error::{validate_fov, SceneResult};
//!
//! fn check(fov: f32) -> SceneResult<()> {
//!     validate_fov(fov)?;
//!     Ok(())
//! }
//! # assert!(check(75.0).is_ok());
//! ```

use std::fmt;

/// Top-level error enum for the scroll-gravity scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Field of view must lie strictly between 0° and 180°.
    InvalidFov {
        /// The rejected value, in degrees.
        degrees: f32,
    },

    /// A length, size or rate that must be strictly positive was not.
    NonPositive {
        /// Name of the offending value (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
    },

    /// Breakpoint widths must increase: `0 < tablet_min < desktop_min`.
    UnorderedBreakpoints { tablet_min: f32, desktop_min: f32 },

    /// The viewport has no area (e.g. a minimised window).
    DegenerateViewport { width: f32, height: f32 },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidFov { degrees } => write!(
                f,
                "field of view {}° is outside the open range (0°, 180°)",
                degrees
            ),
            SceneError::NonPositive { name, value } => {
                write!(f, "'{}' = {} must be greater than zero", name, value)
            }
            SceneError::UnorderedBreakpoints {
                tablet_min,
                desktop_min,
            } => write!(
                f,
                "breakpoints must satisfy 0 < tablet_min ({}) < desktop_min ({})",
                tablet_min, desktop_min
            ),
            SceneError::DegenerateViewport { width, height } => {
                write!(f, "viewport {}x{} has no drawable area", width, height)
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Convenience alias: a `Result` using `SceneError` as the error type.
pub type SceneResult<T> = Result<T, SceneError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `degrees` is in the open range (0, 180).
pub fn validate_fov(degrees: f32) -> SceneResult<()> {
    if degrees > 0.0 && degrees < 180.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidFov { degrees })
    }
}

/// Returns an error unless `value` is strictly positive (NaN is rejected).
pub fn validate_positive(name: &'static str, value: f32) -> SceneResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::NonPositive { name, value })
    }
}

/// Returns an error unless `0 < tablet_min < desktop_min`.
pub fn validate_breakpoints(tablet_min: f32, desktop_min: f32) -> SceneResult<()> {
    if tablet_min > 0.0 && tablet_min < desktop_min {
        Ok(())
    } else {
        Err(SceneError::UnorderedBreakpoints {
            tablet_min,
            desktop_min,
        })
    }
}

/// Returns an error if either viewport extent is not strictly positive.
pub fn validate_viewport(width: f32, height: f32) -> SceneResult<()> {
    if width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(SceneError::DegenerateViewport { width, height })
    }
}
