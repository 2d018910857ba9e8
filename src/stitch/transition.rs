use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    animation::ease::Curve,
    foundation::error::{StitchError, StitchResult},
};

/// Upper bound accepted by [`TransitionConfig::validate`] for every frame count.
pub const MAX_TRANSITION_FRAMES: u32 = 60;

/// Per-field upper bounds checked by [`TransitionConfig::validate_with`].
///
/// The presets mirror the command-line ranges of each operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionLimits {
    /// Largest accepted `overlap_frames`.
    pub max_overlap: u32,
    /// Largest accepted `crossfade_frames`.
    pub max_crossfade: u32,
    /// Largest accepted `interpolation_frames`.
    pub max_interpolation: u32,
}

impl TransitionLimits {
    /// Bounds for a two-clip stitch.
    pub const PAIR: Self = Self {
        max_overlap: 30,
        max_crossfade: 60,
        max_interpolation: 30,
    };

    /// Bounds for chaining many clips.
    pub const CHAIN: Self = Self {
        max_overlap: 20,
        max_crossfade: 30,
        max_interpolation: 30,
    };
}

impl Default for TransitionLimits {
    fn default() -> Self {
        Self {
            max_overlap: MAX_TRANSITION_FRAMES,
            max_crossfade: MAX_TRANSITION_FRAMES,
            max_interpolation: MAX_TRANSITION_FRAMES,
        }
    }
}

// Fields present in a config file; absent ones keep the base preset.
#[derive(Debug, Default, serde::Deserialize)]
struct TransitionOverlay {
    overlap_frames: Option<u32>,
    crossfade_frames: Option<u32>,
    interpolation_frames: Option<u32>,
    interpolation_method: Option<Curve>,
}

impl TransitionOverlay {
    fn apply(self, base: TransitionConfig) -> TransitionConfig {
        TransitionConfig {
            overlap_frames: self.overlap_frames.unwrap_or(base.overlap_frames),
            crossfade_frames: self.crossfade_frames.unwrap_or(base.crossfade_frames),
            interpolation_frames: self
                .interpolation_frames
                .unwrap_or(base.interpolation_frames),
            interpolation_method: self
                .interpolation_method
                .unwrap_or(base.interpolation_method),
        }
    }
}

/// Parameters shared by every junction of a stitch.
///
/// Defaults match a two-clip stitch (`4 / 8 / 2 / ease_in_out`). Interpolation takes
/// precedence over crossfade, and the crossfade length is capped at `overlap_frames`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Frames taken from each side of the junction to form the transition zone.
    pub overlap_frames: u32,
    /// Frames cross-blended inside the zone; `0` is a hard cut.
    pub crossfade_frames: u32,
    /// Synthetic frames generated between the clips; `0` disables interpolation.
    pub interpolation_frames: u32,
    /// Curve weighting both interpolation and crossfade.
    pub interpolation_method: Curve,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            overlap_frames: 4,
            crossfade_frames: 8,
            interpolation_frames: 2,
            interpolation_method: Curve::EaseInOut,
        }
    }
}

impl TransitionConfig {
    /// Defaults used when chaining many clips (`4 / 8 / 4 / ease_in_out`).
    pub fn chain_defaults() -> Self {
        Self {
            interpolation_frames: 4,
            ..Self::default()
        }
    }

    /// Plain concatenation: no crossfade, no interpolation.
    pub fn hard_cut() -> Self {
        Self {
            crossfade_frames: 0,
            interpolation_frames: 0,
            ..Self::default()
        }
    }

    /// Parse a config from a JSON reader. Missing fields take the pair defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> StitchResult<Self> {
        Self::from_reader_over(Self::default(), r)
    }

    /// Parse a config from a JSON reader, filling missing fields from `base`.
    pub fn from_reader_over<R: std::io::Read>(base: Self, r: R) -> StitchResult<Self> {
        let overlay: TransitionOverlay = serde_json::from_reader(r)
            .map_err(|e| StitchError::serde(format!("parse transition config JSON: {e}")))?;
        let cfg = overlay.apply(base);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk. Missing fields take the pair defaults.
    pub fn from_path(path: impl AsRef<Path>) -> StitchResult<Self> {
        Self::from_path_over(Self::default(), path)
    }

    /// Parse a config from a JSON file on disk, filling missing fields from `base`.
    pub fn from_path_over(base: Self, path: impl AsRef<Path>) -> StitchResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StitchError::validation(format!(
                "open transition config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader_over(base, BufReader::new(f))
    }

    /// Check every field against [`MAX_TRANSITION_FRAMES`].
    ///
    /// The stitcher itself clamps degenerate values; this is for configs coming from files or
    /// the command line.
    pub fn validate(&self) -> StitchResult<()> {
        self.validate_with(&TransitionLimits::default())
    }

    /// Check every field against `limits`; `overlap_frames` must also be at least 1.
    pub fn validate_with(&self, limits: &TransitionLimits) -> StitchResult<()> {
        if self.overlap_frames == 0 {
            return Err(StitchError::validation("overlap_frames must be >= 1"));
        }
        for (name, v, max) in [
            ("overlap_frames", self.overlap_frames, limits.max_overlap),
            ("crossfade_frames", self.crossfade_frames, limits.max_crossfade),
            (
                "interpolation_frames",
                self.interpolation_frames,
                limits.max_interpolation,
            ),
        ] {
            if v > max {
                return Err(StitchError::validation(format!(
                    "{name} must be <= {max}, got {v}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stitch/transition.rs"]
mod tests;
