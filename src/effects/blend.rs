use rayon::prelude::*;

use crate::{
    effects::reconcile::reconcile,
    foundation::core::{Frame, Sequence},
    foundation::error::{StitchError, StitchResult},
};

/// Pixel compositing mode used by [`blend_frame`].
///
/// `a` is the base frame, `b` the blended frame and `w` the weight applied to `b`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlendMode {
    /// `a (1 − w) + b w`.
    #[default]
    Mix,
    /// `a + b w`.
    Add,
    /// `a (b w + 1 − w)`.
    Multiply,
    /// `1 − (1 − a)(1 − b w)`.
    Screen,
    /// Multiply below mid-gray, screen above it.
    Overlay,
}

impl BlendMode {
    /// Every mode, in declaration order.
    pub const ALL: [BlendMode; 5] = [
        Self::Mix,
        Self::Add,
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
    ];

    /// Resolve a mode by name, falling back to [`BlendMode::Mix`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "mix" | "normal" => Self::Mix,
            "add" => Self::Add,
            "multiply" => Self::Multiply,
            "screen" => Self::Screen,
            "overlay" => Self::Overlay,
            other => {
                tracing::warn!(mode = other, "unknown blend mode, using mix");
                Self::Mix
            }
        }
    }

    /// Canonical name, as accepted by [`BlendMode::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Mix => "mix",
            Self::Add => "add",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
        }
    }

    /// Blend one sample pair. The result is clamped into `[0, 1]`.
    pub fn apply(self, a: f32, b: f32, w: f32) -> f32 {
        let out = match self {
            Self::Mix => a * (1.0 - w) + b * w,
            Self::Add => a + b * w,
            Self::Multiply => a * (b * w + (1.0 - w)),
            Self::Screen => 1.0 - (1.0 - a) * (1.0 - b * w),
            Self::Overlay => {
                if a < 0.5 {
                    2.0 * a * b * w
                } else {
                    1.0 - 2.0 * (1.0 - a) * (1.0 - b * w)
                }
            }
        };
        out.clamp(0.0, 1.0)
    }
}

impl From<String> for BlendMode {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<BlendMode> for String {
    fn from(mode: BlendMode) -> Self {
        mode.name().to_owned()
    }
}

impl std::fmt::Display for BlendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Composite `b` onto `a` with `weight` (clamped into `[0, 1]`).
///
/// Both frames must share a shape; reconcile sequences first with
/// [`crate::reconcile`] when they may not.
pub fn blend_frame(a: &Frame, b: &Frame, weight: f32, mode: BlendMode) -> StitchResult<Frame> {
    if a.shape() != b.shape() {
        return Err(StitchError::shape(format!(
            "blend_frame expects equal shapes, got {} and {}",
            a.shape(),
            b.shape()
        )));
    }
    Ok(blend_unchecked(a, b, weight, mode))
}

/// Linear mix of two same-shape frames; `weight` is the share of `b`.
pub(crate) fn mix(a: &Frame, b: &Frame, weight: f32) -> Frame {
    blend_unchecked(a, b, weight, BlendMode::Mix)
}

fn blend_unchecked(a: &Frame, b: &Frame, weight: f32, mode: BlendMode) -> Frame {
    debug_assert_eq!(a.shape(), b.shape());
    let w = if weight.is_nan() {
        0.0
    } else {
        weight.clamp(0.0, 1.0)
    };
    let data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(&av, &bv)| mode.apply(av, bv, w))
        .collect::<Vec<_>>();
    Frame::from_raw(a.shape(), data)
}

/// Blend two sequences frame by frame.
///
/// Both inputs are truncated to the shorter length and `frames_b` is resampled to the shape of
/// `frames_a` when they differ. An empty input yields an empty sequence.
#[tracing::instrument(skip(frames_a, frames_b), fields(len_a = frames_a.len(), len_b = frames_b.len()))]
pub fn blend_frames(
    frames_a: &Sequence,
    frames_b: &Sequence,
    blend_factor: f32,
    mode: BlendMode,
) -> Sequence {
    let n = frames_a.len().min(frames_b.len());
    if n == 0 {
        return Sequence::empty();
    }
    let a = Sequence::from_frames_unchecked(frames_a.frames()[..n].to_vec());
    let b = Sequence::from_frames_unchecked(frames_b.frames()[..n].to_vec());
    let b = reconcile(&a, &b);

    let out = a
        .frames()
        .par_iter()
        .zip(b.frames().par_iter())
        .map(|(fa, fb)| blend_unchecked(fa, fb, blend_factor, mode))
        .collect::<Vec<_>>();
    tracing::debug!(frames = out.len(), mode = mode.name(), "blended sequences");
    Sequence::from_frames_unchecked(out)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blend.rs"]
mod tests;
