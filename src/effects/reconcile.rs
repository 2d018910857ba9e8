use image::imageops::{self, FilterType};
use rayon::prelude::*;

use crate::foundation::core::{Frame, FrameShape, Sequence};

/// Resample every frame of `target` to the spatial shape of `reference`.
///
/// Returns `target` unchanged when the shapes already match or either side is empty. A
/// mismatch is not an error; it is reported as a warning and resolved with Lanczos3
/// resampling. Resampled samples are clamped back into `[0, 1]` since the filter overshoots
/// near hard edges.
pub fn reconcile(reference: &Sequence, target: &Sequence) -> Sequence {
    let (Some(want), Some(have)) = (reference.shape(), target.shape()) else {
        return target.clone();
    };
    if want == have {
        return target.clone();
    }

    tracing::warn!(
        reference = %want,
        target = %have,
        frames = target.len(),
        "sequence dimensions differ, resampling target to reference"
    );

    let frames = target
        .frames()
        .par_iter()
        .map(|f| resample(f, want))
        .collect::<Vec<_>>();
    Sequence::from_frames_unchecked(frames)
}

fn resample(frame: &Frame, to: FrameShape) -> Frame {
    let src = frame.to_rgb32f();
    let resized = imageops::resize(&src, to.width, to.height, FilterType::Lanczos3);
    let mut data = resized.into_raw();
    for v in &mut data {
        *v = v.clamp(0.0, 1.0);
    }
    Frame::from_raw(to, data)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/reconcile.rs"]
mod tests;
