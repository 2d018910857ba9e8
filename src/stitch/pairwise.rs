//! Two-clip stitching.
//!
//! A junction is resolved by exactly one of three paths, in priority order:
//!
//! 1. **Interpolation** (`interpolation_frames > 0`): synthetic frames replace the last frame of
//!    `a` and the first frame of `b`.
//! 2. **Crossfade** (`crossfade_frames > 0`): the tail of `a` and the head of `b` inside the
//!    transition zone are blended pairwise into a shorter run of frames.
//! 3. **Concatenation** otherwise.
//!
//! Frames outside the transition zone are carried over untouched.

use crate::{
    animation::ease::Curve,
    effects::blend::mix,
    effects::reconcile::reconcile,
    foundation::core::{Frame, Sequence},
    stitch::transition::TransitionConfig,
};

/// Generate `count` frames easing from `from` to `to`.
///
/// Frame `i` (1-based) uses progress `t = i / (count + 1)`, so neither endpoint is repeated.
/// `from` and `to` must share a shape.
pub fn interpolate_frames(from: &Frame, to: &Frame, count: usize, curve: Curve) -> Vec<Frame> {
    (1..=count)
        .map(|i| {
            let t = i as f64 / (count + 1) as f64;
            mix(from, to, curve.apply(t) as f32)
        })
        .collect()
}

/// Cross-blend the tail of `zone_a` into the head of `zone_b`.
///
/// `count` is clamped to the length of both zones. The trailing `count` frames of `zone_a` are
/// blended against the leading `count` frames of `zone_b` with progress
/// `t = (i + 1) / (count + 1)`; the frames of each zone outside that run are kept. A clamped
/// count of zero degrades to `zone_a ++ zone_b`.
pub fn crossfade_sequences(
    zone_a: &[Frame],
    zone_b: &[Frame],
    count: usize,
    curve: Curve,
) -> Vec<Frame> {
    let count = count.min(zone_a.len()).min(zone_b.len());
    if count == 0 {
        return zone_a.iter().chain(zone_b).cloned().collect();
    }

    let (keep_a, fade_a) = zone_a.split_at(zone_a.len() - count);
    let (fade_b, keep_b) = zone_b.split_at(count);

    let mut out = Vec::with_capacity(keep_a.len() + count + keep_b.len());
    out.extend_from_slice(keep_a);
    for (i, (fa, fb)) in fade_a.iter().zip(fade_b).enumerate() {
        let t = (i + 1) as f64 / (count + 1) as f64;
        out.push(mix(fa, fb, curve.apply(t) as f32));
    }
    out.extend_from_slice(keep_b);
    out
}

/// Stitch `seq_b` onto the end of `seq_a`.
///
/// `seq_b` is first resampled to `seq_a`'s shape. Never fails: oversized overlaps and
/// crossfades are clamped to the frames available, and an empty side yields the other side.
#[tracing::instrument(
    skip(seq_a, seq_b),
    fields(len_a = seq_a.len(), len_b = seq_b.len())
)]
pub fn stitch_pair(seq_a: &Sequence, seq_b: &Sequence, config: &TransitionConfig) -> Sequence {
    if seq_a.is_empty() {
        return seq_b.clone();
    }
    if seq_b.is_empty() {
        return seq_a.clone();
    }

    let seq_b = reconcile(seq_a, seq_b);
    let a = seq_a.frames();
    let b = seq_b.frames();
    let method = config.interpolation_method;
    let overlap = config.overlap_frames as usize;
    let interpolation = config.interpolation_frames as usize;
    let crossfade = config.crossfade_frames as usize;

    let frames = if interpolation > 0 {
        tracing::debug!(interpolation, %method, "joining with interpolated frames");
        let (head_a, last_a) = a.split_at(a.len() - 1);
        let (first_b, tail_b) = b.split_at(1);
        let synthetic = interpolate_frames(&last_a[0], &first_b[0], interpolation, method);

        let mut out = Vec::with_capacity(head_a.len() + synthetic.len() + tail_b.len());
        out.extend_from_slice(head_a);
        out.extend(synthetic);
        out.extend_from_slice(tail_b);
        out
    } else if crossfade > 0 {
        // crossfade never exceeds the overlap zone
        let start_a = a.len().saturating_sub(overlap);
        let end_b = overlap.min(b.len());
        tracing::debug!(
            overlap,
            crossfade = crossfade.min(overlap),
            %method,
            "joining with crossfade"
        );
        let transition =
            crossfade_sequences(&a[start_a..], &b[..end_b], crossfade.min(overlap), method);

        let mut out = Vec::with_capacity(start_a + transition.len() + b.len() - end_b);
        out.extend_from_slice(&a[..start_a]);
        out.extend(transition);
        out.extend_from_slice(&b[end_b..]);
        out
    } else {
        tracing::debug!("joining with a hard cut");
        a.iter().chain(b).cloned().collect()
    };

    tracing::info!(frames = frames.len(), "stitched pair");
    Sequence::from_frames_unchecked(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/stitch/pairwise.rs"]
mod tests;
