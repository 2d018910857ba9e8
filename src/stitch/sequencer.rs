use crate::{
    animation::ease::Curve,
    effects::blend::mix,
    foundation::core::Sequence,
    foundation::error::{StitchError, StitchResult},
    stitch::pairwise::stitch_pair,
    stitch::transition::TransitionConfig,
};

/// Maximum number of clip slots accepted by [`stitch_all`].
pub const MAX_CHAIN_CLIPS: usize = 8;

/// Output of [`stitch_all`].
#[derive(Clone, Debug, PartialEq)]
pub struct StitchedSequence {
    /// All clips joined into one sequence.
    pub sequence: Sequence,
    /// Frame count of `sequence`.
    pub total_frames: usize,
}

/// Join up to [`MAX_CHAIN_CLIPS`] clips left to right with one shared transition config.
///
/// The first two slots are required and always take part, even when empty. Later slots are
/// optional: `None` or empty sequences are skipped entirely and add no transition.
#[tracing::instrument(skip(videos), fields(slots = videos.len()))]
pub fn stitch_all(
    videos: &[Option<Sequence>],
    config: &TransitionConfig,
) -> StitchResult<StitchedSequence> {
    if videos.len() < 2 || videos.len() > MAX_CHAIN_CLIPS {
        return Err(StitchError::validation(format!(
            "stitch_all expects 2..={MAX_CHAIN_CLIPS} clip slots, got {}",
            videos.len()
        )));
    }
    let (Some(first), Some(second)) = (&videos[0], &videos[1]) else {
        return Err(StitchError::validation(
            "stitch_all requires the first two clips",
        ));
    };

    let optional = videos[2..]
        .iter()
        .enumerate()
        .filter_map(|(i, v)| match v {
            Some(seq) if !seq.is_empty() => {
                tracing::debug!(slot = i + 3, frames = seq.len(), "using optional clip");
                Some(seq)
            }
            _ => None,
        });
    let clips = [first, second].into_iter().chain(optional).collect::<Vec<_>>();

    tracing::info!(
        clips = clips.len(),
        overlap = config.overlap_frames,
        crossfade = config.crossfade_frames,
        interpolation = config.interpolation_frames,
        method = %config.interpolation_method,
        "stitching clips"
    );

    let mut result = first.clone();
    for (i, next) in clips.iter().enumerate().skip(1) {
        result = stitch_pair(&result, next, config);
        tracing::debug!(clip = i + 1, frames = result.len(), "joined clip");
    }

    let total_frames = result.len();
    tracing::info!(total_frames, "stitch complete");
    Ok(StitchedSequence {
        sequence: result,
        total_frames,
    })
}

/// Ease the last `blend_frames` frames of `video` toward its first ones for seamless looping.
///
/// `blend_frames` is clamped to `len / 2`. Below two frames there is nothing to blend and the
/// input is returned unchanged. Otherwise tail frame `i` becomes
/// `tail[i] (1 − w) + head[i] w` with `w = curve(i / (k − 1))`, and the result is
/// `head ++ middle ++ blended_tail`, the same length as the input.
#[tracing::instrument(skip(video), fields(len = video.len()))]
pub fn loop_seamless(video: &Sequence, blend_frames: usize, curve: Curve) -> Sequence {
    let n = video.len();
    let k = blend_frames.min(n / 2);
    if k < 2 {
        tracing::debug!(k, "too few frames to blend a loop");
        return video.clone();
    }

    let frames = video.frames();
    let head = &frames[..k];
    let middle = &frames[k..n - k];
    let tail = &frames[n - k..];

    let mut out = Vec::with_capacity(n);
    out.extend_from_slice(head);
    out.extend_from_slice(middle);
    for (i, (t_frame, h_frame)) in tail.iter().zip(head).enumerate() {
        let t = i as f64 / (k - 1) as f64;
        out.push(mix(t_frame, h_frame, curve.apply(t) as f32));
    }

    tracing::info!(frames = out.len(), blend = k, "built seamless loop");
    Sequence::from_frames_unchecked(out)
}

#[cfg(test)]
#[path = "../../tests/unit/stitch/sequencer.rs"]
mod tests;
