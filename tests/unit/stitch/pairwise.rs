use super::*;
use crate::foundation::core::FrameShape;

// Frame i of a ramp has every sample set to base + i * 0.01, so frames are identifiable.
fn ramp(base: f32, n: usize) -> Sequence {
    let frames = (0..n)
        .map(|i| Frame::filled(4, 2, [base + i as f32 * 0.01; 3]))
        .collect();
    Sequence::new(frames).unwrap()
}

fn cfg(overlap: u32, crossfade: u32, interpolation: u32, method: Curve) -> TransitionConfig {
    TransitionConfig {
        overlap_frames: overlap,
        crossfade_frames: crossfade,
        interpolation_frames: interpolation,
        interpolation_method: method,
    }
}

fn means(s: &Sequence) -> Vec<f32> {
    s.iter().map(Frame::mean).collect()
}

#[test]
fn interpolate_frames_excludes_endpoints() {
    let from = Frame::filled(2, 2, [0.0; 3]);
    let to = Frame::filled(2, 2, [1.0; 3]);
    let out = interpolate_frames(&from, &to, 3, Curve::Linear);
    let got = out.iter().map(Frame::mean).collect::<Vec<_>>();
    for (g, want) in got.iter().zip([0.25, 0.5, 0.75]) {
        assert!((g - want).abs() < 1e-6);
    }
    assert!(interpolate_frames(&from, &to, 0, Curve::Linear).is_empty());
}

#[test]
fn crossfade_sequences_keeps_frames_outside_the_fade() {
    let a = ramp(0.0, 4);
    let b = ramp(0.5, 4);
    let out = crossfade_sequences(a.frames(), b.frames(), 2, Curve::Linear);
    assert_eq!(out.len(), 2 + 2 + 2);
    assert_eq!(out[0], a.frames()[0]);
    assert_eq!(out[1], a.frames()[1]);
    assert_eq!(out[4], b.frames()[2]);
    assert_eq!(out[5], b.frames()[3]);
    // first blended frame: a[2] toward b[0] at t = 1/3
    let want = 0.02 * (2.0 / 3.0) + 0.5 * (1.0 / 3.0);
    assert!((out[2].mean() - want).abs() < 1e-5);
}

#[test]
fn crossfade_sequences_with_zero_count_concatenates() {
    let a = ramp(0.0, 2);
    let b = ramp(0.5, 3);
    let out = crossfade_sequences(a.frames(), b.frames(), 0, Curve::Cosine);
    assert_eq!(out.len(), 5);
    let out = crossfade_sequences(&[], b.frames(), 4, Curve::Cosine);
    assert_eq!(out, b.frames().to_vec());
}

#[test]
fn hard_cut_is_plain_concatenation() {
    let a = ramp(0.0, 5);
    let b = ramp(0.5, 7);
    let out = stitch_pair(&a, &b, &cfg(4, 0, 0, Curve::EaseInOut));
    assert_eq!(out.len(), 12);
    let expected = a.frames().iter().chain(b.frames()).cloned().collect::<Vec<_>>();
    assert_eq!(out.frames(), expected.as_slice());
}

#[test]
fn interpolation_replaces_the_seam_frames() {
    let a = ramp(0.0, 6);
    let b = ramp(0.5, 5);
    for n in [1u32, 2, 7] {
        let out = stitch_pair(&a, &b, &cfg(4, 8, n, Curve::Linear));
        assert_eq!(out.len(), 6 - 1 + n as usize + 5 - 1);
        assert_eq!(&out.frames()[..5], &a.frames()[..5]);
        assert_eq!(out.last(), b.last());
    }
}

#[test]
fn interpolation_takes_precedence_over_crossfade() {
    let a = ramp(0.0, 10);
    let b = ramp(0.5, 10);
    let out = stitch_pair(&a, &b, &cfg(4, 4, 2, Curve::Linear));
    assert_eq!(out.len(), 9 + 2 + 9);
    let m = means(&out);
    let last_a = 0.09f32;
    let first_b = 0.5f32;
    assert!((m[9] - (last_a + (first_b - last_a) / 3.0)).abs() < 1e-5);
    assert!((m[10] - (last_a + 2.0 * (first_b - last_a) / 3.0)).abs() < 1e-5);
}

#[test]
fn single_frame_clips_interpolate() {
    let a = ramp(0.0, 1);
    let b = ramp(1.0, 1);
    let out = stitch_pair(&a, &b, &cfg(4, 0, 3, Curve::Linear));
    assert_eq!(out.len(), 3);
}

#[test]
fn crossfade_shortens_by_the_blended_count() {
    let a = ramp(0.0, 10);
    let b = ramp(0.5, 10);
    let out = stitch_pair(&a, &b, &cfg(4, 4, 0, Curve::Linear));
    assert_eq!(out.len(), 16);
    assert_eq!(&out.frames()[..6], &a.frames()[..6]);
    assert_eq!(&out.frames()[10..], &b.frames()[4..]);
}

#[test]
fn crossfade_is_capped_by_overlap() {
    let a = ramp(0.0, 10);
    let b = ramp(0.5, 10);
    let capped = stitch_pair(&a, &b, &cfg(3, 60, 0, Curve::EaseInOut));
    let exact = stitch_pair(&a, &b, &cfg(3, 3, 0, Curve::EaseInOut));
    assert_eq!(capped, exact);
    assert_eq!(capped.len(), 17);
}

#[test]
fn crossfade_smaller_than_overlap_keeps_zone_remainders() {
    let a = ramp(0.0, 8);
    let b = ramp(0.5, 8);
    let out = stitch_pair(&a, &b, &cfg(4, 2, 0, Curve::Linear));
    // 4 prefix + (2 kept + 2 blended + 2 kept) + 4 suffix
    assert_eq!(out.len(), 14);
    assert_eq!(out.frames()[5], a.frames()[5]);
    assert_eq!(out.frames()[8], b.frames()[2]);
}

#[test]
fn overlap_longer_than_clips_uses_whole_clips() {
    let a = ramp(0.0, 2);
    let b = ramp(0.5, 3);
    let out = stitch_pair(&a, &b, &cfg(30, 60, 0, Curve::Sigmoid));
    // both zones are whole clips; crossfade clamps to 2
    assert_eq!(out.len(), 2 + 1);
    assert_eq!(out.frames()[2], b.frames()[2]);
}

#[test]
fn zero_overlap_degrades_to_concatenation() {
    let a = ramp(0.0, 3);
    let b = ramp(0.5, 3);
    let out = stitch_pair(&a, &b, &cfg(0, 8, 0, Curve::Linear));
    assert_eq!(out.len(), 6);
}

#[test]
fn empty_side_returns_the_other() {
    let a = ramp(0.0, 3);
    let empty = Sequence::empty();
    let c = TransitionConfig::default();
    assert_eq!(stitch_pair(&a, &empty, &c), a);
    assert_eq!(stitch_pair(&empty, &a, &c), a);
    assert!(stitch_pair(&empty, &empty, &c).is_empty());
}

#[test]
fn mismatched_b_is_resampled_before_stitching() {
    let a = ramp(0.0, 3);
    let b = Sequence::new(vec![Frame::filled(9, 5, [0.7; 3]); 3]).unwrap();
    let out = stitch_pair(&a, &b, &cfg(2, 2, 0, Curve::Linear));
    assert_eq!(out.shape(), Some(FrameShape::new(4, 2)));
    assert!(out.iter().all(|f| f.shape() == FrameShape::new(4, 2)));
}

#[test]
fn inputs_are_left_untouched() {
    let a = ramp(0.0, 5);
    let b = ramp(0.5, 5);
    let (a0, b0) = (a.clone(), b.clone());
    let _ = stitch_pair(&a, &b, &TransitionConfig::default());
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}
