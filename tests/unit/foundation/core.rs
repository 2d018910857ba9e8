use super::*;

#[test]
fn frame_new_rejects_wrong_sample_count() {
    assert!(Frame::new(2, 2, vec![0.0; 12]).is_ok());
    assert!(Frame::new(2, 2, vec![0.0; 11]).is_err());
    assert!(Frame::new(0, 2, Vec::new()).is_err());
}

#[test]
fn frame_pixel_indexes_row_major() {
    let data = (0..12).map(|v| v as f32).collect::<Vec<_>>();
    let f = Frame::new(2, 2, data).unwrap();
    assert_eq!(f.pixel(0, 0), Some([0.0, 1.0, 2.0]));
    assert_eq!(f.pixel(1, 0), Some([3.0, 4.0, 5.0]));
    assert_eq!(f.pixel(0, 1), Some([6.0, 7.0, 8.0]));
    assert_eq!(f.pixel(2, 0), None);
}

#[test]
fn frame_clone_shares_pixels() {
    let a = Frame::filled(4, 4, [0.25, 0.5, 0.75]);
    let b = a.clone();
    assert!(std::ptr::eq(a.data().as_ptr(), b.data().as_ptr()));
    assert!((a.mean() - 0.5).abs() < 1e-6);
}

#[test]
fn rgb32f_conversion_preserves_samples() {
    let f = Frame::new(3, 1, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]).unwrap();
    let back = Frame::from_rgb32f(f.to_rgb32f()).unwrap();
    assert_eq!(back, f);
}

#[test]
fn rgb8_quantization_clamps() {
    let f = Frame::new(2, 1, vec![-0.5, 0.5, 1.5, 0.0, 1.0, 0.2]).unwrap();
    let img = f.to_rgb8();
    assert_eq!(img.get_pixel(0, 0).0, [0, 128, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 255, 51]);
}

#[test]
fn sequence_new_enforces_batch_shape() {
    let ok = Sequence::new(vec![Frame::filled(2, 2, [0.0; 3]), Frame::filled(2, 2, [1.0; 3])]);
    assert_eq!(ok.unwrap().shape(), Some(FrameShape::new(2, 2)));

    let err = Sequence::new(vec![Frame::filled(2, 2, [0.0; 3]), Frame::filled(3, 2, [0.0; 3])])
        .unwrap_err();
    assert!(matches!(err, StitchError::Shape(_)));
}

#[test]
fn empty_sequence_has_no_shape() {
    let s = Sequence::empty();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert_eq!(s.shape(), None);
    assert!(s.first().is_none());
}

#[test]
fn shape_display_is_hwc() {
    assert_eq!(FrameShape::new(64, 32).to_string(), "32x64x3");
}

#[test]
fn filled_raises_zero_dimensions_to_one() {
    let f = Frame::filled(0, 0, [0.5; 3]);
    assert_eq!(f.shape(), FrameShape::new(1, 1));
    assert_eq!(f.data().len(), CHANNELS);
}

#[test]
fn rgb8_keeps_pixel_positions_on_non_square_frames() {
    let data = (0..6)
        .flat_map(|i| [i as f32 / 5.0, 0.0, 1.0])
        .collect::<Vec<_>>();
    let f = Frame::new(3, 2, data).unwrap();
    let img = f.to_rgb8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255]);
    assert_eq!(img.get_pixel(2, 0).0, [102, 0, 255]);
    assert_eq!(img.get_pixel(2, 1).0, [255, 0, 255]);
}
