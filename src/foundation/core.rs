use std::sync::Arc;

use crate::foundation::error::{StitchError, StitchResult};

/// Number of interleaved samples per pixel (RGB).
pub const CHANNELS: usize = 3;

/// Spatial dimensions shared by every frame of a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameShape {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameShape {
    /// Build a shape from width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of `f32` samples a frame of this shape holds.
    pub fn sample_count(self) -> usize {
        self.width as usize * self.height as usize * CHANNELS
    }
}

impl std::fmt::Display for FrameShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, CHANNELS)
    }
}

/// One decoded image: interleaved RGB samples, nominally in `[0, 1]`.
///
/// Pixel data sits behind an [`Arc`], so frames are cheap to clone and are never mutated after
/// construction. Every operation in this crate produces new frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    shape: FrameShape,
    data: Arc<Vec<f32>>,
}

impl Frame {
    /// Build a frame from row-major interleaved RGB samples.
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> StitchResult<Self> {
        if width == 0 || height == 0 {
            return Err(StitchError::validation("frame width and height must be > 0"));
        }
        let shape = FrameShape::new(width, height);
        if data.len() != shape.sample_count() {
            return Err(StitchError::validation(format!(
                "frame {shape} expects {} samples, got {}",
                shape.sample_count(),
                data.len()
            )));
        }
        Ok(Self::from_raw(shape, data))
    }

    /// Build a frame where every pixel has the same color.
    ///
    /// A zero `width` or `height` is raised to 1, so the result always holds at least one pixel.
    pub fn filled(width: u32, height: u32, rgb: [f32; 3]) -> Self {
        let shape = FrameShape::new(width.max(1), height.max(1));
        let mut data = Vec::with_capacity(shape.sample_count());
        for _ in 0..(shape.width as usize * shape.height as usize) {
            data.extend_from_slice(&rgb);
        }
        Self::from_raw(shape, data)
    }

    pub(crate) fn from_raw(shape: FrameShape, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), shape.sample_count());
        Self {
            shape,
            data: Arc::new(data),
        }
    }

    /// Spatial shape of this frame.
    pub fn shape(&self) -> FrameShape {
        self.shape
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.shape.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.shape.height
    }

    /// Raw interleaved samples.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// RGB value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 3]> {
        if x >= self.shape.width || y >= self.shape.height {
            return None;
        }
        let i = (y as usize * self.shape.width as usize + x as usize) * CHANNELS;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Mean over all samples; a cheap brightness measure.
    pub fn mean(&self) -> f32 {
        let sum: f64 = self.data.iter().map(|&v| f64::from(v)).sum();
        (sum / self.data.len() as f64) as f32
    }

    /// Copy into an `image` float buffer.
    pub fn to_rgb32f(&self) -> image::Rgb32FImage {
        image::Rgb32FImage::from_fn(self.shape.width, self.shape.height, |x, y| {
            let i = (y as usize * self.shape.width as usize + x as usize) * CHANNELS;
            image::Rgb([self.data[i], self.data[i + 1], self.data[i + 2]])
        })
    }

    /// Build a frame from an `image` float buffer.
    pub fn from_rgb32f(img: image::Rgb32FImage) -> StitchResult<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Quantize into an 8-bit RGB image, clamping samples into `[0, 1]`.
    pub fn to_rgb8(&self) -> image::RgbImage {
        fn quantize(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        image::RgbImage::from_fn(self.shape.width, self.shape.height, |x, y| {
            let i = (y as usize * self.shape.width as usize + x as usize) * CHANNELS;
            image::Rgb([
                quantize(self.data[i]),
                quantize(self.data[i + 1]),
                quantize(self.data[i + 2]),
            ])
        })
    }
}

/// Ordered frames of one clip, all sharing a single [`FrameShape`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sequence {
    frames: Vec<Frame>,
}

impl Sequence {
    /// Build a sequence, enforcing that every frame matches the first frame's shape.
    pub fn new(frames: Vec<Frame>) -> StitchResult<Self> {
        if let Some(first) = frames.first() {
            let shape = first.shape();
            if let Some((idx, bad)) = frames
                .iter()
                .enumerate()
                .find(|(_, f)| f.shape() != shape)
            {
                return Err(StitchError::shape(format!(
                    "frame {idx} has shape {}, sequence shape is {shape}",
                    bad.shape()
                )));
            }
        }
        Ok(Self { frames })
    }

    /// A sequence with no frames.
    pub fn empty() -> Self {
        Self::default()
    }

    // Callers guarantee the batch invariant.
    pub(crate) fn from_frames_unchecked(frames: Vec<Frame>) -> Self {
        debug_assert!(frames.windows(2).all(|w| w[0].shape() == w[1].shape()));
        Self { frames }
    }

    /// Frame count.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when the sequence holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Shared frame shape, or `None` for an empty sequence.
    pub fn shape(&self) -> Option<FrameShape> {
        self.frames.first().map(Frame::shape)
    }

    /// All frames in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame at `idx`.
    pub fn get(&self, idx: usize) -> Option<&Frame> {
        self.frames.get(idx)
    }

    /// First frame.
    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }

    /// Last frame.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Iterate over frames in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Consume the sequence and return its frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
