use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::{
    core::{Frame, Sequence},
    error::{StitchError, StitchResult},
};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "webp"];

/// Decode encoded image bytes into a float RGB frame in `[0, 1]`.
pub fn decode_frame(bytes: &[u8]) -> StitchResult<Frame> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Frame::from_rgb32f(dyn_img.to_rgb32f())
}

/// Load every image file in `dir`, in lexical filename order, as one sequence.
///
/// All images must share dimensions.
#[tracing::instrument]
pub fn load_sequence_dir(dir: &Path) -> StitchResult<Sequence> {
    let paths = list_image_files(dir)?;
    let mut frames = Vec::with_capacity(paths.len());
    for path in &paths {
        let bytes =
            std::fs::read(path).with_context(|| format!("read frame '{}'", path.display()))?;
        let frame = decode_frame(&bytes)
            .map_err(|e| StitchError::validation(format!("'{}': {e}", path.display())))?;
        frames.push(frame);
    }
    tracing::debug!(frames = frames.len(), "loaded frame directory");
    Sequence::new(frames)
        .map_err(|e| StitchError::shape(format!("frames in '{}': {e}", dir.display())))
}

/// Write `seq` into `dir` as `frame_00000.png`, `frame_00001.png`, ...
///
/// Creates `dir` when missing and returns the written paths in order.
#[tracing::instrument(skip(seq), fields(frames = seq.len()))]
pub fn save_sequence_dir(seq: &Sequence, dir: &Path) -> StitchResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;

    let mut written = Vec::with_capacity(seq.len());
    for (i, frame) in seq.iter().enumerate() {
        let path = dir.join(format!("frame_{i:05}.png"));
        let rgb = frame.to_rgb8();
        image::save_buffer_with_format(
            &path,
            rgb.as_raw(),
            frame.width(),
            frame.height(),
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn list_image_files(dir: &Path) -> StitchResult<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read frame dir '{}'", dir.display()))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("list frame dir '{}'", dir.display()))?
            .path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/frames.rs"]
mod tests;
