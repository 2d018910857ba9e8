//! clipstitch composes decoded video clips into one seamless frame sequence.
//!
//! Clips are [`Sequence`]s of in-memory RGB [`Frame`]s with samples in `[0, 1]`. Nothing here
//! decodes or encodes video containers.
//!
//! # Building blocks
//!
//! - [`Curve`]: easing from transition progress to blend weight.
//! - [`blend_frame`] / [`blend_frames`]: pixel compositing with a [`BlendMode`].
//! - [`reconcile`]: resample a sequence to another sequence's dimensions.
//! - [`stitch_pair`]: join two clips with interpolation, crossfade or a hard cut.
//! - [`stitch_all`] / [`loop_seamless`]: chain many clips, or blend a clip's end into its start.
//!
//! All operations are pure: inputs are never mutated, and every call returns a fresh sequence
//! (frames carried over unchanged share their pixel buffers with the input).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod effects;
mod foundation;
mod stitch;

pub use animation::ease::Curve;
pub use assets::frames::{decode_frame, load_sequence_dir, save_sequence_dir};
pub use effects::blend::{BlendMode, blend_frame, blend_frames};
pub use effects::reconcile::reconcile;
pub use foundation::core::{CHANNELS, Frame, FrameShape, Sequence};
pub use foundation::error::{StitchError, StitchResult};
pub use stitch::pairwise::{crossfade_sequences, interpolate_frames, stitch_pair};
pub use stitch::sequencer::{MAX_CHAIN_CLIPS, StitchedSequence, loop_seamless, stitch_all};
pub use stitch::transition::{MAX_TRANSITION_FRAMES, TransitionConfig, TransitionLimits};
