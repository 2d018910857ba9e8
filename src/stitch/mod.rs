pub(crate) mod pairwise;
pub(crate) mod sequencer;
pub(crate) mod transition;
