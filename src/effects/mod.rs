pub(crate) mod blend;
pub(crate) mod reconcile;
