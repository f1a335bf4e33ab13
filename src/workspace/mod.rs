//! Per-run scratch directory for captured frames.

pub(crate) mod frames;
