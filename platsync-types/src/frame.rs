//! Coordinate frame markers.
//!
//! Every point, edge, box and transform is tagged with the frame its
//! coordinates are expressed in, so sketch coordinates cannot leak into the
//! master store without going through a transform.

use std::fmt;

/// A coordinate frame marker.
pub trait Frame: fmt::Debug + Clone + Copy + Default + PartialEq + Send + Sync + 'static {
    /// Short name used in log output.
    const NAME: &'static str;
}

/// The authoritative surveyed frame shared by the master store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TrueFrame;

impl Frame for TrueFrame {
    const NAME: &'static str = "true";
}

/// A local, arbitrarily oriented and scaled drawing frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SketchFrame;

impl Frame for SketchFrame {
    const NAME: &'static str = "sketch";
}
