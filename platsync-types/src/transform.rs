//! Similarity transforms between two coordinate frames.

use crate::frame::Frame;
use crate::point::{Point2, Vector2};
use crate::{Error, Result};

/// A uniform-scale, rotation and translation map from frame `Src` to
/// frame `Dst`.
///
/// Applies as `target + scale * R(rotation) * (p - source)`, that is
/// translate(target) . scale . rotate . translate(-source). The inverse
/// swaps the two origins and never recomputes a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityTransform<Src: Frame, Dst: Frame> {
    source: Point2<Src>,
    target: Point2<Dst>,
    scale: f64,
    rotation: f64,
}

impl<Src: Frame, Dst: Frame> SimilarityTransform<Src, Dst> {
    /// Creates a transform. Scale must be finite and positive; rotation and
    /// both origins must be finite.
    pub fn new(source: Point2<Src>, target: Point2<Dst>, scale: f64, rotation: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidTransform(format!(
                "scale must be finite and positive, got {scale}"
            )));
        }
        if !rotation.is_finite() {
            return Err(Error::InvalidTransform(format!(
                "rotation must be finite, got {rotation}"
            )));
        }
        if !source.is_finite() || !target.is_finite() {
            return Err(Error::InvalidTransform(format!(
                "origins must be finite, got {source} -> {target}"
            )));
        }
        Ok(Self {
            source,
            target,
            scale,
            rotation,
        })
    }

    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Rotation in radians, counter-clockwise positive.
    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    #[must_use]
    pub const fn source(&self) -> Point2<Src> {
        self.source
    }

    #[must_use]
    pub const fn target(&self) -> Point2<Dst> {
        self.target
    }

    /// The collapsed translation `t` such that `apply(p) = s R p + t`.
    #[must_use]
    pub fn translation(&self) -> Vector2 {
        let moved_source = Vector2::new(self.source.x, self.source.y)
            .rotated(self.rotation)
            .scaled(self.scale);
        Vector2::new(self.target.x, self.target.y) - moved_source
    }

    /// Maps a point from `Src` into `Dst`.
    #[must_use]
    pub fn apply(&self, p: Point2<Src>) -> Point2<Dst> {
        let offset = (p - self.source).rotated(self.rotation).scaled(self.scale);
        self.target + offset
    }

    /// Returns the transform mapping `Dst` back onto `Src`.
    pub fn inverse(&self) -> Result<SimilarityTransform<Dst, Src>> {
        let scale = self.scale.recip();
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::NotInvertible { scale: self.scale });
        }
        Ok(SimilarityTransform {
            source: self.target,
            target: self.source,
            scale,
            rotation: -self.rotation,
        })
    }
}
