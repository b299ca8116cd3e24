//! Frame registration for platsync.
//!
//! Turns reference data into the transforms and regions the sync layer
//! uses:
//! - **Reference**: resolves the top edge of a true-frame reference geometry
//! - **Registration**: builds the true/sketch similarity transform pair
//! - **Filter**: inclusive containment tests against a true-frame region
//!
//! # Example
//!
//! ```
//! use platsync_geometry::{build_transforms, resolve_top_edge, ReferenceGeometry};
//! use platsync_types::{Point2, ReferenceEdge, SketchFrame, Tolerances, TrueFrame};
//!
//! let tol = Tolerances::default();
//! let parcel = ReferenceGeometry::<TrueFrame>::Polygon(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 5.0),
//!     Point2::new(0.0, 5.0),
//! ]);
//! let true_edge = resolve_top_edge(&parcel, &tol).unwrap();
//! let sketch_edge = ReferenceEdge::<SketchFrame>::new(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(20.0, 0.0),
//!     tol.length,
//! )
//! .unwrap();
//!
//! let transforms = build_transforms(&true_edge, &sketch_edge, &tol).unwrap();
//! assert_eq!(transforms.scale(), 2.0);
//! ```

mod error;
pub mod filter;
pub mod reference;
pub mod registration;

pub use error::{GeometryError, GeometryResult};
pub use filter::SpatialFilter;
pub use reference::{resolve_top_edge, ReferenceGeometry};
pub use registration::{build_transforms, TransformPair};
