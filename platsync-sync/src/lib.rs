//! Push/pull sync between sketch drawings and the platsync master store.
//!
//! # Architecture
//!
//! Each working drawing has its own sketch frame. The master store holds
//! every residence point in the true surveyed frame. Two reference edges,
//! one per frame, register the two frames against each other.
//!
//! ## Components
//!
//! - **Orchestrator**: composes registration, filtering and the store into
//!   the `push` and `pull` operations
//! - **Ports**: traits for the collaborators that capture references and
//!   features and place pulled points
//! - **Reports**: push/pull results with human-readable summaries
//! - **Config**: store path and tolerances
//!
//! ## Push
//!
//! 1. Build the sketch-to-true transform from the two reference edges
//! 2. Map local points, dropping non-finite results
//! 3. Append survivors to the master store, tagged as residences
//!
//! ## Pull
//!
//! 1. Build both transforms and the true-frame section region
//! 2. Read the whole store and keep points inside the region
//! 3. Map survivors into the sketch frame
//!
//! # Example
//!
//! ```no_run
//! use platsync_sync::{SyncConfig, SyncOrchestrator};
//! use platsync_types::{Point2, ReferenceEdge, SectionKey};
//!
//! let orchestrator = SyncOrchestrator::new(SyncConfig::default().with_env_overrides());
//! let section = SectionKey::new("12", "3N", "4W", "6th PM");
//! let true_edge = ReferenceEdge::new(Point2::new(0.0, 5280.0), Point2::new(5280.0, 5280.0), 1e-9)?;
//! let sketch_edge = ReferenceEdge::new(Point2::new(0.0, 10.0), Point2::new(10.0, 10.0), 1e-9)?;
//!
//! let report = orchestrator.pull(&section, &true_edge, &sketch_edge)?;
//! println!("{report}");
//! # Ok::<(), platsync_sync::SyncError>(())
//! ```

mod config;
mod error;
mod orchestrator;
pub mod ports;
mod report;

pub use config::{SyncConfig, DEFAULT_STORE_PATH, STORE_PATH_ENV};
pub use error::{SyncError, SyncResult};
pub use orchestrator::SyncOrchestrator;
pub use ports::{
    CapturedReferences, FeatureCapture, FeaturePlacement, ReferenceCapture, TrueReference,
};
pub use report::{PullOutcome, PullReport, PushReport};
