//! Master point store for platsync.
//!
//! One JSON file holds every true-frame point pushed by every drawing:
//!
//! ```json
//! {"version":1,"points":[{"x":1204.5,"y":988.25,"class":"residence"}]}
//! ```
//!
//! # Concurrency
//!
//! Appends are read-modify-write of the whole file. They are serialized
//! across processes with an exclusive `fs2` lock on a sidecar `.lock` file,
//! so two concurrent pushes both land. Reads take a shared lock. Writes go
//! through a temporary file and an atomic rename; a failed write leaves the
//! old file untouched.

mod error;
mod format;
mod lock;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::{MasterPointStore, StoreSnapshot};
