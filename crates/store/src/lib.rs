//! Durable board storage for clawdeck.
//!
//! One storage key maps to one JSON document holding the entire task
//! collection. There is no versioning field and no migration; the
//! document is overwritten whole on every mutation.

pub mod error;
pub mod store;

pub use error::{Result, StoreError};
pub use store::BoardStore;
