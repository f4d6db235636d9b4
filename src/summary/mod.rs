//! Summary assembly
//!
//! Picks one representative sentence per topical cluster and restores
//! original document order.

pub mod selector;

pub use selector::select_representatives;
