//! Configuration intent: state, reducer, store.
//!
//! The store is the single source of truth for the control panel. Every
//! mutation flows through `ControlStore::dispatch`, which applies the
//! change, notifies subscribers, and hands the publisher a full snapshot.

mod state;
mod store;

pub use state::{ControlChange, ControlState};
pub use store::ControlStore;
