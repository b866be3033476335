// SPDX-License-Identifier: MPL-2.0
//! Host-side plumbing: directory resolution and persisted player state.

pub mod paths;
pub mod persisted_state;

pub use persisted_state::{AppState, StateFileStore};
