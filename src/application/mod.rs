// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the playback controller talks through.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer and host adapters implement application layer ports
//! - The playback controller only ever sees the traits

pub mod port;
