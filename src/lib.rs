//! Block Blast (workspace facade crate).
//!
//! This package exposes `block_blast::{types, core, session}` as one public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use block_blast_core as core;
pub use block_blast_session as session;
pub use block_blast_types as types;
