//! Session layer - lifecycle and high score persistence around the core engine
//!
//! - [`session`]: the session controller (new game, placement forwarding, high score)
//! - [`store`]: the key-value persistence collaborator and its stock implementations
//! - [`config`]: session options
//!
//! # Example
//!
//! ```
//! use block_blast_session::{MemoryStore, Session, SessionConfig};
//!
//! let mut session = Session::new(MemoryStore::new(), SessionConfig::with_seed(1));
//! session.attempt_placement(0, 0, 0).unwrap();
//! session.new_game();
//! assert_eq!(session.engine().score(), 0);
//! ```

pub mod config;
pub mod session;
pub mod store;

pub use block_blast_core as core;
pub use block_blast_types as types;

pub use config::SessionConfig;
pub use session::Session;
pub use store::{JsonFileStore, MemoryStore, ScoreStore};
