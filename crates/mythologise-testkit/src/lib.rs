//! # Mythologise Testkit
//!
//! Testing utilities for mythologise.
//!
//! - **Golden vectors**: handles and avatar seeds that must never change
//! - **Generators**: proptest strategies for ids, secrets and options
//! - **Fixtures**: a preconfigured secret and options for quick derivations
//!
//! ```rust
//! use mythologise_testkit::vectors::verify_all_vectors;
//!
//! assert!(verify_all_vectors().is_empty());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::HandleFixture;
pub use vectors::{avatar_vectors, handle_vectors, verify_all_vectors, AvatarVector, HandleVector};
