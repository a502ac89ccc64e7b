//! Local user accounts backed by a flat JSON store.
//!
//! Provides:
//! - Registration with username/password (stored as an unsalted SHA-256 hex digest)
//! - Credential verification for the login flow
//! - Per-account reminder-time updates
//! - Single-file JSON persistence, wire-compatible with existing `user_data.json` files
//!
//! ## Design Decisions
//! - The store is reread from disk at the start of every operation and
//!   rewritten in full on every mutation, so there is no in-memory cache to
//!   invalidate and no partial update to get wrong.
//! - The digest stays a single unsalted SHA-256 round: existing store files
//!   hold digests in exactly that format, and changing the scheme orphans
//!   every account already on disk. A salted, iterated scheme needs a
//!   store-format migration first.

pub mod store;

pub use store::{hash_password, AccountStore, StoreError, UserAccount, UserStore};
