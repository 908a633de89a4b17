//! Shared configuration types for Gatehouse.
//!
//! The verifier crate consumes these at construction time only; nothing in
//! here is touched on the per-request path.

pub mod config;

pub use config::AuthConfig;
