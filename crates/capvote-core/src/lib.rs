//! Shared ambient stack for capvote services: tracing, health endpoints,
//! request-id middleware, serde helpers, and session-cookie plumbing.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod session;
pub mod tracing;
