//! Networking modules for the activities REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies their failures, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
