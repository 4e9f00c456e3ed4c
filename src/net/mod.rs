//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP calls and response envelopes; `types` defines the
//! shared wire schema the pages consume.

pub mod api;
pub mod types;
