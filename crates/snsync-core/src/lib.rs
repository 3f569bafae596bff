//! snsync core library
//!
//! This crate provides the core functionality for snsync, a tool that keeps
//! a local text file in sync with a single field on a remote instance record
//! (a ticketing/CMDB platform speaking a JSONv2-style API).
//!
//! # Architecture
//!
//! Sync targets are described by directives embedded in the file itself
//! (`__fileURL`, `__fieldName`, `__authentication`). Before a push, the
//! conflict resolver compares three content fingerprints - the stored
//! baseline from the last successful push, the server's current copy and
//! the pending local content - and only a genuine divergence asks the user
//! to confirm an overwrite.
//!
//! # Modules
//!
//! - `sync`: push/pull orchestration (main entry point)
//! - `resolver`: three-way conflict detection for pushes
//! - `directive`: embedded directive parsing
//! - `credentials`: Basic-Auth token capture and lookup
//! - `fingerprint`: content hashing
//! - `settings`: persisted key-value state (tokens, baselines)
//! - `transport`: HTTP transport
//! - `api`: remote JSONv2 URL shaping and envelope parsing
//! - `config`: application configuration

pub mod api;
pub mod config;
pub mod credentials;
pub mod directive;
pub mod error;
pub mod fingerprint;
pub mod resolver;
pub mod settings;
pub mod sync;
pub mod transport;

pub use config::Config;
pub use directive::Directives;
pub use error::SyncError;
pub use resolver::PushCheck;
pub use settings::{Settings, SettingsError};
pub use sync::{Confirm, PullOutcome, PushOutcome};
pub use transport::{HttpTransport, Transport, TransportError};
