//! Resources domain module.
//!
//! Resources are URI-addressable documents on the server: tracks, users,
//! playlists and albums, addressed as `audius://<kind>/<id>`.
//!
//! ## Architecture
//!
//! - `uri.rs` - Typed resource URIs and parsing
//! - `registry.rs` - Resource templates advertised by the server
//! - `error.rs` - Resource-specific error types

mod error;
mod registry;
mod uri;

pub use error::ResourceError;
pub use registry::get_all_resource_templates;
pub use uri::{ResourceKind, ResourceUri, SCHEME};
