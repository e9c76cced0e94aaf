//! # webcall
//!
//! Builder for web service request targets.
//!
//! This crate encapsulates the string handling behind an HTTP request
//! target: a path template with `{name}` placeholders, substituted path
//! values, and ordered query parameters, all percent-encoded correctly for
//! the part of the URL they land in. It produces a string (or a joined
//! [`url::Url`]); sending the request is the caller's business.
//!
//! ## Modules
//!
//! - [`call`] - The [`WebCall`] builder
//! - [`encode`] - Path and query percent-encoding
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use webcall::WebCall;
//!
//! let mut call = WebCall::new("/vms/{uuid}/snapshots");
//! call.set_path_value("uuid", "ba1c6c54")?;
//! call.set_query_value("state", "running")?;
//!
//! assert_eq!(call.web_command()?, "/vms/ba1c6c54/snapshots?state=running");
//! # Ok::<(), webcall::Error>(())
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod call;
pub mod encode;
pub mod error;

// Re-export commonly used types
pub use call::WebCall;
pub use error::{ArgumentKind, Error, Result};
