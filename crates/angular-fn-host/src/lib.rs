//! Compiler-host integration for the Angular function-component transform.
//!
//! The transform itself is a pure function over one file's text (see the
//! `angular-fn-transformer` crate); this crate is the glue that splices it
//! into a compiler's file-resolution host:
//!
//! - [`AugmentedHost`] wraps an existing [`SourceHost`] and, when
//!   function-component support is enabled, answers `.ts` source requests
//!   with the transform's output instead of the raw file. All other
//!   operations delegate unchanged.
//! - [`HostOptions`] mirrors the build tool's plugin options
//!   (`supportFunctionComponents`, `isProd`).
//! - [`unconfigured`] produces the setup-guide diagnostic raised when the
//!   authoring symbol is used without the enabling flag.

mod error;
mod host;
mod options;

pub use error::{unconfigured, HostError, FEATURE_DISABLED_GUIDE};
pub use host::{AugmentedHost, ResourceKind, SourceHost};
pub use options::{FunctionComponentSupport, HostOptions};
