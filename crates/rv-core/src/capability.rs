//! Shared alias for the capability traits.
//!
//! The compiler and analyzer are opaque collaborators modeled as traits so
//! tests can substitute deterministic fakes for the real toolchains. Their
//! methods return boxed futures so implementations stay object-friendly and
//! batch builds can be spawned onto the runtime.

use std::future::Future;
use std::pin::Pin;

/// Boxed, sendable future returned by capability trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
