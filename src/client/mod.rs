//! Resource Fetcher
//!
//! Retrieves one collection resource from the OctoFit API.
//!
//! ## Architecture
//!
//! - **Transport**: performs the single GET and decodes the body as JSON
//! - **ResourceFetcher**: builds endpoint URLs and runs fetch, normalize, decode
//!
//! There is no retry, caching or deduplication. A failed fetch surfaces as a
//! [`FetchError`] and is left to the caller.

mod error;
mod fetcher;
mod transport;

pub use error::{FetchError, Fetched};
pub use fetcher::{endpoint_url, ResourceFetcher};
pub use transport::{HttpTransport, Transport};
