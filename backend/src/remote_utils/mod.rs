//! Remote collection access: the HTTP client and the result cache in front of it.

pub mod met_client;
pub mod remote_error;
pub mod result_cache;

pub use met_client::{CollectionApi, MetClient};
pub use remote_error::RemoteError;
pub use result_cache::{ResultCache, TtlCache};
