//! Constants shared by every layer of the explorer.

/// Page sizes offered by the "results per page" selector.
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [6, 9, 12, 18];
pub const DEFAULT_PAGE_SIZE: u64 = 12;

pub const DEFAULT_MET_API_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 4 * 3600;

pub const FAVORITES_EXPORT_FILENAME: &str = "met_favorites.json";
pub const FAVORITES_EXPORT_MIME: &str = "application/json";
pub const IMAGE_DOWNLOAD_MIME: &str = "image/jpeg";
