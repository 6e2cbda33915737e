//! Object detail and image download operations.

mod get_object_details;
pub use get_object_details::get_object_details;

mod download_image;
pub use download_image::{ImageDownload, download_image};
