//! Image download for one artwork.

use bytes::Bytes;
use common::{
    object_metadata::{ObjectId, image_download_filename},
    search_const::IMAGE_DOWNLOAD_MIME,
};

use crate::remote_utils::{CollectionApi, RemoteError, ResultCache};

#[derive(Debug, Clone, PartialEq)]
pub struct ImageDownload {
    pub filename: String,
    pub content_type: &'static str,
    pub data: Bytes,
}

/// `Ok(None)` when the object has no image or the image could not be
/// fetched; the download affordance is simply not offered then.
pub async fn download_image<C: CollectionApi>(
    cache: &ResultCache<C>,
    object_id: ObjectId,
) -> Result<Option<ImageDownload>, RemoteError> {
    let metadata = cache.cached_get_object(object_id).await?;
    let Some(url) = metadata.thumbnail_url() else {
        return Ok(None);
    };
    let Some(data) = cache.fetch_image_bytes(url).await else {
        return Ok(None);
    };
    Ok(Some(ImageDownload {
        filename: image_download_filename(object_id),
        content_type: IMAGE_DOWNLOAD_MIME,
        data,
    }))
}
