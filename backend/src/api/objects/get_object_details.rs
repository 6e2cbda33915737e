//! Detail view lookup for one artwork.

use common::{object_metadata::ObjectId, search_result::ObjectDetails};

use crate::{
    remote_utils::{CollectionApi, RemoteError, ResultCache},
    session::Session,
};

pub async fn get_object_details<C: CollectionApi>(
    cache: &ResultCache<C>,
    session: &Session,
    object_id: ObjectId,
) -> Result<ObjectDetails, RemoteError> {
    let metadata = cache.cached_get_object(object_id).await?;
    Ok(ObjectDetails {
        metadata: metadata.as_ref().clone(),
        is_favorite: session.favorites.contains(object_id),
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::FakeCollection;

    #[tokio::test]
    async fn details_reuse_the_gallery_lookup() {
        let cache = ResultCache::new(FakeCollection::new(), Duration::from_secs(60));
        let mut session = Session::default();
        cache.cached_get_object(ObjectId(11)).await.unwrap();

        let details = get_object_details(&cache, &session, ObjectId(11)).await.unwrap();
        assert_eq!(details.metadata, FakeCollection::generated_object(ObjectId(11)));
        assert!(!details.is_favorite);
        assert_eq!(cache.client().object_calls(), 1);

        session.favorites.add(ObjectId(11), details.metadata.clone());
        assert!(get_object_details(&cache, &session, ObjectId(11)).await.unwrap().is_favorite);
    }

    #[tokio::test]
    async fn remote_failure_is_reported() {
        let cache = ResultCache::new(FakeCollection::new().with_failing_object(ObjectId(4)), Duration::from_secs(60));
        let session = Session::default();
        assert!(get_object_details(&cache, &session, ObjectId(4)).await.is_err());
    }
}
