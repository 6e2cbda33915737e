use common::favorites::FavoritesList;

use crate::session::Session;

pub fn list_favorites(session: &Session) -> FavoritesList {
    FavoritesList { favorites: session.favorites.iter().cloned().collect() }
}

/// Irreversible for the session; export first to keep them.
pub fn clear_favorites(session: &mut Session) -> usize {
    let cleared = session.favorites.len();
    session.favorites.clear();
    cleared
}

#[cfg(test)]
mod tests {
    use common::object_metadata::{ObjectId, ObjectMetadata};

    use super::*;

    #[test]
    fn lists_in_saved_order_and_clears() {
        let mut session = Session::default();
        for id in [3, 1, 2] {
            session.favorites.add(ObjectId(id), ObjectMetadata { object_id: ObjectId(id), ..Default::default() });
        }
        let listed: Vec<ObjectId> = list_favorites(&session).favorites.iter().map(|m| m.object_id).collect();
        assert_eq!(listed, vec![ObjectId(3), ObjectId(1), ObjectId(2)]);

        assert_eq!(clear_favorites(&mut session), 3);
        assert!(list_favorites(&session).favorites.is_empty());
        assert_eq!(clear_favorites(&mut session), 0);
    }
}
