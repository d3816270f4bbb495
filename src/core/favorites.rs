use crate::models::FavoriteTask;

pub fn favorite_task_ids(favorites: &[FavoriteTask]) -> Vec<i64> {
    favorites.iter().map(|f| f.task_number).collect()
}

pub fn is_task_favorite(ids: &[i64], task_id: i64) -> bool {
    ids.contains(&task_id)
}
