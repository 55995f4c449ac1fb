use std::collections::HashSet;

use crate::models::Dog;

/// First occurrence of each id not already in `seen`, capped at `limit`
pub fn unique_ids<I>(ids: I, seen: &HashSet<String>, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut taken = HashSet::new();
    ids.into_iter()
        .filter(|id| !seen.contains(id) && taken.insert(id.clone()))
        .take(limit)
        .collect()
}

/// Merges `incoming` into `dogs` by id; a known id keeps its slot and takes the new record
pub fn merge_by_id(dogs: &mut Vec<Dog>, incoming: Vec<Dog>) {
    for dog in incoming {
        match dogs.iter_mut().find(|existing| existing.id == dog.id) {
            Some(existing) => *existing = dog,
            None => dogs.push(dog),
        }
    }
}
