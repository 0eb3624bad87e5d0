use super::EntityMapping;
use crate::Result;

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, OnceLock, RwLock},
};

/// A type that describes its own storage mapping.
///
/// Usually implemented by `#[derive(Model)]`.
pub trait Entity: 'static {
    /// Builds the mapping. Called at most a handful of times per type;
    /// use [`resolve`] to get the cached result.
    fn describe() -> Result<EntityMapping>;
}

type Cache = RwLock<HashMap<TypeId, Arc<EntityMapping>>>;

fn cache() -> &'static Cache {
    static CACHE: OnceLock<Cache> = OnceLock::new();
    CACHE.get_or_init(Default::default)
}

/// Returns the mapping for `T`, building it on first use.
///
/// Concurrent first calls for the same type may each run
/// [`Entity::describe`]; the first result inserted wins and every caller
/// gets an equal mapping.
pub fn resolve<T: Entity>() -> Result<Arc<EntityMapping>> {
    let id = TypeId::of::<T>();

    if let Some(mapping) = read(id) {
        return Ok(mapping);
    }

    let mapping = Arc::new(T::describe()?);

    let mut cache = cache().write().unwrap_or_else(|poisoned| poisoned.into_inner());
    Ok(cache.entry(id).or_insert(mapping).clone())
}

fn read(id: TypeId) -> Option<Arc<EntityMapping>> {
    let cache = cache().read().unwrap_or_else(|poisoned| poisoned.into_inner());
    cache.get(&id).cloned()
}
