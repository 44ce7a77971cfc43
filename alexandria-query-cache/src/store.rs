use crate::types::Dependencies;
use alexandria::{exchange::OperationResult, utils::progressive_hash, GraphQLQuery};
use fnv::{FnvHashMap, FnvHashSet};
use parking_lot::Mutex;
use std::{any::Any, sync::Arc};

/// Document-level storage for query results: whole `ResponseData` values keyed
/// by operation key, plus an index of which cached operations involve which
/// `__typename`s (driving invalidation).
///
/// The inner locks protect individual reads and writes. A read-modify-write
/// spanning both (as `update_query` does) is not atomic; overlapping mutation
/// updates can lose one of the patches. Panels run one dialog at a time, which
/// keeps updates sequential in practice.
pub struct Store {
    results: Mutex<FnvHashMap<u64, Box<dyn Any + Send>>>,
    dependent_ops: Mutex<FnvHashMap<&'static str, FnvHashSet<u64>>>
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Store {
            results: Mutex::new(FnvHashMap::default()),
            dependent_ops: Mutex::new(FnvHashMap::default())
        }
    }

    /// Read the cached result for an operation key. Absence and a stored value
    /// of an unexpected shape both read as a miss, never as an error.
    pub fn read_query<Q: GraphQLQuery>(&self, key: u64) -> Option<Q::ResponseData> {
        let results = self.results.lock();
        results
            .get(&key)
            .and_then(|res| res.downcast_ref::<Q::ResponseData>())
            .cloned()
    }

    /// Store a fetched query result and index it under its involved types.
    pub fn write_query<Q: GraphQLQuery>(&self, result: &OperationResult<Q::ResponseData>) {
        let data = match result.response.data {
            Some(ref data) => data.clone(),
            None => return
        };
        self.results.lock().insert(result.key, Box::new(data));
        let mut dependent_ops = self.dependent_ops.lock();
        for involved_type in &result.meta.involved_types {
            dependent_ops
                .entry(*involved_type)
                .or_default()
                .insert(result.key);
        }
    }

    /// Run a custom update function against a cached query.
    ///
    /// Reads the current state for (query, variables), hands it to
    /// `updater_fn` and writes the returned state back under the same key.
    /// Returning `None` from the updater leaves the cache untouched. Both
    /// outcomes are recorded in `dependencies`.
    pub fn update_query<Q: GraphQLQuery, F>(
        &self,
        variables: Q::Variables,
        updater_fn: F,
        dependencies: &mut Dependencies
    ) where
        F: FnOnce(Option<Q::ResponseData>) -> Option<Q::ResponseData>
    {
        let (query, meta) = Q::build_query(variables);
        let key = progressive_hash(meta.query_key, &query.variables);
        dependencies.touched.insert(key);

        let current = self.read_query::<Q>(key);
        if let Some(updated) = updater_fn(current) {
            self.results.lock().insert(key, Box::new(updated));
            let mut dependent_ops = self.dependent_ops.lock();
            for involved_type in &meta.involved_types {
                dependent_ops.entry(*involved_type).or_default().insert(key);
            }
            dependencies.written.insert(key);
            log::debug!("update hook rewrote cached query {}", key);
        }
    }

    /// Drop every cached query involving one of `involved_types`, except the
    /// ones an update pass already handled. Returns the dropped keys so the
    /// exchange can rerun them.
    pub(crate) fn invalidate_types(
        &self,
        involved_types: &[&'static str],
        handled: &FnvHashSet<u64>
    ) -> FnvHashSet<u64> {
        let affected: FnvHashSet<u64> = {
            let dependent_ops = self.dependent_ops.lock();
            involved_types
                .iter()
                .filter_map(|involved_type| dependent_ops.get(involved_type))
                .flatten()
                .copied()
                .filter(|key| !handled.contains(key))
                .collect()
        };
        let mut results = self.results.lock();
        for key in &affected {
            results.remove(key);
        }
        affected
    }
}

/// A reference to the store used to run custom query updates
#[derive(Clone)]
pub struct QueryStore {
    pub(crate) store: Arc<Store>
}

impl QueryStore {
    /// Run a custom update function against the cache.
    ///
    /// # Parameters
    ///
    /// * `_query` - The [`GraphQLQuery`](../alexandria/trait.GraphQLQuery.html)
    /// object for the query you want to update.
    /// * `variables` - The `Variables` for the query you want to update. It
    /// will only update cached results for that set of variables.
    /// * `updater_fn` - The custom updater function. This takes in an
    /// `Option<ResponseData>` that represents the current state and should
    /// return an `Option<ResponseData>` that represents the new state. `None`
    /// means leaving the cache as it is.
    /// The current state is cloned, so feel free to modify and return it.
    /// * `dependencies` - This is passed into the update closure and should
    /// simply be passed through.
    pub fn update_query<'a, Q: GraphQLQuery, F>(
        &'a self,
        _query: Q,
        variables: Q::Variables,
        updater_fn: F,
        dependencies: &mut Dependencies
    ) where
        F: FnOnce(Option<Q::ResponseData>) -> Option<Q::ResponseData> + 'a
    {
        self.store
            .update_query::<Q, _>(variables, updater_fn, dependencies);
    }
}

impl From<Arc<Store>> for QueryStore {
    fn from(store: Arc<Store>) -> Self {
        Self { store }
    }
}
