use crate::QueryStore;
use alexandria::GraphQLQuery;
use fnv::FnvHashSet;
use std::{any::Any, sync::Arc};

/// The cache keys an update pass has interacted with. Threaded through every
/// [update_query](./struct.QueryStore.html#method.update_query) call so the
/// exchange knows which queries were handled (and must not be invalidated)
/// and which were rewritten (and must be rerun for subscribers).
#[derive(Debug, Default)]
pub struct Dependencies {
    pub(crate) touched: FnvHashSet<u64>,
    pub(crate) written: FnvHashSet<u64>
}

impl Dependencies {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// How many cached queries the pass has rewritten so far.
    pub fn writes(&self) -> usize {
        self.written.len()
    }
}

/// A query extension that lets you pass additional logic into the cache.
#[derive(Default, Clone)]
pub struct QueryCacheExtension {
    #[allow(clippy::type_complexity)]
    pub(crate) update:
        Option<Arc<dyn Fn(&(dyn Any + Send), QueryStore, &mut Dependencies) + Send + Sync>>
}

impl QueryCacheExtension {
    /// Create a new query extension with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// A custom updater function to run against related queries, such as lists
    /// of the same entity. The function has 3 parameters:
    ///
    /// * `current_data` - The returned data of the mutation you're running.
    /// * `store` - A [`QueryStore`](./struct.QueryStore.html) object used to
    /// run custom update logic against other queries.
    /// * `dependencies` - This must be passed through to the `QueryStore`
    /// without modification.
    ///
    /// # Example
    ///
    /// ```
    /// use alexandria_query_cache::QueryCacheExtension;
    /// use alexandria_bookstore::queries::create_author::CreateAuthor;
    /// use alexandria_bookstore::queries::get_authors::{get_authors, GetAuthors};
    ///
    /// let extension = QueryCacheExtension::new()
    ///     .update::<CreateAuthor, _>(|current_data, store, dependencies| {
    ///         let author = match current_data {
    ///             Some(data) => data.create_author.clone(),
    ///             None => return
    ///         };
    ///         store.update_query(GetAuthors, get_authors::Variables, move |data| {
    ///             let mut data = data?;
    ///             data.authors.push(get_authors::GetAuthorsAuthors {
    ///                 id: author.id,
    ///                 name: author.name
    ///             });
    ///             Some(data)
    ///         }, dependencies)
    ///     });
    /// ```
    pub fn update<Q: GraphQLQuery, F>(mut self, update: F) -> Self
    where
        F: Fn(&Option<Q::ResponseData>, QueryStore, &mut Dependencies) + Send + Sync + 'static
    {
        self.update = Some(Arc::new(move |data, store, dependencies| {
            let data = data
                .downcast_ref::<Option<Q::ResponseData>>()
                .expect("update hook invoked with the data of a different operation");
            update(data, store, dependencies);
        }));
        self
    }
}
