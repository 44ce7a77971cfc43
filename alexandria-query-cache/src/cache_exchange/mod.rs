//! Contains the exchange factory and implementation. The factory is the only
//! thing needed for most users and is reexported from the root.

use crate::{
    store::Store,
    types::{Dependencies, QueryCacheExtension},
    QueryStore
};
use alexandria::{
    exchange::{
        Client, Exchange, ExchangeFactory, ExchangeResult, Operation, OperationResult,
        OperationType
    },
    DebugInfo, GraphQLQuery, RequestPolicy, Response, ResultSource
};
use std::sync::Arc;

#[cfg(test)]
mod tests;

/// The query cache exchange. Stores whole query results by operation key.
///
/// Mutations run their attached
/// [update hook](../struct.QueryCacheExtension.html#method.update) against the
/// store first; cached queries the hook didn't handle and that share a type
/// with the mutation are invalidated and refetched on their next run.
#[derive(Default)]
pub struct QueryCacheExchange;

impl QueryCacheExchange {
    /// Create a new cache exchange.
    pub fn new() -> Self {
        Self
    }
}

impl<TNext: Exchange> ExchangeFactory<TNext> for QueryCacheExchange {
    type Output = QueryCacheImpl<TNext>;

    fn build(self, next: TNext) -> QueryCacheImpl<TNext> {
        QueryCacheImpl {
            next,
            store: Arc::new(Store::new())
        }
    }
}

/// The implementation of the query cache. Exposed in case someone needs it,
/// but most users shouldn't.
pub struct QueryCacheImpl<TNext: Exchange> {
    next: TNext,
    store: Arc<Store>
}

fn should_cache<Q: GraphQLQuery>(operation: &Operation<Q::Variables>) -> bool {
    operation.meta.operation_type == OperationType::Query
        && operation.options.request_policy != RequestPolicy::NetworkOnly
}

impl<TNext: Exchange> QueryCacheImpl<TNext> {
    fn after_query<Q: GraphQLQuery>(&self, result: &OperationResult<Q::ResponseData>) {
        if result.response.errors.is_none() {
            self.store.write_query::<Q>(result);
        }
    }

    fn after_mutation<Q: GraphQLQuery, C: Client>(
        &self,
        result: &OperationResult<Q::ResponseData>,
        client: &C,
        extension: Option<&QueryCacheExtension>
    ) {
        let mut dependencies = Dependencies::new();

        // Update hooks run against the pre-invalidation snapshot, so a list
        // patch sees the list it's patching.
        if let Some(updater) = extension.and_then(|ext| ext.update.as_ref()) {
            updater(
                &result.response.data,
                QueryStore::from(self.store.clone()),
                &mut dependencies
            );
        }

        let invalidated = self
            .store
            .invalidate_types(&result.meta.involved_types, &dependencies.touched);
        log::debug!(
            "mutation {} patched {} and invalidated {} cached queries",
            result.meta.query_key,
            dependencies.written.len(),
            invalidated.len()
        );

        for key in dependencies.written.iter().chain(invalidated.iter()) {
            if *key != result.key {
                client.rerun_query(*key);
            }
        }
    }
}

#[async_trait]
impl<TNext: Exchange> Exchange for QueryCacheImpl<TNext> {
    async fn run<Q: GraphQLQuery, C: Client>(
        &self,
        operation: Operation<Q::Variables>,
        client: C
    ) -> ExchangeResult<Q::ResponseData> {
        let extension = operation
            .options
            .extensions
            .as_ref()
            .and_then(|ext| ext.get::<QueryCacheExtension>())
            .cloned();

        if should_cache::<Q>(&operation) {
            if let Some(cached) = self.store.read_query::<Q>(operation.key) {
                log::trace!("operation {} served from cache", operation.key);
                let response = OperationResult {
                    key: operation.key,
                    meta: operation.meta,
                    response: Response {
                        debug_info: Some(DebugInfo {
                            did_dedup: false,
                            source: ResultSource::Cache
                        }),
                        data: Some(cached),
                        errors: None
                    }
                };
                return Ok(response);
            }
            let res = self.next.run::<Q, _>(operation, client).await?;
            self.after_query::<Q>(&res);
            Ok(res)
        } else {
            let operation_type = operation.meta.operation_type.clone();
            let res = self.next.run::<Q, _>(operation, client.clone()).await?;
            if operation_type == OperationType::Mutation && res.response.data.is_some() {
                self.after_mutation::<Q, _>(&res, &client, extension.as_ref());
            }
            Ok(res)
        }
    }
}
