use crate::{
    types::{Client, Exchange, ExchangeFactory, ExchangeResult, Operation, OperationResult},
    DebugInfo, GraphQLQuery, OperationMeta, OperationType, QueryError, RequestPolicy, Response,
    ResultSource
};
use parking_lot::Mutex;
use std::{
    any::Any,
    collections::{HashMap, HashSet},
    sync::Arc
};

type ResultCache = Arc<Mutex<HashMap<u64, Box<dyn Any + Send>>>>;
type OperationCache = Arc<Mutex<HashMap<&'static str, HashSet<u64>>>>;

/// A very simple cache that stores whole query results and eagerly throws them
/// away again whenever a mutation touches any of the same types.
pub struct CacheExchange;
impl<TNext: Exchange> ExchangeFactory<TNext> for CacheExchange {
    type Output = CacheExchangeImpl<TNext>;

    fn build(self, next: TNext) -> Self::Output {
        CacheExchangeImpl {
            result_cache: Arc::new(Mutex::new(HashMap::new())),
            operation_cache: Arc::new(Mutex::new(HashMap::new())),

            next
        }
    }
}

pub struct CacheExchangeImpl<TNext: Exchange> {
    result_cache: ResultCache,
    operation_cache: OperationCache,

    next: TNext
}

#[inline]
fn should_skip<Q: GraphQLQuery>(operation: &Operation<Q::Variables>) -> bool {
    let operation_type = &operation.meta.operation_type;
    operation_type != &OperationType::Query && operation_type != &OperationType::Mutation
}

impl<TNext: Exchange> CacheExchangeImpl<TNext> {
    fn is_operation_cached<Q: GraphQLQuery>(&self, operation: &Operation<Q::Variables>) -> bool {
        let OperationMeta { operation_type, .. } = &operation.meta;
        let key = operation.key;
        let request_policy = &operation.options.request_policy;

        operation_type == &OperationType::Query
            && request_policy != &RequestPolicy::NetworkOnly
            && (request_policy == &RequestPolicy::CacheOnly
                || self.result_cache.lock().contains_key(&key))
    }

    fn after_query<Q: GraphQLQuery>(
        &self,
        operation_result: OperationResult<Q::ResponseData>
    ) -> Result<OperationResult<Q::ResponseData>, QueryError> {
        let data = match operation_result.response.data {
            Some(ref data) => data.clone(),
            None => return Ok(operation_result)
        };

        let OperationMeta { involved_types, .. } = &operation_result.meta;
        let key = operation_result.key;

        {
            let mut result_cache = self.result_cache.lock();
            result_cache.insert(key, Box::new(data));
        }
        {
            let mut operation_cache = self.operation_cache.lock();
            for involved_type in involved_types {
                operation_cache
                    .entry(*involved_type)
                    .and_modify(|entry| {
                        entry.insert(key);
                    })
                    .or_insert_with(|| {
                        let mut set = HashSet::with_capacity(1);
                        set.insert(key);
                        set
                    });
            }
        }

        Ok(operation_result)
    }

    fn after_mutation<Q: GraphQLQuery, C: Client>(
        &self,
        operation_result: OperationResult<Q::ResponseData>,
        client: C
    ) -> Result<OperationResult<Q::ResponseData>, QueryError> {
        if operation_result.response.data.is_none() {
            return Ok(operation_result);
        }

        let OperationMeta { involved_types, .. } = &operation_result.meta;
        let key = operation_result.key;

        let ops_to_remove: HashSet<u64> = {
            let cache = self.operation_cache.lock();
            let mut ops = HashSet::new();
            for involved_type in involved_types {
                if let Some(ops_for_type) = cache.get(involved_type) {
                    ops.extend(ops_for_type)
                }
            }
            ops
        };
        log::debug!(
            "mutation {} invalidated {} cached queries",
            operation_result.meta.query_key,
            ops_to_remove.len()
        );
        {
            let mut cache = self.result_cache.lock();
            for op in ops_to_remove.iter() {
                cache.remove(op);
            }
        }
        for op in ops_to_remove {
            if op != key {
                client.rerun_query(op);
            }
        }
        Ok(operation_result)
    }
}

#[async_trait]
impl<TNext: Exchange> Exchange for CacheExchangeImpl<TNext> {
    async fn run<Q: GraphQLQuery, C: Client>(
        &self,
        operation: Operation<Q::Variables>,
        client: C
    ) -> ExchangeResult<Q::ResponseData> {
        if should_skip::<Q>(&operation) {
            return self.next.run::<Q, _>(operation, client).await;
        }

        if !self.is_operation_cached::<Q>(&operation) {
            let res = self.next.run::<Q, _>(operation, client.clone()).await?;

            match res.meta.operation_type {
                OperationType::Query => self.after_query::<Q>(res),
                OperationType::Mutation => self.after_mutation::<Q, _>(res, client),
                _ => Ok(res)
            }
        } else {
            let key = operation.key;

            let cached_result = {
                let cache = self.result_cache.lock();
                cache
                    .get(&key)
                    .and_then(|res| res.downcast_ref::<Q::ResponseData>())
                    .cloned()
            };

            if let Some(cached) = cached_result {
                log::trace!("operation {} served from cache", key);
                let result = OperationResult {
                    key,
                    meta: operation.meta,
                    response: Response {
                        debug_info: Some(DebugInfo {
                            source: ResultSource::Cache,
                            did_dedup: false
                        }),
                        data: Some(cached),
                        errors: None
                    }
                };
                Ok(result)
            } else {
                self.next.run::<Q, _>(operation, client).await
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::CacheExchange;
    use crate::{
        testing::{
            add_note, get_notes, make_operation, AddNote, FakeFetchExchange, GetNotes, NullClient
        },
        types::{Exchange, ExchangeFactory},
        RequestPolicy, ResultSource
    };

    #[tokio::test]
    async fn serves_repeated_queries_from_cache() {
        let exchange = CacheExchange.build(FakeFetchExchange::with_notes(vec![get_notes::note(
            "1", "first"
        )]));

        let op = make_operation(GetNotes, get_notes::Variables, RequestPolicy::CacheFirst);
        let first = exchange
            .run::<GetNotes, _>(op.clone(), NullClient)
            .await
            .unwrap();
        assert_eq!(
            first.response.debug_info.unwrap().source,
            ResultSource::Network
        );

        let second = exchange.run::<GetNotes, _>(op, NullClient).await.unwrap();
        assert_eq!(
            second.response.debug_info.unwrap().source,
            ResultSource::Cache
        );
    }

    #[tokio::test]
    async fn mutations_invalidate_queries_with_shared_types() {
        let exchange = CacheExchange.build(FakeFetchExchange::with_notes(vec![get_notes::note(
            "1", "first"
        )]));

        let query_op = make_operation(GetNotes, get_notes::Variables, RequestPolicy::CacheFirst);
        exchange
            .run::<GetNotes, _>(query_op.clone(), NullClient)
            .await
            .unwrap();

        let mutation_op = make_operation(
            AddNote,
            add_note::Variables {
                text: "second".to_string()
            },
            RequestPolicy::NetworkOnly
        );
        exchange
            .run::<AddNote, _>(mutation_op, NullClient)
            .await
            .unwrap();

        // The cached notes used the same involved type, so the query goes back
        // to the network.
        let after = exchange
            .run::<GetNotes, _>(query_op, NullClient)
            .await
            .unwrap();
        assert_eq!(
            after.response.debug_info.unwrap().source,
            ResultSource::Network
        );
    }
}
