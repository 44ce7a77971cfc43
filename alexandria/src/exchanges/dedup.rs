use crate::{
    types::{Client, Exchange, ExchangeFactory, ExchangeResult, Operation, OperationResult},
    GraphQLQuery, OperationType
};
use futures::channel::oneshot::{self, Sender};
use parking_lot::Mutex;
use std::{
    any::Any,
    collections::HashMap,
    error::Error,
    fmt,
    sync::Arc
};

// Results have to be type erased to live in one map next to each other;
// listeners downcast them back, which can't fail because identical keys imply
// identical queries.
type ErasedResult = Result<Arc<dyn Any + Send + Sync>, DedupError>;
type InFlightCache = Arc<Mutex<HashMap<u64, Vec<Sender<ErasedResult>>>>>;

/// An exchange that combines identical in-flight operations into a single
/// request, handing every waiter a copy of the one result.
pub struct DedupExchange; // Factory

pub struct DedupExchangeImpl<TNext: Exchange> {
    next: TNext,
    in_flight_operations: InFlightCache
}

impl<TNext: Exchange> ExchangeFactory<TNext> for DedupExchange {
    type Output = DedupExchangeImpl<TNext>;

    fn build(self, next: TNext) -> Self::Output {
        DedupExchangeImpl {
            next,
            in_flight_operations: InFlightCache::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct DedupError;
impl Error for DedupError {}
impl fmt::Display for DedupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "the deduplicated original of this operation failed")
    }
}

fn should_skip<Q: GraphQLQuery>(operation: &Operation<Q::Variables>) -> bool {
    let op_type = &operation.meta.operation_type;
    op_type != &OperationType::Query && op_type != &OperationType::Mutation
}

fn make_deduped_result<Q: GraphQLQuery>(res: &ExchangeResult<Q::ResponseData>) -> ErasedResult {
    match res {
        Ok(res) => {
            let mut res = res.clone();
            if let Some(ref mut debug_info) = res.response.debug_info {
                debug_info.did_dedup = true;
            }
            Ok(Arc::new(res))
        }
        Err(_) => Err(DedupError)
    }
}

impl<TNext: Exchange> DedupExchangeImpl<TNext> {
    fn notify_listeners<Q: GraphQLQuery>(&self, key: u64, res: &ExchangeResult<Q::ResponseData>) {
        let to_be_notified = {
            let mut cache = self.in_flight_operations.lock();
            cache.remove(&key).unwrap_or_default()
        };
        log::trace!(
            "operation {} deduplicated {} identical requests",
            key,
            to_be_notified.len()
        );
        for sender in to_be_notified {
            let _ = sender.send(make_deduped_result::<Q>(res));
        }
    }
}

#[async_trait]
impl<TNext: Exchange> Exchange for DedupExchangeImpl<TNext> {
    async fn run<Q: GraphQLQuery, C: Client>(
        &self,
        operation: Operation<Q::Variables>,
        client: C
    ) -> ExchangeResult<Q::ResponseData> {
        if should_skip::<Q>(&operation) {
            return self.next.run::<Q, _>(operation, client).await;
        }

        let key = operation.key;
        let rcv = {
            let mut cache = self.in_flight_operations.lock();
            if let Some(listeners) = cache.get_mut(&key) {
                let (sender, receiver) = oneshot::channel();
                listeners.push(sender);
                Some(receiver)
            } else {
                cache.insert(key, Vec::new());
                None
            }
        };

        if let Some(rcv) = rcv {
            let res = match rcv.await {
                Ok(Ok(res)) => res,
                _ => return Err(DedupError.into())
            };
            let res = res
                .downcast::<OperationResult<Q::ResponseData>>()
                .map_err(|_| DedupError)?;
            Ok((*res).clone())
        } else {
            let res = self.next.run::<Q, _>(operation, client).await;
            self.notify_listeners::<Q>(key, &res);
            res
        }
    }
}
