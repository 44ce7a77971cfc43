use crate::{
    client::ClientImpl, types::Observable, Exchange, GraphQLQuery, QueryError, QueryOptions,
    Response
};
use futures::{channel::mpsc::Sender, SinkExt};
use stable_vec::StableVec;
use std::{any::Any, future::Future, pin::Pin, sync::Arc};

pub type OperationObservable<Q, M> =
    Observable<Result<Response<<Q as GraphQLQuery>::ResponseData>, QueryError>, M>;

pub(crate) struct Subscription {
    pub(crate) listeners: StableVec<Sender<Arc<dyn Any + Send + Sync>>>,
    // This captures the type and variables of the query without requiring
    // generics, so we can store it in a hashmap
    pub(crate) rerun: Arc<
        dyn Fn() -> Pin<Box<dyn Future<Output = Arc<dyn Any + Send + Sync>> + Send>> + Send + Sync
    >
}

pub(crate) async fn subscribe_with_options<Q: GraphQLQuery + 'static, M: Exchange>(
    client: &Arc<ClientImpl<M>>,
    _query: Q,
    variables: Q::Variables,
    options: QueryOptions
) -> OperationObservable<Q, M> {
    let (query, meta) = Q::build_query(variables);
    let (mut sender, receiver) = futures::channel::mpsc::channel(8);

    let operation = client.create_request_operation::<Q>(query, meta, options);
    let key = operation.key;

    let observable = {
        let mut subscriptions = client.active_subscriptions.lock();
        let index = if let Some(subscription) = subscriptions.get_mut(&key) {
            subscription.listeners.push(sender.clone())
        } else {
            let client = client.clone();
            let operation = operation.clone();
            let subscription = Subscription {
                listeners: vec![sender.clone()].into(),
                rerun: Arc::new(move || {
                    let client = client.clone();
                    let operation = operation.clone();

                    Box::pin(async move {
                        let res = client.execute_request_operation::<Q>(operation).await;
                        let res_boxed: Arc<dyn Any + Send + Sync> = Arc::new(res);
                        res_boxed
                    })
                })
            };
            subscriptions.insert(key, subscription);
            0
        };
        Observable::new(key, receiver, client.clone(), index)
    };

    let res = client.execute_request_operation::<Q>(operation).await;
    let initial: Arc<dyn Any + Send + Sync> = Arc::new(res);
    let _ = sender.send(initial).await;
    observable
}

pub(crate) fn rerun_query<M: Exchange>(client: &Arc<ClientImpl<M>>, id: u64) {
    let client = client.clone();
    let fut = async move {
        let rerun = {
            let subscriptions = client.active_subscriptions.lock();
            subscriptions.get(&id).map(|sub| sub.rerun.clone())
        };
        let value = if let Some(rerun) = rerun {
            rerun().await
        } else {
            return;
        };

        // Clone the senders out of the lock, channel sends await.
        let listeners: Vec<_> = {
            let subscriptions = client.active_subscriptions.lock();
            subscriptions
                .get(&id)
                .map(|sub| sub.listeners.values().cloned().collect())
                .unwrap_or_default()
        };
        for mut listener in listeners {
            let _ = listener.send(value.clone()).await;
        }
    };
    spawn(fut);
}

fn spawn(fut: impl Future<Output = ()> + Send + 'static) {
    tokio::spawn(fut);
}
