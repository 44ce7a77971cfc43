use crate::{GraphQLQuery, QueryBody, QueryError};
#[cfg(feature = "observable")]
use crate::client::ClientImpl;
#[cfg(feature = "observable")]
use futures::{channel::mpsc::Receiver, task::Context, Stream};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
#[cfg(feature = "observable")]
use std::{any::Any, marker::PhantomData, pin::Pin, task::Poll};
use url::Url;

pub type ExchangeResult<R> = Result<OperationResult<R>, QueryError>;

#[async_trait]
pub trait Exchange: Send + Sync + 'static {
    async fn run<Q: GraphQLQuery, C: Client>(
        &self,
        operation: Operation<Q::Variables>,
        client: C
    ) -> ExchangeResult<Q::ResponseData>;
}

pub trait ExchangeFactory<TNext: Exchange> {
    type Output: Exchange;

    fn build(self, next: TNext) -> Self::Output;
}

/// The slice of the client exchanges get to see. Cache-style exchanges use it
/// to rerun queries whose cached results they changed, so active subscribers
/// get the new data pushed to them.
pub trait Client: Clone + Send + Sync + 'static {
    fn rerun_query(&self, query_key: u64);
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPolicy {
    CacheFirst,
    CacheOnly,
    NetworkOnly,
    CacheAndNetwork
}

/// A header name/value pair passed to the fetch exchange.
pub struct HeaderPair(pub &'static str, pub String);

#[derive(Clone, Debug)]
pub struct OperationMeta {
    /// Static key of the operation, unique per query document.
    pub query_key: u32,
    pub operation_type: OperationType,
    /// The `__typename`s of every type this operation touches. Used by cache
    /// exchanges for invalidation.
    pub involved_types: Vec<&'static str>
}

#[derive(Clone)]
pub struct OperationOptions {
    pub url: Url,
    pub extra_headers: Option<Arc<dyn Fn() -> Vec<HeaderPair> + Send + Sync>>,
    pub request_policy: RequestPolicy,
    pub extensions: Option<Extensions>
}

#[derive(Clone)]
pub struct Operation<V: Serialize + Clone + Send + Sync> {
    /// Unique key of (query document, variables). Two operations with the same
    /// key are the same fetch as far as caching is concerned.
    pub key: u64,
    pub meta: OperationMeta,
    pub query: QueryBody<V>,
    pub options: OperationOptions
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ResultSource {
    Cache,
    Network
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DebugInfo {
    pub source: ResultSource,
    pub did_dedup: bool
}

#[derive(Clone, Debug)]
pub struct OperationResult<R: DeserializeOwned + Send + Sync + Clone> {
    pub key: u64,
    pub meta: OperationMeta,
    pub response: crate::Response<R>
}

/// Per-query extension values, looked up by type. Exchanges define their own
/// extension types and read them off the operation options.
pub use type_map::concurrent::TypeMap as ExtensionMap;

pub type Extensions = Arc<ExtensionMap>;

#[derive(Default, Clone)]
pub struct QueryOptions {
    pub url: Option<Url>,
    pub extra_headers: Option<Arc<dyn Fn() -> Vec<HeaderPair> + Send + Sync>>,
    pub request_policy: Option<RequestPolicy>,
    pub extensions: Option<Extensions>
}

/// A stream of results for a subscribed query. New results are pushed whenever
/// an exchange reruns the query, until the observable is dropped.
#[cfg(feature = "observable")]
pub struct Observable<T, M: Exchange> {
    inner: Receiver<Arc<dyn Any + Send + Sync>>,
    client: Arc<ClientImpl<M>>,
    key: u64,
    index: usize,
    t: PhantomData<T>
}

#[cfg(feature = "observable")]
impl<T: Clone, M: Exchange> Observable<T, M> {
    pub(crate) fn new(
        key: u64,
        inner: Receiver<Arc<dyn Any + Send + Sync>>,
        client: Arc<ClientImpl<M>>,
        index: usize
    ) -> Self {
        Observable {
            inner,
            client,
            key,
            index,
            t: PhantomData
        }
    }
}

#[cfg(feature = "observable")]
impl<T, M: Exchange> Stream for Observable<T, M>
where
    T: 'static + Unpin + Clone
{
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let inner = &mut self.get_mut().inner;
        let poll = <Receiver<Arc<dyn Any + Send + Sync>> as Stream>::poll_next(Pin::new(inner), cx);
        match poll {
            Poll::Ready(Some(boxed)) => match boxed.downcast_ref::<T>() {
                Some(cast) => Poll::Ready(Some(cast.clone())),
                // A result of a different type means the subscription list got
                // crossed up. Ending the stream beats handing out garbage.
                None => Poll::Ready(None)
            },
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending
        }
    }
}

#[cfg(feature = "observable")]
impl<T, M: Exchange> Drop for Observable<T, M> {
    fn drop(&mut self) {
        self.client.clear_observable(self.key, self.index)
    }
}
