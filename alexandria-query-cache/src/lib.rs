//! A document-level query cache for the `alexandria` client.
//!
//! Query results are cached whole, keyed by their operation key. The
//! difference to the basic built-in cache exchange is what happens after a
//! mutation: instead of unconditionally throwing away every cached query that
//! shares a type with the mutation, this cache first runs the mutation's
//! [update hook](./struct.QueryCacheExtension.html#method.update) (if one is
//! attached to the operation), letting application code patch affected lists
//! in place. Only queries the hook didn't handle fall back to eager
//! invalidation and a refetch.
//!
//! The canonical use case is appending a just-created entity to a cached list
//! query so every view showing that list picks it up without another network
//! round trip.

#[macro_use]
extern crate async_trait;

mod cache_exchange;
mod store;
mod types;

pub use cache_exchange::QueryCacheExchange;
pub use store::{QueryStore, Store};
pub use types::{Dependencies, QueryCacheExtension};
