//! The admin client for the bookstore catalog.
//!
//! Three tables (books, authors, publishers) are served by a remote GraphQL
//! API. This crate provides the pieces the views are built from:
//!
//! * [queries](./queries/index.html) - typed operation modules for the
//! bookstore schema
//! * [panels](./panels/index.html) - per-table state holders: the draft being
//! edited, which dialog is open, change notification for the view layer, and
//! the save flows that run the mutations
//!
//! Created entities are patched into the cached list queries through the
//! query cache's update hooks, so after a create every view showing the list
//! picks the new row up straight from the cache. See
//! [merge_created_book](./panels/fn.merge_created_book.html) and friends.

pub mod panels;
pub mod queries;

use alexandria::exchange::Exchange;
use alexandria::exchanges::{DedupExchange, FetchExchange};
use alexandria::{Client, ClientBuilder};
use alexandria_query_cache::QueryCacheExchange;

/// Build the client the admin panels use: fetch at the bottom, the patching
/// query cache above it, dedup on top.
///
/// ```no_run
/// # async fn run() {
/// use alexandria_bookstore::{admin_client, panels::BooksPanel};
///
/// let client = admin_client("http://localhost:8080/graphql");
/// let books = BooksPanel::new(client);
/// let rows = books.books().await.unwrap();
/// # }
/// ```
pub fn admin_client<U: Into<String>>(url: U) -> Client<impl Exchange> {
    ClientBuilder::new(url)
        .with_exchange(FetchExchange)
        .with_exchange(QueryCacheExchange::new())
        .with_exchange(DedupExchange)
        .build()
}
