//! A GraphQL client with common built-in features
//! as well as the ability to extend its functionality through exchanges
//!
//! # Getting Started
//!
//! Queries are plain marker types implementing [GraphQLQuery](./trait.GraphQLQuery.html),
//! with a module holding the query string, the `Variables` struct and the typed
//! `ResponseData`. With those in place, using the client looks like this:
//!
//! ```ignore
//! use alexandria::Client;
//! use my_queries::get_books::{get_books, GetBooks};
//!
//! let client = Client::builder("http://localhost:8080/graphql")
//!     .with_default_exchanges()
//!     .build();
//!
//! let result = client.query(GetBooks, get_books::Variables).await.unwrap();
//! assert!(result.data.is_some());
//! ```
//!
//! For more info see the relevant method and struct documentation.
//!
//! # Exchanges
//!
//! Exchanges are like a bi-directional middleware.
//! They act on both the incoming and outgoing queries,
//! passing them on if they can't return a result themselves.
//!
//! There are three default exchanges, called in this order:
//!
//! ## DedupExchange
//!
//! The deduplication exchange (`DedupExchange`) filters out unnecessary queries
//! by combining multiple identical queries into one. It does so by keeping track
//! of in-flight queries and, instead of firing off another identical query,
//! waiting for their results instead. This reduces network traffic,
//! especially in larger applications where the same query may be used in multiple
//! places and run multiple times simultaneously as a result.
//!
//! ## CacheExchange
//!
//! The cache exchange is a very basic, un-normalized cache which eagerly invalidates queries.
//! It's focused on simplicity and correctness of data, so if a query uses any of the same types
//! as a mutation it will always be invalidated by it. This means that especially if you
//! have large amounts of different entities of the same type, this can become expensive quickly.
//! For a document cache that supports patching cached query results after a mutation instead
//! of throwing them away, see the `alexandria-query-cache` crate.
//!
//! ## FetchExchange
//!
//! The fetch exchange will serialize the query, send it over the network and deserialize the
//! response using `reqwest`.
//! This should be your last exchange in the chain, as it never forwards a query.
//!
//! # Features
//!
//! * `default-exchanges` **(default)** - Include default exchanges and the related builder method
//! * `observable` **(default)** - Include support for observable and all related types. Includes
//! `tokio`.

#[macro_use]
extern crate serde;
#[macro_use]
extern crate async_trait;

use std::{collections::HashMap, fmt, fmt::Display};
use types::*;

pub mod client;
mod error;
pub mod exchanges;
#[cfg(test)]
pub(crate) mod testing;
pub(crate) mod types;
pub mod utils;

pub use client::{Client, ClientBuilder};
pub use error::QueryError;
use serde::{de::DeserializeOwned, Serialize};
#[cfg(feature = "observable")]
pub use types::Observable;
pub use types::{
    DebugInfo, ExtensionMap, Extensions, HeaderPair, QueryOptions, RequestPolicy, ResultSource
};
pub use url::Url;

/// Types used by custom exchanges. Regular users probably don't need these.
pub mod exchange {
    pub use crate::types::{
        Client, Exchange, ExchangeFactory, ExchangeResult, Operation, OperationMeta,
        OperationOptions, OperationResult, OperationType
    };
}

/// The form in which queries are sent over HTTP in most implementations. This will be built using the [GraphQLQuery](./trait.GraphQLQuery.html) trait normally.
#[derive(Debug, Serialize, Clone)]
pub struct QueryBody<Variables: Serialize + Send + Sync + Clone> {
    /// The values for the variables. They must match those declared in the queries. This should be the `Variables` struct from the module corresponding to the query.
    pub variables: Variables,
    /// The GraphQL query, as a string.
    pub query: &'static str,
    /// The GraphQL operation name, as a string.
    #[serde(rename = "operationName")]
    pub operation_name: &'static str
}

/// A convenience trait that can be used to build a GraphQL request body.
/// It is implemented on the marker struct representing an operation, next to
/// the module containing that operation's `Variables` and `ResponseData`.
pub trait GraphQLQuery: Send + Sync + 'static {
    /// The shape of the variables expected by the query.
    type Variables: Serialize + Send + Sync + Clone + 'static;
    /// The top-level shape of the response data (the `data` field in the GraphQL response).
    type ResponseData: Serialize + DeserializeOwned + Send + Sync + Clone + 'static;

    /// Produce a GraphQL query struct that can be JSON serialized and sent to a GraphQL API,
    /// along with the static metadata for the operation.
    fn build_query(variables: Self::Variables) -> (QueryBody<Self::Variables>, OperationMeta);
}

/// The generic shape taken by the responses of GraphQL APIs.
///
/// This will generally be used with the `ResponseData` struct from a query module.
///
/// [Spec](https://github.com/facebook/graphql/blob/master/spec/Section%207%20--%20Response.md)
///
/// ```
/// # use serde_json::json;
/// # use serde::{Deserialize, Serialize};
/// #
/// # #[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
/// # struct Book {
/// #     id: String,
/// # }
/// #
/// # #[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
/// # struct ResponseData {
/// #     books: Vec<Book>,
/// # }
/// #
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use alexandria::Response;
///
/// let body: Response<ResponseData> = serde_json::from_value(json!({
///     "data": {
///         "books": [{"id": "3"}],
///     },
///     "errors": [],
/// }))?;
///
/// let expected: Response<ResponseData> = Response {
///     data: Some(ResponseData {
///         books: vec![Book { id: "3".to_owned() }],
///     }),
///     errors: Some(vec![]),
///     debug_info: None
/// };
///
/// assert_eq!(body, expected);
///
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Response<Data: Clone> {
    /// Metadata about where the result came from. Only set by exchanges that
    /// serve results, never by the server.
    #[serde(skip_deserializing, rename = "debugInfo")]
    pub debug_info: Option<DebugInfo>,
    /// The absent, partial or complete response data.
    pub data: Option<Data>,
    /// The top-level errors returned by the server.
    pub errors: Option<Vec<Error>>
}

/// An element in the top-level `errors` array of a response body.
///
/// This tries to be as close to the spec as possible.
///
/// [Spec](https://github.com/facebook/graphql/blob/master/spec/Section%207%20--%20Response.md)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Error {
    /// The human-readable error message. This is the only required field.
    pub message: String,
    /// Which locations in the query the error applies to.
    pub locations: Option<Vec<Location>>,
    /// Which path in the query the error applies to, e.g. `["books", 0, "name"]`.
    pub path: Option<Vec<PathFragment>>,
    /// Additional errors. Their exact format is defined by the server.
    pub extensions: Option<HashMap<String, serde_json::Value>>
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Use `/` as a separator like JSON Pointer.
        let path = self
            .path
            .as_ref()
            .map(|fragments| {
                fragments
                    .iter()
                    .fold(String::new(), |mut acc, item| {
                        acc.push_str(&format!("{}/", item));
                        acc
                    })
                    .trim_end_matches('/')
                    .to_string()
            })
            .unwrap_or_else(|| "<query>".to_string());

        // Get the location of the error. We'll use just the first location for this.
        let loc = self
            .locations
            .as_ref()
            .and_then(|locations| locations.iter().next())
            .cloned()
            .unwrap_or_else(Location::default);

        write!(f, "{}:{}:{}: {}", path, loc.line, loc.column, self.message)
    }
}

/// Part of a path in a query. It can be an object key or an array index. See [Error](./struct.Error.html).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PathFragment {
    /// A key inside an object
    Key(String),
    /// An index inside an array
    Index(i32)
}

/// Represents a location inside a query string. Used in errors. See [Error](./struct.Error.html).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// The line number in the query string where the error originated (starting from 1).
    pub line: i32,
    /// The column number in the query string where the error originated (starting from 1).
    pub column: i32
}

impl Display for PathFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathFragment::Key(ref key) => write!(f, "{}", key),
            PathFragment::Index(ref idx) => write!(f, "{}", idx)
        }
    }
}
