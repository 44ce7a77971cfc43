use crate::{cache_exchange::QueryCacheExchange, QueryCacheExtension};
use alexandria::{
    exchange::{
        Client, Exchange, ExchangeFactory, ExchangeResult, Operation, OperationOptions,
        OperationResult
    },
    ext,
    utils::progressive_hash,
    DebugInfo, Extensions, GraphQLQuery, RequestPolicy, Response, ResultSource
};
use alexandria_bookstore::panels::merge_created_book;
use alexandria_bookstore::queries::{
    create_book::{create_book, CreateBook},
    get_books::{get_books, GetBooks},
    update_book::{update_book, UpdateBook}
};
use parking_lot::Mutex;
use std::{any::Any, sync::Arc};

fn make_op<Q: GraphQLQuery>(_query: Q, variables: Q::Variables) -> Operation<Q::Variables> {
    let (query, meta) = Q::build_query(variables);
    Operation {
        key: progressive_hash(meta.query_key, &query.variables),
        query,
        meta,
        options: OperationOptions {
            url: "http://0.0.0.0".parse().unwrap(),
            request_policy: RequestPolicy::CacheFirst,
            extra_headers: None,
            extensions: None
        }
    }
}

fn make_op_with_ext<Q: GraphQLQuery>(
    _query: Q,
    variables: Q::Variables,
    extensions: Extensions
) -> Operation<Q::Variables> {
    let mut operation = make_op(_query, variables);
    operation.options.extensions = Some(extensions);
    operation
}

fn make_result<Q: GraphQLQuery>(
    operation: Operation<Q::Variables>,
    data: Box<dyn Any>
) -> ExchangeResult<Q::ResponseData> {
    let data = *data.downcast::<Q::ResponseData>().unwrap();
    Ok(OperationResult {
        key: operation.key,
        meta: operation.meta,
        response: Response {
            debug_info: Some(DebugInfo {
                source: ResultSource::Network,
                did_dedup: false
            }),
            errors: None,
            data: Some(data)
        }
    })
}

fn query_key_of<Q: GraphQLQuery>(variables: Q::Variables) -> u32 {
    Q::build_query(variables).1.query_key
}

fn books_cache_key() -> u64 {
    let (query, meta) = GetBooks::build_query(get_books::Variables);
    progressive_hash(meta.query_key, &query.variables)
}

fn book(id: &str, name: &str) -> get_books::GetBooksBooks {
    get_books::GetBooksBooks {
        id: id.to_string(),
        name: name.to_string(),
        publisher: get_books::GetBooksBooksPublisher {
            id: "p1".to_string(),
            name: "Chilton Books".to_string()
        },
        authors: Vec::new()
    }
}

fn created_book(id: &str, name: &str) -> create_book::ResponseData {
    create_book::ResponseData {
        create_book: create_book::CreateBookCreateBook {
            id: id.to_string(),
            name: name.to_string(),
            publisher: create_book::CreateBookCreateBookPublisher {
                id: "p1".to_string(),
                name: "Chilton Books".to_string()
            },
            authors: Vec::new()
        }
    }
}

fn create_extension() -> Extensions {
    ext![QueryCacheExtension::new().update::<CreateBook, _>(merge_created_book)]
}

/// Counts reruns instead of performing them.
#[derive(Clone)]
struct RecordingClient {
    reruns: Arc<Mutex<Vec<u64>>>
}

impl RecordingClient {
    fn new() -> Self {
        Self {
            reruns: Arc::new(Mutex::new(Vec::new()))
        }
    }
}

impl Client for RecordingClient {
    fn rerun_query(&self, query_key: u64) {
        self.reruns.lock().push(query_key);
    }
}

/// A fake server: a books table behind the fetch interface, counting how
/// often each operation actually hits it.
struct FakeFetch {
    books: Arc<Mutex<Vec<get_books::GetBooksBooks>>>,
    calls: Arc<Mutex<Vec<u32>>>,
    created_id: String
}

impl FakeFetch {
    fn with_books(books: Vec<get_books::GetBooksBooks>) -> Self {
        FakeFetch {
            books: Arc::new(Mutex::new(books)),
            calls: Arc::new(Mutex::new(Vec::new())),
            created_id: "2".to_string()
        }
    }

    fn answering_create_with(mut self, id: &str) -> Self {
        self.created_id = id.to_string();
        self
    }

    fn calls_for(&self, query_key: u32) -> usize {
        self.calls.lock().iter().filter(|key| **key == query_key).count()
    }
}

#[async_trait]
impl Exchange for &'static FakeFetch {
    async fn run<Q: GraphQLQuery, C: Client>(
        &self,
        operation: Operation<Q::Variables>,
        _client: C
    ) -> ExchangeResult<Q::ResponseData> {
        let query_key = operation.meta.query_key;
        self.calls.lock().push(query_key);

        if query_key == query_key_of::<GetBooks>(get_books::Variables) {
            let data = get_books::ResponseData {
                books: self.books.lock().clone()
            };
            make_result::<Q>(operation, Box::new(data))
        } else if query_key == query_key_of::<CreateBook>(create_book_variables("ignored")) {
            let data = created_book(&self.created_id, "Foundation");
            self.books
                .lock()
                .push(book(&self.created_id, "Foundation"));
            make_result::<Q>(operation, Box::new(data))
        } else if query_key
            == query_key_of::<UpdateBook>(update_book::Variables {
                book_id: "1".to_string(),
                book: update_book::BookInput {
                    name: "ignored".to_string(),
                    publisher_id: "p1".to_string()
                }
            })
        {
            let data = update_book::ResponseData {
                update_book: update_book::UpdateBookUpdateBook {
                    id: "1".to_string(),
                    name: "Dune Messiah".to_string(),
                    publisher: update_book::UpdateBookUpdateBookPublisher {
                        id: "p1".to_string(),
                        name: "Chilton Books".to_string()
                    },
                    authors: Vec::new()
                }
            };
            make_result::<Q>(operation, Box::new(data))
        } else {
            panic!("fake fetch got called with unexpected query {}", query_key)
        }
    }
}

fn create_book_variables(name: &str) -> create_book::Variables {
    create_book::Variables {
        book: create_book::BookInput {
            name: name.to_string(),
            publisher_id: "p1".to_string()
        }
    }
}

fn leak(fetch: FakeFetch) -> &'static FakeFetch {
    Box::leak(Box::new(fetch))
}

#[tokio::test]
async fn writes_queries_to_cache() {
    let fetch = leak(FakeFetch::with_books(vec![book("1", "Dune")]));
    let exchange = QueryCacheExchange::new().build(fetch);
    let client = RecordingClient::new();
    let operation = make_op(GetBooks, get_books::Variables);

    exchange
        .run::<GetBooks, _>(operation.clone(), client.clone())
        .await
        .unwrap();
    let result = exchange
        .run::<GetBooks, _>(operation, client)
        .await
        .unwrap();

    assert_eq!(
        result.response.debug_info.unwrap().source,
        ResultSource::Cache,
        "Result didn't come from the cache"
    );
    assert_eq!(fetch.calls_for(query_key_of::<GetBooks>(get_books::Variables)), 1);
}

#[tokio::test]
async fn create_patches_the_cached_list_without_a_refetch() {
    let fetch = leak(FakeFetch::with_books(vec![book("1", "Dune")]));
    let exchange = QueryCacheExchange::new().build(fetch);
    let client = RecordingClient::new();

    exchange
        .run::<GetBooks, _>(make_op(GetBooks, get_books::Variables), client.clone())
        .await
        .unwrap();

    let mutation = make_op_with_ext(
        CreateBook,
        create_book_variables("Foundation"),
        create_extension()
    );
    exchange
        .run::<CreateBook, _>(mutation, client.clone())
        .await
        .unwrap();

    let result = exchange
        .run::<GetBooks, _>(make_op(GetBooks, get_books::Variables), client.clone())
        .await
        .unwrap();
    let response = result.response;
    assert_eq!(
        response.debug_info.unwrap().source,
        ResultSource::Cache,
        "The patched list should be served from the cache"
    );
    let names: Vec<_> = response
        .data
        .unwrap()
        .books
        .iter()
        .map(|book| book.name.clone())
        .collect();
    assert_eq!(names, vec!["Dune", "Foundation"]);
    assert_eq!(fetch.calls_for(query_key_of::<GetBooks>(get_books::Variables)), 1);
    // The patched query gets rerun so subscribers see the new list.
    assert!(client.reruns.lock().contains(&books_cache_key()));
}

#[tokio::test]
async fn duplicate_create_leaves_the_cached_list_untouched() {
    let fetch = leak(FakeFetch::with_books(vec![book("1", "Dune")]).answering_create_with("1"));
    let exchange = QueryCacheExchange::new().build(fetch);
    let client = RecordingClient::new();

    exchange
        .run::<GetBooks, _>(make_op(GetBooks, get_books::Variables), client.clone())
        .await
        .unwrap();

    let mutation = make_op_with_ext(
        CreateBook,
        create_book_variables("Dune"),
        create_extension()
    );
    exchange
        .run::<CreateBook, _>(mutation, client.clone())
        .await
        .unwrap();

    let result = exchange
        .run::<GetBooks, _>(make_op(GetBooks, get_books::Variables), client.clone())
        .await
        .unwrap();
    let response = result.response;
    assert_eq!(response.debug_info.unwrap().source, ResultSource::Cache);
    assert_eq!(response.data.unwrap().books, vec![book("1", "Dune")]);
    assert!(
        client.reruns.lock().is_empty(),
        "an unchanged list shouldn't be rerun or refetched"
    );
}

#[tokio::test]
async fn create_without_a_cached_list_changes_nothing() {
    let fetch = leak(FakeFetch::with_books(vec![book("1", "Dune")]));
    let exchange = QueryCacheExchange::new().build(fetch);
    let client = RecordingClient::new();

    // No GetBooks has run yet, so there is nothing to patch.
    let mutation = make_op_with_ext(
        CreateBook,
        create_book_variables("Foundation"),
        create_extension()
    );
    exchange
        .run::<CreateBook, _>(mutation, client.clone())
        .await
        .unwrap();
    assert!(client.reruns.lock().is_empty());

    // The next books query goes to the network as usual.
    let result = exchange
        .run::<GetBooks, _>(make_op(GetBooks, get_books::Variables), client)
        .await
        .unwrap();
    assert_eq!(
        result.response.debug_info.unwrap().source,
        ResultSource::Network
    );
}

#[tokio::test]
async fn reconciliation_is_idempotent() {
    let fetch = leak(FakeFetch::with_books(vec![book("1", "Dune")]));
    let exchange = QueryCacheExchange::new().build(fetch);
    let client = RecordingClient::new();

    exchange
        .run::<GetBooks, _>(make_op(GetBooks, get_books::Variables), client.clone())
        .await
        .unwrap();

    for _ in 0..2 {
        let mutation = make_op_with_ext(
            CreateBook,
            create_book_variables("Foundation"),
            create_extension()
        );
        exchange
            .run::<CreateBook, _>(mutation, client.clone())
            .await
            .unwrap();
    }

    let result = exchange
        .run::<GetBooks, _>(make_op(GetBooks, get_books::Variables), client)
        .await
        .unwrap();
    let books = result.response.data.unwrap().books;
    assert_eq!(books.iter().filter(|book| book.id == "2").count(), 1);
    assert_eq!(books.len(), 2);
}

#[tokio::test]
async fn mutations_without_an_updater_invalidate_involved_queries() {
    let fetch = leak(FakeFetch::with_books(vec![book("1", "Dune")]));
    let exchange = QueryCacheExchange::new().build(fetch);
    let client = RecordingClient::new();

    exchange
        .run::<GetBooks, _>(make_op(GetBooks, get_books::Variables), client.clone())
        .await
        .unwrap();

    let mutation = make_op(
        UpdateBook,
        update_book::Variables {
            book_id: "1".to_string(),
            book: update_book::BookInput {
                name: "Dune Messiah".to_string(),
                publisher_id: "p1".to_string()
            }
        }
    );
    exchange
        .run::<UpdateBook, _>(mutation, client.clone())
        .await
        .unwrap();
    assert!(client.reruns.lock().contains(&books_cache_key()));

    let result = exchange
        .run::<GetBooks, _>(make_op(GetBooks, get_books::Variables), client)
        .await
        .unwrap();
    assert_eq!(
        result.response.debug_info.unwrap().source,
        ResultSource::Network,
        "an invalidated query should be refetched"
    );
    assert_eq!(fetch.calls_for(query_key_of::<GetBooks>(get_books::Variables)), 2);
}
