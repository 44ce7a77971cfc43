use alexandria::{exchange::OperationResult, utils::progressive_hash, GraphQLQuery, Response};
use alexandria_bookstore::panels::merge_created_book;
use alexandria_bookstore::queries::{
    create_book::create_book,
    get_books::{get_books, GetBooks}
};
use alexandria_query_cache::{Dependencies, QueryStore, Store};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;
use std::sync::Arc;

fn book(id: usize) -> get_books::GetBooksBooks {
    get_books::GetBooksBooks {
        id: id.to_string(),
        name: format!("Book {}", id),
        publisher: get_books::GetBooksBooksPublisher {
            id: "p1".to_string(),
            name: "Chilton Books".to_string()
        },
        authors: Vec::new()
    }
}

fn created(id: usize) -> Option<create_book::ResponseData> {
    Some(create_book::ResponseData {
        create_book: create_book::CreateBookCreateBook {
            id: id.to_string(),
            name: format!("Book {}", id),
            publisher: create_book::CreateBookCreateBookPublisher {
                id: "p1".to_string(),
                name: "Chilton Books".to_string()
            },
            authors: Vec::new()
        }
    })
}

fn books_key() -> u64 {
    let (query, meta) = GetBooks::build_query(get_books::Variables);
    progressive_hash(meta.query_key, &query.variables)
}

fn store_with_books(n: usize) -> Arc<Store> {
    let store = Arc::new(Store::new());
    let (query, meta) = GetBooks::build_query(get_books::Variables);
    let key = progressive_hash(meta.query_key, &query.variables);
    let result = OperationResult {
        key,
        meta,
        response: Response {
            debug_info: None,
            errors: None,
            data: Some(get_books::ResponseData {
                books: (0..n).map(book).collect()
            })
        }
    };
    store.write_query::<GetBooks>(&result);
    store
}

fn read_cached_list(c: &mut Criterion) {
    let store = store_with_books(1000);
    let key = books_key();
    c.bench_function("read 1000 book list from cache", |b| {
        b.iter(|| black_box(store.read_query::<GetBooks>(black_box(key))))
    });
}

fn merge_new_book(c: &mut Criterion) {
    c.bench_function("merge created book into 1000 book list", |b| {
        b.iter_batched(
            || store_with_books(1000),
            |store| {
                let mut dependencies = Dependencies::default();
                merge_created_book(
                    &created(1000),
                    QueryStore::from(store),
                    &mut dependencies
                );
            },
            BatchSize::SmallInput
        )
    });
}

fn merge_duplicate_book(c: &mut Criterion) {
    let store = store_with_books(1000);
    let mut rng = rand::thread_rng();
    c.bench_function("reject duplicate book in 1000 book list", |b| {
        b.iter(|| {
            let mut dependencies = Dependencies::default();
            merge_created_book(
                &created(rng.gen_range(0..1000)),
                QueryStore::from(store.clone()),
                &mut dependencies
            );
        })
    });
}

criterion_group!(
    benches,
    read_cached_list,
    merge_new_book,
    merge_duplicate_book
);
criterion_main!(benches);
