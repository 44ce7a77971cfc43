use crate::queries::{
    create_book::{create_book, CreateBook},
    get_books::{get_books, GetBooks},
    set_book_authors::{set_book_authors, SetBookAuthors},
    update_book::{update_book, UpdateBook}
};
use alexandria::{exchange::Exchange, ext, Client, QueryError, QueryOptions};
use alexandria_query_cache::{Dependencies, QueryCacheExtension, QueryStore};
use parking_lot::Mutex;

/// The book currently being created or edited in a dialog. `id` stays `None`
/// until the server has assigned one, i.e. for drafts of new books.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookDraft {
    pub id: Option<String>,
    pub name: String,
    pub publisher_id: String,
    pub author_ids: Vec<String>
}

/// Which dialog the books view is showing, and for which draft.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BooksPanelState {
    pub book_dialog: Option<BookDraft>,
    pub authors_dialog: Option<BookDraft>
}

type Listener = Box<dyn Fn(&BooksPanelState) + Send + Sync>;

/// State holder for the books table and its two dialogs.
pub struct BooksPanel<M: Exchange> {
    client: Client<M>,
    state: Mutex<BooksPanelState>,
    listeners: Mutex<Vec<Listener>>
}

impl<M: Exchange> BooksPanel<M> {
    pub fn new(client: Client<M>) -> Self {
        BooksPanel {
            client,
            state: Mutex::new(BooksPanelState::default()),
            listeners: Mutex::new(Vec::new())
        }
    }

    /// The current state snapshot.
    pub fn state(&self) -> BooksPanelState {
        self.state.lock().clone()
    }

    /// Register a view listener. It's called with a snapshot after every state
    /// change.
    pub fn on_change<F: Fn(&BooksPanelState) + Send + Sync + 'static>(&self, listener: F) {
        self.listeners.lock().push(Box::new(listener));
    }

    fn mutate<F: FnOnce(&mut BooksPanelState)>(&self, mutation: F) {
        let snapshot = {
            let mut state = self.state.lock();
            mutation(&mut state);
            state.clone()
        };
        for listener in self.listeners.lock().iter() {
            listener(&snapshot);
        }
    }

    pub fn edit_new_book(&self) {
        self.mutate(|state| state.book_dialog = Some(BookDraft::default()));
    }

    pub fn edit_book(&self, book: &get_books::GetBooksBooks) {
        let draft = draft_of(book);
        self.mutate(|state| state.book_dialog = Some(draft));
    }

    pub fn edit_authors(&self, book: &get_books::GetBooksBooks) {
        let draft = draft_of(book);
        self.mutate(|state| state.authors_dialog = Some(draft));
    }

    pub fn close_book_dialog(&self) {
        self.mutate(|state| state.book_dialog = None);
    }

    pub fn close_authors_dialog(&self) {
        self.mutate(|state| state.authors_dialog = None);
    }

    /// Fetch the books list. Served from the cache when it's warm.
    pub async fn books(&self) -> Result<Vec<get_books::GetBooksBooks>, QueryError> {
        let response = self.client.query(GetBooks, get_books::Variables).await?;
        Ok(response.data.map(|data| data.books).unwrap_or_default())
    }

    /// Save the dialog's draft and close it. New books go through the create
    /// mutation with the list patch attached; for existing books the update
    /// mutation plus type invalidation is enough.
    pub async fn save_book(&self, draft: BookDraft) -> Result<(), QueryError> {
        match draft.id {
            None => {
                let variables = create_book::Variables {
                    book: create_book::BookInput {
                        name: draft.name,
                        publisher_id: draft.publisher_id
                    }
                };
                let options = QueryOptions {
                    extensions: Some(ext![
                        QueryCacheExtension::new().update::<CreateBook, _>(merge_created_book)
                    ]),
                    ..QueryOptions::default()
                };
                self.client
                    .query_with_options(CreateBook, variables, options)
                    .await?;
            }
            Some(book_id) => {
                let variables = update_book::Variables {
                    book_id,
                    book: update_book::BookInput {
                        name: draft.name,
                        publisher_id: draft.publisher_id
                    }
                };
                self.client.query(UpdateBook, variables).await?;
            }
        }
        self.close_book_dialog();
        Ok(())
    }

    /// Replace a book's author set and close the authors dialog.
    pub async fn save_authors(
        &self,
        book_id: String,
        author_ids: Vec<String>
    ) -> Result<(), QueryError> {
        let variables = set_book_authors::Variables {
            book_id,
            author_ids
        };
        self.client.query(SetBookAuthors, variables).await?;
        self.close_authors_dialog();
        Ok(())
    }
}

fn draft_of(book: &get_books::GetBooksBooks) -> BookDraft {
    BookDraft {
        id: Some(book.id.clone()),
        name: book.name.clone(),
        publisher_id: book.publisher.id.clone(),
        author_ids: book.authors.iter().map(|author| author.id.clone()).collect()
    }
}

/// Patch the cached books list with a just-created book.
///
/// A miss (the list was never fetched, or got evicted) and an already-known id
/// both leave the cache untouched, so running this twice for the same book is
/// harmless. A fresh book is appended at the end, existing order untouched.
pub fn merge_created_book(
    data: &Option<create_book::ResponseData>,
    store: QueryStore,
    dependencies: &mut Dependencies
) {
    let created = match data {
        Some(data) => data.create_book.clone(),
        None => return
    };
    log::debug!("merging created book {} into the books list", created.id);
    store.update_query(
        GetBooks,
        get_books::Variables,
        move |current| {
            let mut current = current?;
            // Don't double add the book
            if current.books.iter().any(|book| book.id == created.id) {
                return None;
            }
            current.books.push(as_book_row(created));
            Some(current)
        },
        dependencies
    );
}

fn as_book_row(created: create_book::CreateBookCreateBook) -> get_books::GetBooksBooks {
    get_books::GetBooksBooks {
        id: created.id,
        name: created.name,
        publisher: get_books::GetBooksBooksPublisher {
            id: created.publisher.id,
            name: created.publisher.name
        },
        authors: created
            .authors
            .into_iter()
            .map(|author| get_books::GetBooksBooksAuthors {
                id: author.id,
                name: author.name
            })
            .collect()
    }
}
