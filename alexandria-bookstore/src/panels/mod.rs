//! State holders for the admin tables.
//!
//! Each panel owns the transient edit state of its view: the draft being
//! created or edited and which dialog is visible. The view layer registers a
//! listener and re-renders from the state snapshot it's handed on every
//! change; rendering itself lives outside this crate.
//!
//! The panels also own the save flows. Creates attach the cache update hook
//! that patches the entity into the cached list query, so the reconciliation
//! runs inside the mutation's exchange pass, before the dialog closes.

mod authors;
mod books;
mod publishers;

pub use authors::{merge_created_author, AuthorDraft, AuthorsPanel, AuthorsPanelState};
pub use books::{merge_created_book, BookDraft, BooksPanel, BooksPanelState};
pub use publishers::{
    merge_created_publisher, PublisherDraft, PublishersPanel, PublishersPanelState
};
