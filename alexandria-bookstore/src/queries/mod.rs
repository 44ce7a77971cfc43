//! Typed operation modules for the bookstore schema, written in the shape a
//! query codegen emits: a marker struct per operation next to a module with
//! the query string, the `Variables` and the `ResponseData` types.

pub mod create_author;
pub mod create_book;
pub mod create_publisher;
pub mod get_authors;
pub mod get_books;
pub mod get_publishers;
pub mod set_book_authors;
pub mod update_author;
pub mod update_book;
pub mod update_publisher;
