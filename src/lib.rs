pub mod book;
pub mod books_api;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod shell;
pub mod view;

pub use book::{Book, BookPayload};
pub use books_api::BooksApi;
pub use config::{Config, Encoding};
pub use controller::{Action, ListController};
pub use error::{Error, Result};
