//! The address book store.
//!
//! An [`AddressBook`] maps contact names to [`Record`](crate::models::Record)s and
//! keeps a stable iteration order for listing, searching, and paging.

mod address_book;
mod pages;

pub use address_book::AddressBook;
pub use pages::Pages;
