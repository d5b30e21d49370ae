//! Domain types shared by the todo service crates.
//!
//! Nothing in here touches the network or the database; the `todo-db`,
//! `todo-api` and `todo-client` crates build on these types.

pub mod connection;
pub mod error;
pub mod todo;
pub mod types;
