//! Client for the todo API.
//!
//! [`TodoApiClient`](api::TodoApiClient) speaks HTTP and unwraps the
//! response envelope. [`TodoView`](view::TodoView) keeps the list a user is
//! looking at and swallows (logs) every network failure.

pub mod api;
pub mod config;
pub mod view;
