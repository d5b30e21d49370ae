//! Repository layer: one struct per table, static async methods over a pool.

mod todo_repo;

pub use todo_repo::TodoRepo;
