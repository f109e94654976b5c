//! Request processing that runs before the project handlers.

pub mod collection;
