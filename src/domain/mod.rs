pub mod card;
pub mod cart;
pub mod catalog;
pub mod collection;
pub mod error;
pub mod query;
pub mod stats;
pub mod utils;

#[cfg(test)]
pub(crate) mod fixtures;
