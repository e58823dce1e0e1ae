//! Core domain types for Caselog: the project catalog, its filter facets,
//! and the conjunctive filter over them.

pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod project;
pub mod render;
pub mod source;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
