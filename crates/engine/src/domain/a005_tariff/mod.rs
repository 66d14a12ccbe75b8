pub mod access_scope;

pub use access_scope::{AccessScopeSelector, ContainmentIndex};
