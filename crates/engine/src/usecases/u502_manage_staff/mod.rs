pub mod executor;

pub use executor::{change_role, remove_from_club};
