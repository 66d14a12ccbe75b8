pub mod aggregate;

pub use aggregate::{Club, ClubWithRole};
