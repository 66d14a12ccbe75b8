pub mod builder;

pub use builder::{build, build_validated};
