pub mod aggregate;

pub use aggregate::{GenerateLessonsRequest, NewGroup, NewSection, Section, TrainingGroup};
