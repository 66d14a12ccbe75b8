pub mod permissions;

pub use permissions::{can_act_on, StaffAction};
