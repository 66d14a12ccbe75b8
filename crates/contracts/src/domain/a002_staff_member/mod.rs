pub mod aggregate;

pub use aggregate::{ClubRoleEntry, StaffMemberRecord};
