pub mod aggregate;

pub use aggregate::{CreateInvitationRequest, InvitationRecord};
