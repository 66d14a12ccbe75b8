pub mod a001_club;
pub mod a002_staff_member;
pub mod a003_invitation;
pub mod a004_section;
pub mod a005_tariff;
pub mod a006_schedule;
