pub mod a002_staff_member;
pub mod a005_tariff;
pub mod a006_schedule;
