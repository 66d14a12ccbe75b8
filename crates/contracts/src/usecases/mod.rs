pub mod common;
pub mod u501_invite_staff;
pub mod u502_manage_staff;
pub mod u503_create_section;
pub mod u504_save_tariff;
