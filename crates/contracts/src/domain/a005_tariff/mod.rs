pub mod aggregate;

pub use aggregate::CreateTariffRequest;
