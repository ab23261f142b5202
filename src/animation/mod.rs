pub mod driver;
pub mod ease;
