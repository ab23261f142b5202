pub mod field;
pub mod mask;
pub mod simulator;
