pub mod compositor;
pub mod frame;
pub mod sheet;
