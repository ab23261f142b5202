pub mod palette;
pub mod parse;
pub mod ramp;
pub mod space;
