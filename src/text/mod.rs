pub mod fonts;
pub mod raster;
