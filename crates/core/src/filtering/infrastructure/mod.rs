pub mod filter_factory;
pub mod frosted_glass_filter;
pub mod grayscale_filter;
pub mod invert_filter;
pub mod mosaic_filter;
