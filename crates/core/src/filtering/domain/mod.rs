pub mod neighborhood_sampler;
pub mod pixel_filter;
