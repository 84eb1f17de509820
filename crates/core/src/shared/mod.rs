pub mod constants;
pub mod error;
pub mod pixel_buffer;
pub mod region;
