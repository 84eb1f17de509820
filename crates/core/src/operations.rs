//! File-to-file entry points.
//!
//! Each call decodes the source, runs one filter into a fresh buffer and
//! writes the result as PNG. Calls share no state; randomised filters are
//! seeded per call.

use std::path::Path;

use crate::filtering::infrastructure::filter_factory::{create_filter, FilterKind};
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::infrastructure::image_file_reader::ImageFileReader;
use crate::imaging::infrastructure::png_file_writer::PngFileWriter;
use crate::pipeline::apply_filter_use_case::ApplyFilterUseCase;
use crate::shared::error::FilterError;
use crate::shared::region::Region;

/// Decodes `path` and returns its `(width, height)`.
pub fn image_dimensions(path: impl AsRef<Path>) -> Result<(u32, u32), FilterError> {
    ImageFileReader::new().dimensions(path.as_ref())
}

pub fn image_width(path: impl AsRef<Path>) -> Result<u32, FilterError> {
    Ok(image_dimensions(path)?.0)
}

pub fn image_height(path: impl AsRef<Path>) -> Result<u32, FilterError> {
    Ok(image_dimensions(path)?.1)
}

pub fn invert_colors(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
) -> Result<(), FilterError> {
    run(FilterKind::Invert, source.as_ref(), dest.as_ref())
}

pub fn to_grayscale(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<(), FilterError> {
    run(FilterKind::Grayscale, source.as_ref(), dest.as_ref())
}

/// Fails with [`FilterError::InvalidBlockSize`] before opening anything
/// when `block_size` is zero.
pub fn apply_frosted_glass(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    block_size: u32,
) -> Result<(), FilterError> {
    run(
        FilterKind::FrostedGlass { block_size },
        source.as_ref(),
        dest.as_ref(),
    )
}

/// Pixelates `region` of the source. The region is checked against the
/// decoded image before `dest` is created.
pub fn apply_mosaic(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    block_size: u32,
    region: Region,
) -> Result<(), FilterError> {
    run(
        FilterKind::Mosaic { block_size, region },
        source.as_ref(),
        dest.as_ref(),
    )
}

fn run(kind: FilterKind, source: &Path, dest: &Path) -> Result<(), FilterError> {
    let filter = create_filter(kind)?;
    let mut use_case = ApplyFilterUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(PngFileWriter::new()),
        filter,
    );
    use_case.execute(source, dest)
}
