use std::path::Path;

use crate::filtering::domain::pixel_filter::PixelFilter;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::error::FilterError;

/// Single-image filtering pipeline: read → filter → write.
///
/// The destination is only touched after the filter has succeeded, so a
/// rejected region or undecodable source never leaves an output file.
pub struct ApplyFilterUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    filter: Box<dyn PixelFilter>,
}

impl ApplyFilterUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        filter: Box<dyn PixelFilter>,
    ) -> Self {
        Self {
            reader,
            writer,
            filter,
        }
    }

    pub fn execute(&mut self, input_path: &Path, output_path: &Path) -> Result<(), FilterError> {
        let source = self.reader.read(input_path)?;
        let filtered = self.filter.apply(&source)?;
        debug_assert_eq!(filtered.dimensions(), source.dimensions());

        self.writer.write(output_path, &filtered)?;
        log::info!(
            "Applied {} filter to {}, output written to {}",
            self.filter.name(),
            input_path.display(),
            output_path.display()
        );
        Ok(())
    }
}
