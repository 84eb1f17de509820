use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Image axis named in region validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Every way a filter call can fail. None of them are recoverable; the
/// message names the stage (open, decode, validate, create, encode).
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("cannot open image {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot create image {path}: {source}")]
    DestCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot encode image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{axis} out of range: region {start}..{end} exceeds image extent {limit}")]
    RegionOutOfRange {
        axis: Axis,
        start: u32,
        end: u32,
        limit: u32,
    },
    #[error("block size must be positive, got {0}")]
    InvalidBlockSize(u32),
}
