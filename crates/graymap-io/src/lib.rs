//! graymap-io - Image file I/O
//!
//! Raw 8-bit PGM (P5) is the only on-disk format: [`read_pgm`] /
//! [`write_pgm`] work over arbitrary readers and writers, [`load`] /
//! [`save`] over filesystem paths. Both directions count the bulk sample
//! transfer in the pixel-access counter.

mod error;
mod pgm;

pub use error::{IoError, IoResult};
pub use pgm::{read_pgm, write_pgm};

use graymap_core::GrayImage;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Load a raw 8-bit PGM image from a file.
///
/// # Errors
///
/// [`IoError::Io`] if the file cannot be opened or read;
/// [`IoError::InvalidData`] if its contents are malformed. No image is
/// returned on failure.
pub fn load<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let file = File::open(path)?;
    read_pgm(BufReader::new(file))
}

/// Save an image to a file as raw 8-bit PGM.
///
/// # Errors
///
/// [`IoError::Io`] if the file cannot be created or written. A failed
/// write may leave a truncated, invalid file behind.
pub fn save<P: AsRef<Path>>(img: &GrayImage, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_pgm(img, &mut writer)?;
    writer.flush()?;
    Ok(())
}
