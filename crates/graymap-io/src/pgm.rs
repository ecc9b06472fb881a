//! Raw PGM (P5) format support
//!
//! Reads and writes binary 8-bit graymaps: the two-byte magic `P5`,
//! then width, height, and maxval as whitespace-separated decimals,
//! exactly one whitespace byte, and `width*height` raw samples. Comment
//! lines start with `#`, run to end-of-line, and may appear anywhere
//! whitespace is expected in the header. Maxval must be in 1..=255; the
//! 16-bit variant of the format is rejected.

use crate::{IoError, IoResult};
use graymap_core::{GrayImage, instr};
use std::io::{Read, Write};

/// Header tokenizer with one byte of pushback.
struct HeaderReader<R> {
    inner: R,
    peeked: Option<u8>,
}

impl<R: Read> HeaderReader<R> {
    fn new(inner: R) -> Self {
        HeaderReader {
            inner,
            peeked: None,
        }
    }

    fn next_byte(&mut self) -> IoResult<u8> {
        if let Some(b) = self.peeked.take() {
            return Ok(b);
        }
        let mut buf = [0u8; 1];
        self.inner.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                IoError::InvalidData("unexpected end of header".to_string())
            } else {
                IoError::Io(e)
            }
        })?;
        Ok(buf[0])
    }

    fn push_back(&mut self, b: u8) {
        self.peeked = Some(b);
    }

    // Consume whitespace and #-comments, returning the first byte of the
    // next token.
    fn skip_space_and_comments(&mut self) -> IoResult<u8> {
        loop {
            let b = self.next_byte()?;
            if b == b'#' {
                while self.next_byte()? != b'\n' {}
            } else if !b.is_ascii_whitespace() {
                return Ok(b);
            }
        }
    }

    // Parse the next unsigned decimal header field. The byte that ends
    // the digit run stays available for the caller.
    fn read_field(&mut self, what: &str) -> IoResult<u32> {
        let mut b = self.skip_space_and_comments()?;
        if !b.is_ascii_digit() {
            return Err(IoError::InvalidData(format!("invalid {what}")));
        }
        let mut value: u64 = 0;
        loop {
            value = value * 10 + u64::from(b - b'0');
            if value > u64::from(u32::MAX) {
                return Err(IoError::InvalidData(format!("{what} out of range")));
            }
            b = self.next_byte()?;
            if !b.is_ascii_digit() {
                self.push_back(b);
                return Ok(value as u32);
            }
        }
    }

    // Fill `buf` from the remaining stream, honoring the pushback byte.
    fn read_samples(&mut self, buf: &mut [u8]) -> IoResult<()> {
        let mut start = 0;
        if let Some(b) = self.peeked.take() {
            if !buf.is_empty() {
                buf[0] = b;
                start = 1;
            }
        }
        self.inner.read_exact(&mut buf[start..]).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                IoError::InvalidData("truncated sample data".to_string())
            } else {
                IoError::Io(e)
            }
        })
    }
}

/// Read a raw 8-bit PGM image from a reader.
///
/// # Errors
///
/// [`IoError::InvalidData`] for a bad magic token, malformed header
/// field, maxval outside 1..=255, missing whitespace separator, or
/// truncated sample data; [`IoError::Io`] for operating-system failures.
/// No image is returned on any failure path.
pub fn read_pgm<R: Read>(reader: R) -> IoResult<GrayImage> {
    let mut r = HeaderReader::new(reader);

    let magic = [r.next_byte()?, r.next_byte()?];
    if &magic != b"P5" {
        return Err(IoError::InvalidData("not a raw 8-bit PGM file".to_string()));
    }

    let width = r.read_field("width")?;
    let height = r.read_field("height")?;
    let maxval = r.read_field("maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::InvalidData(format!("invalid maxval {maxval}")));
    }

    // Exactly one whitespace byte separates the header from the samples.
    let sep = r.next_byte()?;
    if !sep.is_ascii_whitespace() {
        return Err(IoError::InvalidData(
            "whitespace expected after maxval".to_string(),
        ));
    }

    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or(graymap_core::Error::TooLarge { width, height })?;
    let mut samples = Vec::new();
    samples
        .try_reserve_exact(len)
        .map_err(|_| graymap_core::Error::AllocationFailed)?;
    samples.resize(len, 0);
    r.read_samples(&mut samples)?;
    instr::count_pixel_accesses(len as u64);

    Ok(GrayImage::from_raw(width, height, maxval as u8, samples)?)
}

/// Write an image as raw 8-bit PGM.
///
/// # Errors
///
/// [`IoError::Io`] if the header or sample write fails. A failed write
/// may leave a truncated, invalid file behind.
pub fn write_pgm<W: Write>(img: &GrayImage, mut writer: W) -> IoResult<()> {
    write!(
        writer,
        "P5\n{} {}\n{}\n",
        img.width(),
        img.height(),
        img.maxval()
    )?;
    writer.write_all(img.samples())?;
    instr::count_pixel_accesses(img.samples().len() as u64);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pgm_bytes(header: &str, samples: &[u8]) -> Vec<u8> {
        let mut bytes = header.as_bytes().to_vec();
        bytes.extend_from_slice(samples);
        bytes
    }

    #[test]
    fn test_read_minimal() {
        let data = pgm_bytes("P5 2 2 255\n", &[10, 20, 30, 40]);
        let img = read_pgm(data.as_slice()).unwrap();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.maxval(), 255);
        assert_eq!(img.samples(), &[10, 20, 30, 40]);
    }

    #[test]
    fn test_read_with_comments() {
        let data = pgm_bytes("P5\n# made by hand\n2 # width\n1\n# maxval next\n100\n", &[7, 8]);
        let img = read_pgm(data.as_slice()).unwrap();
        assert_eq!((img.width(), img.height(), img.maxval()), (2, 1, 100));
        assert_eq!(img.samples(), &[7, 8]);
    }

    #[test]
    fn test_read_zero_area() {
        let data = pgm_bytes("P5\n0 3\n255\n", &[]);
        let img = read_pgm(data.as_slice()).unwrap();
        assert_eq!((img.width(), img.height()), (0, 3));
    }

    #[test]
    fn test_sample_after_single_separator() {
        // the first sample byte may look like whitespace; only one
        // separator byte is consumed
        let data = pgm_bytes("P5 1 1 255 ", &[b'\n']);
        let img = read_pgm(data.as_slice()).unwrap();
        assert_eq!(img.samples(), &[b'\n']);
    }

    #[test]
    fn test_reject_bad_magic() {
        let data = pgm_bytes("P6 1 1 255\n", &[0, 0, 0]);
        assert!(matches!(
            read_pgm(data.as_slice()),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_reject_bad_maxval() {
        for header in ["P5 1 1 0\n", "P5 1 1 65535\n"] {
            let data = pgm_bytes(header, &[0, 0]);
            assert!(matches!(
                read_pgm(data.as_slice()),
                Err(IoError::InvalidData(_))
            ));
        }
    }

    #[test]
    fn test_reject_missing_separator() {
        let data = pgm_bytes("P5 1 1 255x", &[0]);
        let err = read_pgm(data.as_slice()).unwrap_err();
        assert!(err.to_string().contains("whitespace expected"));
    }

    #[test]
    fn test_reject_truncated_samples() {
        let data = pgm_bytes("P5 2 2 255\n", &[1, 2, 3]);
        let err = read_pgm(data.as_slice()).unwrap_err();
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn test_reject_nondigit_field() {
        let data = pgm_bytes("P5 two 2 255\n", &[0; 4]);
        assert!(matches!(
            read_pgm(data.as_slice()),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_write_layout() {
        let img = GrayImage::from_raw(2, 1, 100, vec![3, 4]).unwrap();
        let mut out = Vec::new();
        write_pgm(&img, &mut out).unwrap();
        assert_eq!(out, pgm_bytes("P5\n2 1\n100\n", &[3, 4]));
    }

    #[test]
    fn test_roundtrip() {
        let img = GrayImage::from_raw(3, 2, 255, vec![0, 1, 2, 253, 254, 255]).unwrap();
        let mut bytes = Vec::new();
        write_pgm(&img, &mut bytes).unwrap();
        let back = read_pgm(bytes.as_slice()).unwrap();
        assert!(back.equals(&img));
    }
}
