//! Universe persistence: a complete snapshot of a grid's cells.
//!
//! # File Format
//!
//! ```text
//! Header (12 bytes):
//!   Magic: "LANT" (4 bytes)
//!   Version: u16
//!   Flags: u16 (reserved, 0)
//!   Size: u32
//!
//! Cells (size * size bytes):
//!   Row-major, 1 = living, 0 = dead
//! ```
//!
//! All integers are little-endian. Readers also accept the older headerless
//! layout (an `i32` size followed by the cells) when its length matches
//! exactly. Anything else, including trailing bytes, is rejected.

mod format;

pub use format::{UNIVERSE_MAGIC, UNIVERSE_VERSION, UniverseHeader, decode_cells, encode_cells};

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Write};
use std::path::Path;

use crate::compute::Grid;
use crate::error::{AntError, Result};

/// Write a grid in the current format.
pub fn write_universe<W: Write>(grid: &Grid, w: &mut W) -> Result<()> {
    let size = u32::try_from(grid.size()).map_err(|_| AntError::InvalidDimension {
        size: grid.size() as i64,
    })?;
    UniverseHeader::new(size).write_to(w)?;
    w.write_all(&encode_cells(grid.cells()))?;
    Ok(())
}

/// Read a grid from either the current or the legacy format.
///
/// The input is consumed to the end so that trailing garbage is detected.
pub fn read_universe<R: Read>(r: &mut R) -> Result<Grid> {
    let mut bytes = Vec::new();
    r.read_to_end(&mut bytes)?;
    decode_universe(&bytes)
}

/// Decode a complete universe held in memory.
pub fn decode_universe(bytes: &[u8]) -> Result<Grid> {
    if bytes.starts_with(UNIVERSE_MAGIC) {
        decode_current(bytes)
    } else {
        decode_legacy(bytes)
    }
}

fn decode_current(bytes: &[u8]) -> Result<Grid> {
    let mut cursor = Cursor::new(bytes);
    let header = UniverseHeader::read_from(&mut cursor)
        .map_err(|e| AntError::CorruptUniverse(e.to_string()))?;
    if header.size == 0 {
        return Err(AntError::InvalidDimension { size: 0 });
    }
    let body = &bytes[UniverseHeader::SIZE..];
    decode_body(header.size as usize, body)
}

fn decode_legacy(bytes: &[u8]) -> Result<Grid> {
    let Some((head, body)) = bytes.split_first_chunk::<4>() else {
        return Err(AntError::CorruptUniverse(format!(
            "{} bytes is too short for a universe",
            bytes.len()
        )));
    };
    let size = i32::from_le_bytes(*head);
    if size <= 0 {
        return Err(AntError::InvalidDimension { size: size as i64 });
    }
    let grid = decode_body(size as usize, body)?;
    log::warn!("Read legacy headerless universe ({0}x{0})", size);
    Ok(grid)
}

fn decode_body(size: usize, body: &[u8]) -> Result<Grid> {
    let expected = size
        .checked_mul(size)
        .ok_or_else(|| AntError::CorruptUniverse(format!("grid size {} overflows", size)))?;
    if body.len() != expected {
        return Err(AntError::CorruptUniverse(format!(
            "expected {} cell bytes for a {}x{} grid, found {}",
            expected,
            size,
            size,
            body.len()
        )));
    }

    let mut cells = vec![false; expected];
    decode_cells(body, &mut cells).map_err(|e| AntError::CorruptUniverse(e.to_string()))?;
    Grid::from_cells(size, cells)
}

/// Save a grid to a file, replacing any existing file.
pub fn save_universe<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_universe(grid, &mut writer)?;
    writer.flush()?;
    log::info!(
        "Saved {0}x{0} universe to {1}",
        grid.size(),
        path.display()
    );
    Ok(())
}

/// Load a grid from a file.
pub fn load_universe<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let grid = read_universe(&mut reader)?;
    log::info!(
        "Loaded {0}x{0} universe from {1}",
        grid.size(),
        path.display()
    );
    Ok(grid)
}
