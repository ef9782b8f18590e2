//! Binary format definitions for universe files.

use std::io::{self, Read, Write};

/// Magic bytes identifying a universe file.
pub const UNIVERSE_MAGIC: &[u8; 4] = b"LANT";

/// Current format version.
pub const UNIVERSE_VERSION: u16 = 1;

/// File header for the universe format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniverseHeader {
    /// Grid side length.
    pub size: u32,
    /// Reserved flags, written as zero.
    pub flags: u16,
}

impl UniverseHeader {
    /// Size of header in bytes.
    /// Magic(4) + Version(2) + Flags(2) + Size(4) = 12
    pub const SIZE: usize = 12;

    pub fn new(size: u32) -> Self {
        Self { size, flags: 0 }
    }

    /// Number of cell bytes that follow the header.
    pub fn cell_bytes(&self) -> Option<usize> {
        (self.size as usize).checked_mul(self.size as usize)
    }

    /// Write header to output.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(UNIVERSE_MAGIC)?;
        w.write_all(&UNIVERSE_VERSION.to_le_bytes())?;
        w.write_all(&self.flags.to_le_bytes())?;
        w.write_all(&self.size.to_le_bytes())?;
        Ok(())
    }

    /// Read header from input.
    pub fn read_from<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut magic = [0u8; 4];
        r.read_exact(&mut magic)?;
        if &magic != UNIVERSE_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Invalid LANT magic bytes",
            ));
        }

        let mut buf2 = [0u8; 2];
        let mut buf4 = [0u8; 4];

        r.read_exact(&mut buf2)?;
        let version = u16::from_le_bytes(buf2);
        if version != UNIVERSE_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Unsupported LANT version: {}", version),
            ));
        }

        r.read_exact(&mut buf2)?;
        let flags = u16::from_le_bytes(buf2);

        r.read_exact(&mut buf4)?;
        let size = u32::from_le_bytes(buf4);

        Ok(Self { size, flags })
    }
}

/// Encode cell states as one byte per cell.
pub fn encode_cells(cells: &[bool]) -> Vec<u8> {
    cells.iter().map(|&alive| alive as u8).collect()
}

/// Decode one byte per cell. Only 0 and 1 are accepted.
pub fn decode_cells(bytes: &[u8], output: &mut [bool]) -> io::Result<()> {
    if bytes.len() != output.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Cell count mismatch: {} bytes vs {} cells",
                bytes.len(),
                output.len()
            ),
        ));
    }
    for (i, (cell, &b)) in output.iter_mut().zip(bytes).enumerate() {
        *cell = match b {
            0 => false,
            1 => true,
            other => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Invalid cell byte {} at offset {}", other, i),
                ));
            }
        };
    }
    Ok(())
}
