//! Utility functions.

use std::mem::size_of;

use object::pod::Pod;
use object::Endianness;

use crate::error::{Error, Result};

/// Returns `data[offset..offset + len]`, or a bounds error naming `what`.
///
/// Offsets and sizes come straight from the file, so the end is computed with
/// checked arithmetic and an overflow is reported the same way as a short buffer.
pub fn span<'a>(data: &'a [u8], offset: u64, len: u64, what: &'static str) -> Result<&'a [u8]> {
    let bounds = || Error::Bounds {
        what,
        offset,
        len,
        available: data.len() as u64,
    };
    let end = offset.checked_add(len).ok_or_else(bounds)?;
    if end > data.len() as u64 {
        return Err(bounds());
    }
    Ok(&data[offset as usize..end as usize])
}

/// Returns the bytes from `data[start..]` up to (not including) the next NUL.
///
/// A run that reaches the end of `data` without a terminator is returned whole.
pub fn until_nul(data: &[u8], start: usize) -> &[u8] {
    let tail = &data[start.min(data.len())..];
    match tail.iter().position(|&b| b == 0) {
        Some(end) => &tail[..end],
        None => tail,
    }
}

/// Host byte order, which is how every field is read.
pub fn native() -> Endianness {
    if cfg!(target_endian = "little") {
        Endianness::Little
    } else {
        Endianness::Big
    }
}

/// Views `data[offset..offset + size_of::<T>()]` as one of `object`'s ELF records.
pub fn record<'a, T: Pod>(data: &'a [u8], offset: u64, what: &'static str) -> Result<&'a T> {
    let bytes = span(data, offset, size_of::<T>() as u64, what)?;
    object::pod::from_bytes::<T>(bytes)
        .map(|(record, _)| record)
        .map_err(|()| Error::Bounds {
            what,
            offset,
            len: size_of::<T>() as u64,
            available: data.len() as u64,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use object::endian::U16;

    #[test]
    fn span_rejects_overflowing_end() {
        let data = [0u8; 8];
        let err = span(&data, u64::MAX, 2, "field").unwrap_err();
        assert!(matches!(err, Error::Bounds { what: "field", .. }));
    }

    #[test]
    fn span_allows_exact_end() {
        let data = [1u8, 2, 3, 4];
        assert_eq!(span(&data, 2, 2, "field").unwrap(), &[3, 4]);
        assert!(span(&data, 3, 2, "field").is_err());
        assert!(span(&data, 4, 0, "field").unwrap().is_empty());
    }

    #[test]
    fn until_nul_stops_at_terminator_or_end() {
        assert_eq!(until_nul(b"ab\0cd", 0), b"ab");
        assert_eq!(until_nul(b"ab\0cd", 3), b"cd");
        assert_eq!(until_nul(b"ab\0cd", 2), b"");
        assert_eq!(until_nul(b"ab", 9), b"");
    }

    #[test]
    fn record_reads_at_any_offset() {
        let mut data = vec![0xaau8; 3];
        data.extend_from_slice(&0x1234u16.to_ne_bytes());
        let value = record::<U16<Endianness>>(&data, 3, "field").unwrap();
        assert_eq!(value.get(native()), 0x1234);
        assert!(matches!(
            record::<U16<Endianness>>(&data, 4, "half"),
            Err(Error::Bounds { what: "half", .. })
        ));
    }
}
