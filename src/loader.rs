//! Object model assembly.
//!
//! Builds an [`ElfObject`] in one pass over an in-memory buffer:
//! 1. Load: bring the whole input into memory (mapped file or reader).
//! 2. Header: decode the file header at offset 0.
//! 3. Sections: walk the section header table, classifying each entry.
//! 4. Segments: walk the program header table.
//!
//! The first error aborts the parse; no partially built object escapes.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Error, Result};
use crate::model::ElfObject;
use crate::raw::{FileHeader, ProgramHeader, SectionHeader, SECTION_HEADER_SIZE};
use crate::section::{classify, SectionContent};

/// Maps the file at `path` and parses it.
pub fn open(path: &Path) -> Result<ElfObject> {
    let file = File::open(path)?;
    // The mapping is only read while `file` is open and is dropped before returning.
    let mmap = unsafe { Mmap::map(&file)? };
    tracing::debug!("mapped {} ({} bytes)", path.display(), mmap.len());
    parse(&mmap)
}

/// Reads exactly `len` bytes from `reader` and parses them.
///
/// A source that ends early is an I/O error, not a truncated parse.
pub fn read<R: Read>(reader: R, len: u64) -> Result<ElfObject> {
    let data = load(reader, len)?;
    parse(&data)
}

fn load<R: Read>(reader: R, len: u64) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.take(len).read_to_end(&mut data)?;
    if (data.len() as u64) < len {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("truncated read: got {} of {} bytes", data.len(), len),
        )));
    }
    Ok(data)
}

/// Decodes a complete ELF64 object from `data`.
pub fn parse(data: &[u8]) -> Result<ElfObject> {
    let header = FileHeader::decode(data, 0)?;
    tracing::debug!(
        "header: type={:#x} machine={:#x} shoff={:#x} shnum={} phoff={:#x} phnum={}",
        header.e_type,
        header.e_machine,
        header.e_shoff,
        header.e_shnum,
        header.e_phoff,
        header.e_phnum
    );

    let (section_headers, sections) = walk_sections(&header, data)?;
    let program_headers = walk_segments(&header, data)?;

    Ok(ElfObject::new(header, section_headers, sections, program_headers))
}

/// File offset of entry `index` in a table at `base` with stride `entsize`.
fn entry_offset(
    base: u64,
    index: u16,
    entsize: u16,
    what: &'static str,
    available: usize,
) -> Result<u64> {
    (index as u64)
        .checked_mul(entsize as u64)
        .and_then(|rel| base.checked_add(rel))
        .ok_or(Error::Bounds {
            what,
            offset: base,
            len: index as u64 * entsize as u64,
            available: available as u64,
        })
}

fn walk_sections(
    header: &FileHeader,
    data: &[u8],
) -> Result<(Vec<SectionHeader>, Vec<SectionContent>)> {
    let mut headers = Vec::new();
    let mut contents = Vec::new();
    if header.e_shoff == 0 {
        tracing::debug!("no section header table");
        return Ok((headers, contents));
    }

    // e_shentsize is the stride even when it differs from the record size.
    if header.e_shentsize as usize != SECTION_HEADER_SIZE {
        tracing::debug!("e_shentsize {} differs from record size", header.e_shentsize);
    }

    headers.reserve(header.e_shnum as usize);
    contents.reserve(header.e_shnum as usize);
    for idx in 0..header.e_shnum {
        let offset = entry_offset(
            header.e_shoff,
            idx,
            header.e_shentsize,
            "section header",
            data.len(),
        )?;
        let section = SectionHeader::decode(data, offset)?;
        let content = classify(&section, data)?;
        tracing::trace!(
            "section {}: type={:#x} offset={:#x} size={:#x} -> {}",
            idx,
            section.sh_type,
            section.sh_offset,
            section.sh_size,
            content.kind()
        );
        headers.push(section);
        contents.push(content);
    }
    Ok((headers, contents))
}

fn walk_segments(header: &FileHeader, data: &[u8]) -> Result<Vec<ProgramHeader>> {
    let mut segments = Vec::new();
    if header.e_phoff == 0 {
        tracing::debug!("no program header table");
        return Ok(segments);
    }

    segments.reserve(header.e_phnum as usize);
    for idx in 0..header.e_phnum {
        let offset = entry_offset(
            header.e_phoff,
            idx,
            header.e_phentsize,
            "program header",
            data.len(),
        )?;
        let segment = ProgramHeader::decode(data, offset)?;
        tracing::trace!(
            "segment {}: type={:#x} flags={:#x} vaddr={:#x}",
            idx,
            segment.p_type,
            segment.p_flags,
            segment.p_vaddr
        );
        segments.push(segment);
    }
    Ok(segments)
}
