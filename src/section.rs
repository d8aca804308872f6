//! Section content classification.
//!
//! [`classify`] looks at a section header's type and decodes the bytes it
//! describes into a [`SectionContent`]. String tables and symbol tables are
//! interpreted; every other type is left opaque.

use std::borrow::Cow;

use object::elf;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::raw::SectionHeader;
use crate::symbol::{Symbol, SYMBOL_SIZE};
use crate::utils::{span, until_nul};

/// Decoded payload of one section, index-aligned with the section header table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionContent {
    /// Not decoded further.
    Opaque,
    StringTable(StringTable),
    SymbolTable(SymbolTable),
}

impl SectionContent {
    /// Short label used in error messages and documents.
    pub fn kind(&self) -> &'static str {
        match self {
            SectionContent::Opaque => "opaque",
            SectionContent::StringTable(_) => "string table",
            SectionContent::SymbolTable(_) => "symbol table",
        }
    }

    pub fn as_string_table(&self) -> Option<&StringTable> {
        match self {
            SectionContent::StringTable(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_symbol_table(&self) -> Option<&SymbolTable> {
        match self {
            SectionContent::SymbolTable(table) => Some(table),
            _ => None,
        }
    }
}

/// One NUL-delimited run found while scanning a string table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringEntry {
    /// Byte offset of the first character within the table.
    pub offset: usize,
    /// Length in bytes, excluding the terminator.
    pub len: usize,
    #[serde(skip)]
    pub text: String,
}

/// The bytes of a string table section plus the entries found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringTable {
    #[serde(skip)]
    data: Vec<u8>,
    entries: Vec<StringEntry>,
}

impl StringTable {
    /// Splits `data` at every NUL, starting at offset 0 and restarting after
    /// each terminator. A trailing run without a terminator is kept.
    pub fn parse(data: &[u8]) -> Self {
        let mut entries = Vec::new();
        let mut start = 0;
        while start < data.len() {
            let run = until_nul(data, start);
            entries.push(StringEntry {
                offset: start,
                len: run.len(),
                text: String::from_utf8_lossy(run).into_owned(),
            });
            start += run.len() + 1;
        }
        Self {
            data: data.to_vec(),
            entries,
        }
    }

    /// Declared size of the table in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn entries(&self) -> &[StringEntry] {
        &self.entries
    }

    /// The NUL-terminated string starting at `offset`.
    ///
    /// Any offset inside the table is valid, including ones that land in the
    /// middle of an entry found by [`parse`](Self::parse).
    pub fn get(&self, offset: u64) -> Result<Cow<'_, str>> {
        if offset >= self.data.len() as u64 {
            return Err(Error::Lookup {
                what: "string table offset",
                index: offset,
                len: self.data.len() as u64,
            });
        }
        Ok(String::from_utf8_lossy(until_nul(
            &self.data,
            offset as usize,
        )))
    }
}

/// Decoded records of a symbol table section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// Decodes `data` as consecutive symbol records.
    ///
    /// The length must be an exact multiple of the record size.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() % SYMBOL_SIZE != 0 {
            return Err(Error::Bounds {
                what: "symbol table",
                offset: (data.len() - data.len() % SYMBOL_SIZE) as u64,
                len: SYMBOL_SIZE as u64,
                available: data.len() as u64,
            });
        }
        let symbols = (0..data.len() / SYMBOL_SIZE)
            .map(|i| Symbol::decode(data, (i * SYMBOL_SIZE) as u64))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { symbols })
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Decodes the content described by `header` out of the whole-file `data`.
pub fn classify(header: &SectionHeader, data: &[u8]) -> Result<SectionContent> {
    match header.sh_type {
        elf::SHT_STRTAB => {
            let bytes = span(data, header.sh_offset, header.sh_size, "string table")?;
            Ok(SectionContent::StringTable(StringTable::parse(bytes)))
        }
        elf::SHT_SYMTAB => {
            let bytes = span(data, header.sh_offset, header.sh_size, "symbol table")?;
            Ok(SectionContent::SymbolTable(SymbolTable::parse(bytes)?))
        }
        _ => Ok(SectionContent::Opaque),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(sh_type: u32, sh_offset: u64, sh_size: u64) -> SectionHeader {
        SectionHeader {
            sh_name: 0,
            sh_type,
            sh_flags: 0,
            sh_addr: 0,
            sh_offset,
            sh_size,
            sh_link: 0,
            sh_info: 0,
            sh_addralign: 1,
            sh_entsize: 0,
        }
    }

    fn texts(content: &SectionContent) -> Vec<&str> {
        content
            .as_string_table()
            .unwrap()
            .entries()
            .iter()
            .map(|e| e.text.as_str())
            .collect()
    }

    #[test]
    fn string_table_splits_every_run() {
        let mut file = vec![0xffu8; 100];
        file.extend_from_slice(b"\0ab\0cde\0\0f");
        file.extend_from_slice(b"trailing");

        let content = classify(&header(elf::SHT_STRTAB, 100, 10), &file).unwrap();
        assert_eq!(texts(&content), vec!["", "ab", "cde", "", "f"]);

        let table = content.as_string_table().unwrap();
        let offsets: Vec<usize> = table.entries().iter().map(|e| e.offset).collect();
        assert_eq!(offsets, vec![0, 1, 4, 8, 9]);
        assert_eq!(table.size(), 10);
    }

    #[test]
    fn lookup_at_entry_offsets_round_trips() {
        let table = StringTable::parse(b"\0.text\0.symtab\0");
        for entry in table.entries() {
            assert_eq!(table.get(entry.offset as u64).unwrap(), entry.text);
        }
    }

    #[test]
    fn lookup_inside_an_entry() {
        let table = StringTable::parse(b"\0.rela.text\0");
        assert_eq!(table.get(6).unwrap(), ".text");
        assert!(matches!(table.get(12), Err(Error::Lookup { .. })));
    }

    #[test]
    fn empty_string_table() {
        let content = classify(&header(elf::SHT_STRTAB, 4, 0), &[0u8; 4]).unwrap();
        let table = content.as_string_table().unwrap();
        assert!(table.entries().is_empty());
        assert!(matches!(table.get(0), Err(Error::Lookup { .. })));
    }

    #[test]
    fn string_table_past_end_of_file() {
        let err = classify(&header(elf::SHT_STRTAB, 8, 16), &[0u8; 20]).unwrap_err();
        assert!(matches!(err, Error::Bounds { what: "string table", .. }));
    }

    #[test]
    fn symbol_table_exact_multiple() {
        let file = vec![0u8; SYMBOL_SIZE * 3 + 8];
        let header = header(elf::SHT_SYMTAB, 8, (SYMBOL_SIZE * 3) as u64);
        let content = classify(&header, &file).unwrap();
        assert_eq!(content.as_symbol_table().unwrap().len(), 3);
    }

    #[test]
    fn symbol_table_partial_record() {
        let file = vec![0u8; 128];
        let header = header(elf::SHT_SYMTAB, 0, (SYMBOL_SIZE + 1) as u64);
        let err = classify(&header, &file).unwrap_err();
        assert!(matches!(err, Error::Bounds { what: "symbol table", .. }));
    }

    #[test]
    fn symbol_table_past_end_of_file() {
        let file = vec![0u8; SYMBOL_SIZE];
        let err = classify(&header(elf::SHT_SYMTAB, 8, SYMBOL_SIZE as u64), &file).unwrap_err();
        assert!(matches!(err, Error::Bounds { .. }));
    }

    #[test]
    fn other_types_stay_opaque() {
        for sh_type in [
            elf::SHT_NULL,
            elf::SHT_PROGBITS,
            elf::SHT_RELA,
            elf::SHT_DYNSYM,
            elf::SHT_NOBITS,
        ] {
            // Extent is not checked for opaque sections.
            let content = classify(&header(sh_type, 1 << 40, 1 << 40), &[]).unwrap();
            assert_eq!(content, SectionContent::Opaque);
        }
    }
}
