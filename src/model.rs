//! The decoded object graph.
//!
//! An [`ElfObject`] owns every decoded record. Cross-references between tables
//! (`sh_link`, `e_shstrndx`, `st_shndx`) stay plain indices into the sibling
//! vectors; the resolution helpers here follow them on demand.

use std::borrow::Cow;

use object::elf;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::raw::{FileHeader, ProgramHeader, SectionHeader};
use crate::section::SectionContent;
use crate::symbol::Symbol;

/// A fully decoded ELF64 object. Read-only once built by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElfObject {
    header: FileHeader,
    section_headers: Vec<SectionHeader>,
    sections: Vec<SectionContent>,
    program_headers: Vec<ProgramHeader>,
}

/// A section viewed through both of its index-aligned tables.
#[derive(Debug, Clone, Copy)]
pub struct SectionView<'a> {
    pub index: usize,
    pub header: &'a SectionHeader,
    pub content: &'a SectionContent,
}

impl ElfObject {
    pub(crate) fn new(
        header: FileHeader,
        section_headers: Vec<SectionHeader>,
        sections: Vec<SectionContent>,
        program_headers: Vec<ProgramHeader>,
    ) -> Self {
        debug_assert_eq!(section_headers.len(), sections.len());
        Self {
            header,
            section_headers,
            sections,
            program_headers,
        }
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn section_headers(&self) -> &[SectionHeader] {
        &self.section_headers
    }

    pub fn sections(&self) -> &[SectionContent] {
        &self.sections
    }

    pub fn program_headers(&self) -> &[ProgramHeader] {
        &self.program_headers
    }

    /// Walks the section header table and the decoded contents in lock-step.
    pub fn iter_sections(&self) -> impl Iterator<Item = SectionView<'_>> {
        self.section_headers
            .iter()
            .zip(&self.sections)
            .enumerate()
            .map(|(index, (header, content))| SectionView {
                index,
                header,
                content,
            })
    }

    /// Index of the section-name string table, following the `SHN_XINDEX`
    /// escape through entry 0's `sh_link`. `None` when the file has none.
    pub fn section_name_table_index(&self) -> Option<usize> {
        match self.header.e_shstrndx {
            elf::SHN_UNDEF => None,
            elf::SHN_XINDEX => self
                .section_headers
                .first()
                .map(|first| first.sh_link as usize),
            index => Some(index as usize),
        }
    }

    /// The NUL-terminated string at `offset` in the string table at `table`.
    pub fn resolve_name(&self, table: usize, offset: u64) -> Result<Cow<'_, str>> {
        let content = self.sections.get(table).ok_or(Error::Lookup {
            what: "section index",
            index: table as u64,
            len: self.sections.len() as u64,
        })?;
        let strings = content.as_string_table().ok_or(Error::TypeMismatch {
            index: table,
            expected: "string table",
            found: content.kind(),
        })?;
        strings.get(offset)
    }

    /// Name of the section at `index`, or `None` if the file has no
    /// section-name string table.
    pub fn section_name(&self, index: usize) -> Result<Option<Cow<'_, str>>> {
        let header = self.section_headers.get(index).ok_or(Error::Lookup {
            what: "section index",
            index: index as u64,
            len: self.section_headers.len() as u64,
        })?;
        match self.section_name_table_index() {
            Some(table) => self.resolve_name(table, header.sh_name as u64).map(Some),
            None => Ok(None),
        }
    }

    /// Name of `symbol`, which belongs to the symbol table at `symtab`.
    ///
    /// Resolved through that table's own `sh_link`, not through `e_shstrndx`.
    pub fn symbol_name(&self, symtab: usize, symbol: &Symbol) -> Result<Cow<'_, str>> {
        let header = self.section_headers.get(symtab).ok_or(Error::Lookup {
            what: "section index",
            index: symtab as u64,
            len: self.section_headers.len() as u64,
        })?;
        self.resolve_name(header.sh_link as usize, symbol.st_name as u64)
    }

    /// First section whose resolved name equals `name`.
    pub fn section_by_name(&self, name: &str) -> Option<SectionView<'_>> {
        self.iter_sections().find(|view| {
            matches!(self.section_name(view.index), Ok(Some(ref n)) if n == name)
        })
    }
}
