//! Symbol table entries.
//!
//! Decodes `Elf64_Sym` records and interprets their packed fields: the
//! binding/type nibbles of `st_info`, the visibility bits of `st_other`, and
//! the reserved sentinel values of `st_shndx`.

use std::mem::size_of;

use object::elf;
use object::Endianness;
use serde::Serialize;

use crate::catalog::elf64::SECTION_INDEX;
use crate::error::Result;
use crate::utils::{native, record};

/// Size of one ELF64 symbol record.
pub const SYMBOL_SIZE: usize = size_of::<elf::Sym64<Endianness>>();

/// A symbol as stored in a symbol table section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbol {
    /// Byte offset of the name in the string table named by the owning section's `sh_link`.
    pub st_name: u32,
    pub st_info: u8,
    pub st_other: u8,
    pub st_shndx: u16,
    pub st_value: u64,
    pub st_size: u64,
}

impl Symbol {
    pub fn decode(data: &[u8], offset: u64) -> Result<Self> {
        let sym: &elf::Sym64<Endianness> = record(data, offset, "symbol")?;
        let e = native();
        Ok(Self {
            st_name: sym.st_name.get(e),
            st_info: sym.st_info,
            st_other: sym.st_other,
            st_shndx: sym.st_shndx.get(e),
            st_value: sym.st_value.get(e),
            st_size: sym.st_size.get(e),
        })
    }

    /// Binding, the upper nibble of `st_info`.
    pub fn binding(&self) -> u8 {
        self.st_info >> 4
    }

    /// Type, the lower nibble of `st_info`.
    pub fn kind(&self) -> u8 {
        self.st_info & 0xf
    }

    /// Visibility, the low two bits of `st_other`.
    pub fn visibility(&self) -> u8 {
        self.st_other & 0x3
    }

    pub fn section(&self) -> SectionRef {
        SectionRef::from_raw(self.st_shndx)
    }
}

/// A section index field, split into ordinary indices and reserved sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRef {
    /// `SHN_UNDEF`.
    Undefined,
    /// `SHN_ABS`.
    Absolute,
    /// `SHN_COMMON`.
    Common,
    /// `SHN_XINDEX`: the real index lives in an `SHT_SYMTAB_SHNDX` section.
    Extended,
    /// Any other value in `SHN_LORESERVE..=SHN_HIRESERVE`.
    Reserved(u16),
    /// An ordinary index into the section header table.
    Index(u16),
}

impl SectionRef {
    pub fn from_raw(value: u16) -> Self {
        match value {
            elf::SHN_UNDEF => SectionRef::Undefined,
            elf::SHN_ABS => SectionRef::Absolute,
            elf::SHN_COMMON => SectionRef::Common,
            elf::SHN_XINDEX => SectionRef::Extended,
            v if v >= elf::SHN_LORESERVE => SectionRef::Reserved(v),
            v => SectionRef::Index(v),
        }
    }

    pub fn raw(&self) -> u16 {
        match *self {
            SectionRef::Undefined => elf::SHN_UNDEF,
            SectionRef::Absolute => elf::SHN_ABS,
            SectionRef::Common => elf::SHN_COMMON,
            SectionRef::Extended => elf::SHN_XINDEX,
            SectionRef::Reserved(v) | SectionRef::Index(v) => v,
        }
    }

    /// The ordinary section index, or `None` for a sentinel.
    pub fn index(&self) -> Option<usize> {
        match *self {
            SectionRef::Index(v) => Some(v as usize),
            _ => None,
        }
    }

    /// Catalog name of a sentinel; `None` for an ordinary index.
    pub fn sentinel_name(&self) -> Option<&'static str> {
        match self {
            SectionRef::Index(_) => None,
            other => Some(SECTION_INDEX.name(other.raw())),
        }
    }
}
