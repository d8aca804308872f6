//! Fixed-layout header decoders.
//!
//! Each record is viewed through the matching `object::elf` layout at
//! `data[offset..offset + SIZE]` and copied out with integers in host byte
//! order. Only the extent is checked here; whether the values make sense is up
//! to the caller.

use std::mem::size_of;

use object::elf;
use object::Endianness;
use serde::Serialize;

use crate::error::Result;
use crate::utils::{native, record};

/// Size of the ELF64 file header.
pub const FILE_HEADER_SIZE: usize = size_of::<elf::FileHeader64<Endianness>>();
/// Size of one ELF64 section header table entry.
pub const SECTION_HEADER_SIZE: usize = size_of::<elf::SectionHeader64<Endianness>>();
/// Size of one ELF64 program header table entry.
pub const PROGRAM_HEADER_SIZE: usize = size_of::<elf::ProgramHeader64<Endianness>>();

/// The sixteen `e_ident` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ident {
    pub magic: [u8; 4],
    pub class: u8,
    pub data: u8,
    pub version: u8,
    pub os_abi: u8,
    pub abi_version: u8,
    pub padding: [u8; 7],
}

impl Ident {
    pub fn has_elf_magic(&self) -> bool {
        self.magic == elf::ELFMAG
    }
}

/// The ELF64 file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileHeader {
    pub e_ident: Ident,
    pub e_type: u16,
    pub e_machine: u16,
    pub e_version: u32,
    pub e_entry: u64,
    pub e_phoff: u64,
    pub e_shoff: u64,
    pub e_flags: u32,
    pub e_ehsize: u16,
    pub e_phentsize: u16,
    pub e_phnum: u16,
    pub e_shentsize: u16,
    pub e_shnum: u16,
    pub e_shstrndx: u16,
}

impl FileHeader {
    pub fn decode(data: &[u8], offset: u64) -> Result<Self> {
        let h: &elf::FileHeader64<Endianness> = record(data, offset, "file header")?;
        let e = native();
        Ok(Self {
            e_ident: Ident {
                magic: h.e_ident.magic,
                class: h.e_ident.class,
                data: h.e_ident.data,
                version: h.e_ident.version,
                os_abi: h.e_ident.os_abi,
                abi_version: h.e_ident.abi_version,
                padding: h.e_ident.padding,
            },
            e_type: h.e_type.get(e),
            e_machine: h.e_machine.get(e),
            e_version: h.e_version.get(e),
            e_entry: h.e_entry.get(e),
            e_phoff: h.e_phoff.get(e),
            e_shoff: h.e_shoff.get(e),
            e_flags: h.e_flags.get(e),
            e_ehsize: h.e_ehsize.get(e),
            e_phentsize: h.e_phentsize.get(e),
            e_phnum: h.e_phnum.get(e),
            e_shentsize: h.e_shentsize.get(e),
            e_shnum: h.e_shnum.get(e),
            e_shstrndx: h.e_shstrndx.get(e),
        })
    }
}

/// One entry of the section header table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionHeader {
    /// Byte offset of the name in the section-name string table.
    pub sh_name: u32,
    pub sh_type: u32,
    pub sh_flags: u64,
    pub sh_addr: u64,
    pub sh_offset: u64,
    pub sh_size: u64,
    /// Index of a related section; its meaning depends on `sh_type`.
    pub sh_link: u32,
    pub sh_info: u32,
    pub sh_addralign: u64,
    pub sh_entsize: u64,
}

impl SectionHeader {
    pub fn decode(data: &[u8], offset: u64) -> Result<Self> {
        let h: &elf::SectionHeader64<Endianness> = record(data, offset, "section header")?;
        let e = native();
        Ok(Self {
            sh_name: h.sh_name.get(e),
            sh_type: h.sh_type.get(e),
            sh_flags: h.sh_flags.get(e),
            sh_addr: h.sh_addr.get(e),
            sh_offset: h.sh_offset.get(e),
            sh_size: h.sh_size.get(e),
            sh_link: h.sh_link.get(e),
            sh_info: h.sh_info.get(e),
            sh_addralign: h.sh_addralign.get(e),
            sh_entsize: h.sh_entsize.get(e),
        })
    }
}

/// One entry of the program header table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramHeader {
    pub p_type: u32,
    pub p_flags: u32,
    pub p_offset: u64,
    pub p_vaddr: u64,
    pub p_paddr: u64,
    pub p_filesz: u64,
    pub p_memsz: u64,
    pub p_align: u64,
}

impl ProgramHeader {
    pub fn decode(data: &[u8], offset: u64) -> Result<Self> {
        let h: &elf::ProgramHeader64<Endianness> = record(data, offset, "program header")?;
        let e = native();
        Ok(Self {
            p_type: h.p_type.get(e),
            p_flags: h.p_flags.get(e),
            p_offset: h.p_offset.get(e),
            p_vaddr: h.p_vaddr.get(e),
            p_paddr: h.p_paddr.get(e),
            p_filesz: h.p_filesz.get(e),
            p_memsz: h.p_memsz.get(e),
            p_align: h.p_align.get(e),
        })
    }
}
