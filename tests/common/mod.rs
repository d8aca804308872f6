//! ELF64 image builder for tests.
//!
//! Lays out a file header, optional program headers, section data and a
//! section header table using the `object` crate's record types, in host byte
//! order. A `.shstrtab` is appended automatically and named by `e_shstrndx`.

#![allow(dead_code)]

use object::elf;
use object::endian::{U16, U32, U64};
use object::pod::bytes_of;
use object::Endianness;

fn native() -> Endianness {
    if cfg!(target_endian = "little") {
        Endianness::Little
    } else {
        Endianness::Big
    }
}

fn u16(v: u16) -> U16<Endianness> {
    U16::new(native(), v)
}
fn u32(v: u32) -> U32<Endianness> {
    U32::new(native(), v)
}
fn u64(v: u64) -> U64<Endianness> {
    U64::new(native(), v)
}

fn align(buffer: &mut Vec<u8>, to: usize) {
    let len = buffer.len().div_ceil(to) * to;
    buffer.resize(len, 0);
}

/// Builds the bytes of a string table and hands out offsets.
pub struct Strtab {
    data: Vec<u8>,
}

impl Strtab {
    pub fn new() -> Self {
        Self { data: vec![0] }
    }

    pub fn add(&mut self, name: &str) -> u32 {
        let offset = self.data.len() as u32;
        self.data.extend_from_slice(name.as_bytes());
        self.data.push(0);
        offset
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// One `Elf64_Sym` in host byte order.
pub fn symbol(st_name: u32, st_info: u8, st_shndx: u16, st_value: u64, st_size: u64) -> Vec<u8> {
    let sym = elf::Sym64::<Endianness> {
        st_name: u32(st_name),
        st_info,
        st_other: 0,
        st_shndx: u16(st_shndx),
        st_value: u64(st_value),
        st_size: u64(st_size),
    };
    bytes_of(&sym).to_vec()
}

pub struct SectionSpec {
    pub name: String,
    pub sh_type: u32,
    pub sh_flags: u64,
    pub sh_link: u32,
    pub sh_info: u32,
    pub sh_entsize: u64,
    pub data: Vec<u8>,
    /// Overrides the computed `sh_size` when set.
    pub size: Option<u64>,
}

pub struct ObjectBuilder {
    pub e_type: u16,
    pub e_entry: u64,
    sections: Vec<SectionSpec>,
    segments: Vec<elf::ProgramHeader64<Endianness>>,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        Self {
            e_type: elf::ET_REL,
            e_entry: 0,
            sections: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Adds a section and returns its index (the null section is index 0).
    pub fn section(&mut self, name: &str, sh_type: u32, sh_flags: u64, data: Vec<u8>) -> usize {
        self.sections.push(SectionSpec {
            name: name.to_string(),
            sh_type,
            sh_flags,
            sh_link: 0,
            sh_info: 0,
            sh_entsize: 0,
            data,
            size: None,
        });
        self.sections.len()
    }

    pub fn spec(&mut self, index: usize) -> &mut SectionSpec {
        &mut self.sections[index - 1]
    }

    pub fn segment(&mut self, p_type: u32, p_flags: u32, p_vaddr: u64, p_memsz: u64) {
        self.segments.push(elf::ProgramHeader64::<Endianness> {
            p_type: u32(p_type),
            p_flags: u32(p_flags),
            p_offset: u64(0),
            p_vaddr: u64(p_vaddr),
            p_paddr: u64(p_vaddr),
            p_filesz: u64(0),
            p_memsz: u64(p_memsz),
            p_align: u64(0x1000),
        });
    }

    pub fn build(&self) -> Vec<u8> {
        let mut names = Strtab::new();
        let name_offsets: Vec<u32> = self.sections.iter().map(|s| names.add(&s.name)).collect();
        let shstrtab_name = names.add(".shstrtab");
        let shstrtab = names.into_bytes();

        let num_sections = self.sections.len() + 2;
        let phoff = if self.segments.is_empty() { 0 } else { 64 };

        let mut buffer = vec![0u8; 64];
        for segment in &self.segments {
            buffer.extend_from_slice(bytes_of(segment));
        }

        let mut offsets = Vec::new();
        for section in &self.sections {
            align(&mut buffer, 8);
            offsets.push(buffer.len() as u64);
            buffer.extend_from_slice(&section.data);
        }
        let shstrtab_offset = buffer.len() as u64;
        buffer.extend_from_slice(&shstrtab);

        align(&mut buffer, 8);
        let shoff = buffer.len() as u64;

        // Null section header
        let null_sec = elf::SectionHeader64::<Endianness> {
            sh_name: u32(0),
            sh_type: u32(elf::SHT_NULL),
            sh_flags: u64(0),
            sh_addr: u64(0),
            sh_offset: u64(0),
            sh_size: u64(0),
            sh_link: u32(0),
            sh_info: u32(0),
            sh_addralign: u64(0),
            sh_entsize: u64(0),
        };
        buffer.extend_from_slice(bytes_of(&null_sec));

        for (i, section) in self.sections.iter().enumerate() {
            let sec_header = elf::SectionHeader64::<Endianness> {
                sh_name: u32(name_offsets[i]),
                sh_type: u32(section.sh_type),
                sh_flags: u64(section.sh_flags),
                sh_addr: u64(0),
                sh_offset: u64(offsets[i]),
                sh_size: u64(section.size.unwrap_or(section.data.len() as u64)),
                sh_link: u32(section.sh_link),
                sh_info: u32(section.sh_info),
                sh_addralign: u64(8),
                sh_entsize: u64(section.sh_entsize),
            };
            buffer.extend_from_slice(bytes_of(&sec_header));
        }

        let shstrtab_header = elf::SectionHeader64::<Endianness> {
            sh_name: u32(shstrtab_name),
            sh_type: u32(elf::SHT_STRTAB),
            sh_flags: u64(0),
            sh_addr: u64(0),
            sh_offset: u64(shstrtab_offset),
            sh_size: u64(shstrtab.len() as u64),
            sh_link: u32(0),
            sh_info: u32(0),
            sh_addralign: u64(1),
            sh_entsize: u64(0),
        };
        buffer.extend_from_slice(bytes_of(&shstrtab_header));

        let file_header = elf::FileHeader64::<Endianness> {
            e_ident: elf::Ident {
                magic: elf::ELFMAG,
                class: elf::ELFCLASS64,
                data: if cfg!(target_endian = "little") {
                    elf::ELFDATA2LSB
                } else {
                    elf::ELFDATA2MSB
                },
                version: elf::EV_CURRENT,
                os_abi: elf::ELFOSABI_SYSV,
                abi_version: 0,
                padding: [0; 7],
            },
            e_type: u16(self.e_type),
            e_machine: u16(elf::EM_X86_64),
            e_version: u32(elf::EV_CURRENT as u32),
            e_entry: u64(self.e_entry),
            e_phoff: u64(phoff),
            e_shoff: u64(shoff),
            e_flags: u32(0),
            e_ehsize: u16(64),
            e_phentsize: u16(56),
            e_phnum: u16(self.segments.len() as u16),
            e_shentsize: u16(64),
            e_shnum: u16(num_sections as u16),
            e_shstrndx: u16(num_sections as u16 - 1),
        };
        buffer[..64].copy_from_slice(bytes_of(&file_header));
        buffer
    }
}

/// A relocatable object with code, data, a symbol table and one segment:
/// `[null, .text, .data, .symtab, .strtab, .shstrtab]`.
pub fn sample_object() -> Vec<u8> {
    let mut strings = Strtab::new();
    let main = strings.add("main");
    let counter = strings.add("counter");
    let file = strings.add("sample.c");

    let mut symbols = symbol(0, 0, 0, 0, 0);
    symbols.extend(symbol(file, elf::STT_FILE, elf::SHN_ABS, 0, 0));
    symbols.extend(symbol(main, (elf::STB_GLOBAL << 4) | elf::STT_FUNC, 1, 0, 16));
    symbols.extend(symbol(counter, (elf::STB_GLOBAL << 4) | elf::STT_OBJECT, 2, 0, 4));
    // Suffix of "counter", resolving to "ter".
    let weak = (elf::STB_WEAK << 4) | elf::STT_NOTYPE;
    symbols.extend(symbol(counter + 4, weak, elf::SHN_UNDEF, 0, 0));

    let mut builder = ObjectBuilder::new();
    builder.section(
        ".text",
        elf::SHT_PROGBITS,
        (elf::SHF_ALLOC | elf::SHF_EXECINSTR) as u64,
        vec![0x90; 16],
    );
    builder.section(
        ".data",
        elf::SHT_PROGBITS,
        (elf::SHF_ALLOC | elf::SHF_WRITE) as u64,
        vec![0; 4],
    );
    let symtab = builder.section(".symtab", elf::SHT_SYMTAB, 0, symbols);
    let strtab = builder.section(".strtab", elf::SHT_STRTAB, 0, strings.into_bytes());
    let spec = builder.spec(symtab);
    spec.sh_link = strtab as u32;
    spec.sh_info = 2;
    spec.sh_entsize = 24;
    builder.segment(elf::PT_LOAD, elf::PF_R | elf::PF_X, 0x400000, 0x1000);
    builder.build()
}
