//! ELF64 catalog tables.
//!
//! Values are the `object` crate's constants; the registered name is the
//! constant's own identifier.

use object::elf::*;

use super::{Band, Catalog, FlagSet, Glyph};

macro_rules! glyphs {
    ($ty:ty; $($value:ident => $description:literal,)*) => {
        &[$(Glyph { value: $value as $ty, name: stringify!($value), description: $description },)*]
    };
}

macro_rules! band {
    ($ty:ty; $low:ident ..= $high:ident, $name:literal, $description:literal) => {
        Band { low: $low as $ty, high: $high as $ty, name: $name, description: $description }
    };
}

/// `e_ident[EI_CLASS]`.
pub static CLASS: Catalog<u8> = Catalog::new(
    glyphs![u8;
        ELFCLASSNONE => "Invalid class",
        ELFCLASS32 => "32-bit objects",
        ELFCLASS64 => "64-bit objects",
    ],
    &[],
);

/// `e_ident[EI_DATA]`.
pub static DATA: Catalog<u8> = Catalog::new(
    glyphs![u8;
        ELFDATANONE => "Invalid data encoding",
        ELFDATA2LSB => "Object file data structures are little-endian",
        ELFDATA2MSB => "Object file data structures are big-endian",
    ],
    &[],
);

/// `e_ident[EI_VERSION]` and `e_version`.
pub static VERSION: Catalog<u32> = Catalog::new(
    glyphs![u32;
        EV_NONE => "Invalid version",
        EV_CURRENT => "Current version",
    ],
    &[],
);

/// `e_ident[EI_OSABI]`.
pub static OS_ABI: Catalog<u8> = Catalog::new(
    glyphs![u8;
        ELFOSABI_SYSV => "System V ABI",
        ELFOSABI_HPUX => "HP-UX operating system",
        ELFOSABI_NETBSD => "NetBSD",
        ELFOSABI_GNU => "GNU/Linux",
        ELFOSABI_SOLARIS => "Sun Solaris",
        ELFOSABI_AIX => "IBM AIX",
        ELFOSABI_IRIX => "SGI Irix",
        ELFOSABI_FREEBSD => "FreeBSD",
        ELFOSABI_TRU64 => "Compaq TRU64 UNIX",
        ELFOSABI_MODESTO => "Novell Modesto",
        ELFOSABI_OPENBSD => "OpenBSD",
        ELFOSABI_ARM_AEABI => "ARM EABI",
        ELFOSABI_ARM => "ARM",
        ELFOSABI_STANDALONE => "Standalone (embedded) application",
    ],
    &[],
);

/// `e_type`.
pub static OBJECT_TYPE: Catalog<u16> = Catalog::new(
    glyphs![u16;
        ET_NONE => "No file type",
        ET_REL => "Relocatable object file",
        ET_EXEC => "Executable file",
        ET_DYN => "Shared object file",
        ET_CORE => "Core file",
    ],
    &[
        band!(u16; ET_LOOS ..= ET_HIOS, "ET_OS", "Environment-specific use"),
        band!(u16; ET_LOPROC ..= ET_HIPROC, "ET_PROC", "Processor-specific use"),
    ],
);

/// `e_machine`.
pub static MACHINE: Catalog<u16> = Catalog::new(
    glyphs![u16;
        EM_NONE => "No machine",
        EM_SPARC => "SUN SPARC",
        EM_386 => "Intel 80386",
        EM_68K => "Motorola m68k family",
        EM_MIPS => "MIPS R3000 big-endian",
        EM_PPC => "PowerPC",
        EM_PPC64 => "PowerPC 64-bit",
        EM_S390 => "IBM S390",
        EM_ARM => "ARM",
        EM_SPARCV9 => "SPARC v9 64-bit",
        EM_IA_64 => "Intel Merced",
        EM_X86_64 => "AMD x86-64 architecture",
        EM_AARCH64 => "ARM AARCH64",
        EM_RISCV => "RISC-V",
        EM_BPF => "Linux BPF",
        EM_LOONGARCH => "LoongArch",
    ],
    &[],
);

/// `sh_type`.
pub static SECTION_TYPE: Catalog<u32> = Catalog::new(
    glyphs![u32;
        SHT_NULL => "Section header table entry unused",
        SHT_PROGBITS => "Program data",
        SHT_SYMTAB => "Symbol table",
        SHT_STRTAB => "String table",
        SHT_RELA => "Relocation entries with addends",
        SHT_HASH => "Symbol hash table",
        SHT_DYNAMIC => "Dynamic linking information",
        SHT_NOTE => "Notes",
        SHT_NOBITS => "Program space with no data (bss)",
        SHT_REL => "Relocation entries, no addends",
        SHT_SHLIB => "Reserved",
        SHT_DYNSYM => "Dynamic linker symbol table",
        SHT_INIT_ARRAY => "Array of constructors",
        SHT_FINI_ARRAY => "Array of destructors",
        SHT_PREINIT_ARRAY => "Array of pre-constructors",
        SHT_GROUP => "Section group",
        SHT_SYMTAB_SHNDX => "Extended section indices",
        SHT_GNU_ATTRIBUTES => "Object attributes",
        SHT_GNU_HASH => "GNU-style hash table",
        SHT_GNU_VERDEF => "Version definition section",
        SHT_GNU_VERNEED => "Version needs section",
        SHT_GNU_VERSYM => "Version symbol table",
    ],
    &[
        band!(u32; SHT_LOOS ..= SHT_HIOS, "SHT_OS", "Environment-specific use"),
        band!(u32; SHT_LOPROC ..= SHT_HIPROC, "SHT_PROC", "Processor-specific use"),
        band!(u32; SHT_LOUSER ..= SHT_HIUSER, "SHT_USER", "Application-specific use"),
    ],
);

/// `sh_flags`.
pub static SECTION_FLAGS: FlagSet<u64> = FlagSet::new(
    glyphs![u64;
        SHF_WRITE => "Writable",
        SHF_ALLOC => "Occupies memory during execution",
        SHF_EXECINSTR => "Executable",
        SHF_MERGE => "Might be merged",
        SHF_STRINGS => "Contains nul-terminated strings",
        SHF_INFO_LINK => "`sh_info' contains SHT index",
        SHF_LINK_ORDER => "Preserve order after combining",
        SHF_OS_NONCONFORMING => "Non-standard OS specific handling required",
        SHF_GROUP => "Section is member of a group",
        SHF_TLS => "Section holds thread-local data",
        SHF_COMPRESSED => "Section with compressed data",
        SHF_MASKOS => "OS-specific",
        SHF_MASKPROC => "Processor-specific",
    ],
);

/// `p_type`.
pub static SEGMENT_TYPE: Catalog<u32> = Catalog::new(
    glyphs![u32;
        PT_NULL => "Program header table entry unused",
        PT_LOAD => "Loadable program segment",
        PT_DYNAMIC => "Dynamic linking information",
        PT_INTERP => "Program interpreter",
        PT_NOTE => "Auxiliary information",
        PT_SHLIB => "Reserved",
        PT_PHDR => "Entry for header table itself",
        PT_TLS => "Thread-local storage segment",
        PT_GNU_EH_FRAME => "GCC .eh_frame_hdr segment",
        PT_GNU_STACK => "Indicates stack executability",
        PT_GNU_RELRO => "Read-only after relocation",
        PT_GNU_PROPERTY => "GNU property notes",
    ],
    &[
        band!(u32; PT_LOOS ..= PT_HIOS, "PT_OS", "Environment-specific use"),
        band!(u32; PT_LOPROC ..= PT_HIPROC, "PT_PROC", "Processor-specific use"),
    ],
);

/// `p_flags`.
pub static SEGMENT_FLAGS: FlagSet<u32> = FlagSet::new(
    glyphs![u32;
        PF_X => "Execute",
        PF_W => "Write",
        PF_R => "Read",
        PF_MASKOS => "OS-specific",
        PF_MASKPROC => "Processor-specific",
    ],
);

/// High nibble of `st_info`.
pub static SYMBOL_BINDING: Catalog<u8> = Catalog::new(
    glyphs![u8;
        STB_LOCAL => "Local symbol",
        STB_GLOBAL => "Global symbol",
        STB_WEAK => "Weak symbol",
        STB_GNU_UNIQUE => "Unique symbol",
    ],
    &[
        band!(u8; STB_LOOS ..= STB_HIOS, "STB_OS", "Environment-specific use"),
        band!(u8; STB_LOPROC ..= STB_HIPROC, "STB_PROC", "Processor-specific use"),
    ],
);

/// Low nibble of `st_info`.
pub static SYMBOL_TYPE: Catalog<u8> = Catalog::new(
    glyphs![u8;
        STT_NOTYPE => "Symbol type is unspecified",
        STT_OBJECT => "Symbol is a data object",
        STT_FUNC => "Symbol is a code object",
        STT_SECTION => "Symbol associated with a section",
        STT_FILE => "Symbol's name is file name",
        STT_COMMON => "Symbol is a common data object",
        STT_TLS => "Symbol is thread-local data object",
        STT_GNU_IFUNC => "Symbol is indirect code object",
    ],
    &[
        band!(u8; STT_LOOS ..= STT_HIOS, "STT_OS", "Environment-specific use"),
        band!(u8; STT_LOPROC ..= STT_HIPROC, "STT_PROC", "Processor-specific use"),
    ],
);

/// Low two bits of `st_other`.
pub static SYMBOL_VISIBILITY: Catalog<u8> = Catalog::new(
    glyphs![u8;
        STV_DEFAULT => "Default symbol visibility rules",
        STV_INTERNAL => "Processor specific hidden class",
        STV_HIDDEN => "Symbol unavailable in other modules",
        STV_PROTECTED => "Not preemptible, not exported",
    ],
    &[],
);

/// Reserved values of a section index (`st_shndx`, `e_shstrndx`).
pub static SECTION_INDEX: Catalog<u16> = Catalog::new(
    glyphs![u16;
        SHN_UNDEF => "Undefined section",
        SHN_ABS => "Associated symbol is absolute",
        SHN_COMMON => "Associated symbol is common",
        SHN_XINDEX => "Index is in extra table",
    ],
    &[
        band!(u16; SHN_LOPROC ..= SHN_HIPROC, "SHN_PROC", "Processor-specific"),
        band!(u16; SHN_LOOS ..= SHN_HIOS, "SHN_OS", "OS-specific"),
        band!(u16; SHN_LORESERVE ..= SHN_HIRESERVE, "SHN_RESERVE", "Reserved index"),
    ],
);
