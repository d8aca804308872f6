//! Document rendering.
//!
//! Turns a finished [`ElfObject`] into a JSON tree in one of two shapes:
//! - `raw`: the graph as stored, numeric fields only;
//! - `decoded`: enum fields and flag words through the catalog, with section
//!   and symbol names resolved.
//!
//! Tables are emitted in file order.

use serde_json::{json, Value};

use crate::catalog::elf64::{
    CLASS, DATA, MACHINE, OBJECT_TYPE, OS_ABI, SECTION_FLAGS, SECTION_TYPE, SEGMENT_FLAGS,
    SEGMENT_TYPE, SYMBOL_BINDING, SYMBOL_TYPE, SYMBOL_VISIBILITY, VERSION,
};
use crate::error::Result;
use crate::model::{ElfObject, SectionView};
use crate::raw::{FileHeader, ProgramHeader};
use crate::section::SectionContent;
use crate::symbol::Symbol;

const FLAG_SEPARATOR: &str = "|";

/// Which document to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Shape {
    Raw,
    #[default]
    Decoded,
}

pub fn render(object: &ElfObject, shape: Shape) -> Result<Value> {
    match shape {
        Shape::Raw => raw(object),
        Shape::Decoded => decoded(object),
    }
}

pub fn raw(object: &ElfObject) -> Result<Value> {
    Ok(serde_json::to_value(object)?)
}

pub fn decoded(object: &ElfObject) -> Result<Value> {
    let sections = object
        .iter_sections()
        .map(|view| decode_section(object, view))
        .collect::<Result<Vec<_>>>()?;
    let segments: Vec<Value> = object.program_headers().iter().map(decode_segment).collect();

    Ok(json!({
        "header": decode_header(object.header()),
        "sections": sections,
        "segments": segments,
    }))
}

fn decode_header(h: &FileHeader) -> Value {
    let ident = &h.e_ident;
    json!({
        "magic": String::from_utf8_lossy(&ident.magic),
        "class": CLASS.name(ident.class),
        "data": DATA.name(ident.data),
        "ident_version": VERSION.name(ident.version as u32),
        "os_abi": OS_ABI.name(ident.os_abi),
        "abi_version": ident.abi_version,
        "e_type": OBJECT_TYPE.name(h.e_type),
        "e_machine": MACHINE.name(h.e_machine),
        "e_version": VERSION.name(h.e_version),
        "e_entry": h.e_entry,
        "e_phoff": h.e_phoff,
        "e_shoff": h.e_shoff,
        "e_flags": h.e_flags,
        "e_ehsize": h.e_ehsize,
        "e_phentsize": h.e_phentsize,
        "e_phnum": h.e_phnum,
        "e_shentsize": h.e_shentsize,
        "e_shnum": h.e_shnum,
        "e_shstrndx": h.e_shstrndx,
    })
}

fn decode_section(object: &ElfObject, view: SectionView<'_>) -> Result<Value> {
    let h = view.header;
    let name = object.section_name(view.index)?;
    Ok(json!({
        "index": view.index,
        "name": name,
        "sh_type": SECTION_TYPE.name(h.sh_type),
        "sh_flags": SECTION_FLAGS.join(h.sh_flags, FLAG_SEPARATOR),
        "sh_addr": h.sh_addr,
        "sh_offset": h.sh_offset,
        "sh_size": h.sh_size,
        "sh_link": h.sh_link,
        "sh_info": h.sh_info,
        "sh_addralign": h.sh_addralign,
        "sh_entsize": h.sh_entsize,
        "content": decode_content(object, view)?,
    }))
}

fn decode_content(object: &ElfObject, view: SectionView<'_>) -> Result<Value> {
    Ok(match view.content {
        SectionContent::Opaque => json!({ "kind": "opaque" }),
        SectionContent::StringTable(table) => {
            let strings: Vec<&str> = table.entries().iter().map(|e| e.text.as_str()).collect();
            json!({ "kind": "string_table", "strings": strings })
        }
        SectionContent::SymbolTable(table) => {
            let symbols = table
                .symbols()
                .iter()
                .enumerate()
                .map(|(i, sym)| decode_symbol(object, view.index, i, sym))
                .collect::<Result<Vec<_>>>()?;
            json!({ "kind": "symbol_table", "symbols": symbols })
        }
    })
}

fn decode_symbol(object: &ElfObject, symtab: usize, index: usize, sym: &Symbol) -> Result<Value> {
    let section = sym.section();
    let shndx = match section.sentinel_name() {
        Some(name) => json!(name),
        None => json!(section.raw()),
    };
    Ok(json!({
        "index": index,
        "name": object.symbol_name(symtab, sym)?,
        "st_value": sym.st_value,
        "st_size": sym.st_size,
        "bind": SYMBOL_BINDING.name(sym.binding()),
        "type": SYMBOL_TYPE.name(sym.kind()),
        "visibility": SYMBOL_VISIBILITY.name(sym.visibility()),
        "st_shndx": shndx,
    }))
}

fn decode_segment(p: &ProgramHeader) -> Value {
    json!({
        "p_type": SEGMENT_TYPE.name(p.p_type),
        "p_flags": SEGMENT_FLAGS.join(p.p_flags, FLAG_SEPARATOR),
        "p_offset": p.p_offset,
        "p_vaddr": p.p_vaddr,
        "p_paddr": p.p_paddr,
        "p_filesz": p.p_filesz,
        "p_memsz": p.p_memsz,
        "p_align": p.p_align,
    })
}
