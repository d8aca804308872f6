//! Enum catalog.
//!
//! Every enumerated ELF field is described by a [`Catalog`]: an ordered list of
//! (value, name, description) entries registered once as a `static`, plus
//! optional inclusive ranges for the OS/processor reserved bands. Lookups never
//! fail; anything unregistered resolves to the [`UNKNOWN`] sentinel.
//!
//! Bit-flag words are described by a [`FlagSet`], which renders a mask as the
//! names of the set bits in registration order.
//!
//! The ELF64 tables live in [`elf64`].

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::OnceLock;

pub mod elf64;

/// Name reported for values no catalog entry covers.
pub const UNKNOWN: &str = "UNKNOWN";

const UNKNOWN_DESCRIPTION: &str = "Unrecognized value";

/// One registered value of an enumerated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<T> {
    pub value: T,
    pub name: &'static str,
    pub description: &'static str,
}

impl<T> Glyph<T> {
    /// Whether this is the sentinel returned for unregistered values.
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN
    }
}

/// An inclusive band of values sharing one name (e.g. `SHT_LOOS..=SHT_HIOS`).
#[derive(Debug, Clone, Copy)]
pub struct Band<T> {
    pub low: T,
    pub high: T,
    pub name: &'static str,
    pub description: &'static str,
}

/// Registry for one enumerated field domain.
pub struct Catalog<T: 'static> {
    glyphs: &'static [Glyph<T>],
    bands: &'static [Band<T>],
    by_value: OnceLock<HashMap<T, usize>>,
    by_name: OnceLock<HashMap<&'static str, usize>>,
}

impl<T: Copy + Eq + Hash + PartialOrd> Catalog<T> {
    pub const fn new(glyphs: &'static [Glyph<T>], bands: &'static [Band<T>]) -> Self {
        Self {
            glyphs,
            bands,
            by_value: OnceLock::new(),
            by_name: OnceLock::new(),
        }
    }

    /// Resolves `value` to its entry, falling back to a band, then to [`UNKNOWN`].
    pub fn lookup(&self, value: T) -> Glyph<T> {
        let index = self.by_value.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.glyphs.len());
            for (i, glyph) in self.glyphs.iter().enumerate() {
                // First registration wins for aliased values.
                map.entry(glyph.value).or_insert(i);
            }
            map
        });
        if let Some(&i) = index.get(&value) {
            return self.glyphs[i];
        }
        if let Some(band) = self
            .bands
            .iter()
            .find(|band| band.low <= value && value <= band.high)
        {
            return Glyph {
                value,
                name: band.name,
                description: band.description,
            };
        }
        Glyph {
            value,
            name: UNKNOWN,
            description: UNKNOWN_DESCRIPTION,
        }
    }

    /// Shorthand for `lookup(value).name`.
    pub fn name(&self, value: T) -> &'static str {
        self.lookup(value).name
    }

    /// Reverse lookup by symbolic name. Bands are not searched.
    pub fn by_name(&self, name: &str) -> Option<Glyph<T>> {
        let index = self.by_name.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.glyphs.len());
            for (i, glyph) in self.glyphs.iter().enumerate() {
                map.entry(glyph.name).or_insert(i);
            }
            map
        });
        index.get(name).map(|&i| self.glyphs[i])
    }
}

/// Registry of the single-bit (or masked) flags of one flag word.
pub struct FlagSet<T: 'static> {
    flags: &'static [Glyph<T>],
}

impl<T> FlagSet<T>
where
    T: Copy + PartialEq + Default + std::ops::BitAnd<Output = T>,
{
    pub const fn new(flags: &'static [Glyph<T>]) -> Self {
        Self { flags }
    }

    /// Names of every registered flag with `value & flag != 0`, in registration order.
    pub fn render_mask(&self, value: T) -> Vec<&'static str> {
        self.flags
            .iter()
            .filter(|flag| value & flag.value != T::default())
            .map(|flag| flag.name)
            .collect()
    }

    /// [`render_mask`](Self::render_mask) joined with `separator`.
    pub fn join(&self, value: T, separator: &str) -> String {
        self.render_mask(value).join(separator)
    }

    pub fn by_name(&self, name: &str) -> Option<Glyph<T>> {
        self.flags.iter().find(|flag| flag.name == name).copied()
    }
}
