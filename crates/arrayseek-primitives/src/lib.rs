//! Closed element-kind vocabulary shared by the arrayseek crates.

#[macro_use]
mod macros;

use std::fmt;

///
/// ElementKind
///
/// Canonical element kind of a typed array.
/// Arrays never mix kinds; the kind is fixed per array instance.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ElementKind {
    Int64,
    Int32,
    Int16,
    Int8,
    Float64,
    Float32,
    Bool,
    Char,
    Reference,
}

impl ElementKind {
    /// Return the full metadata descriptor for one element kind.
    #[must_use]
    pub const fn metadata(self) -> ElementMetadata {
        element_kind_registry!(metadata_from_registry, self)
    }

    /// Return the comparison family for this element kind.
    #[must_use]
    pub const fn family(self) -> ElementFamily {
        self.metadata().family
    }

    /// Stable human-readable kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.metadata().label
    }

    #[must_use]
    pub const fn is_floating(self) -> bool {
        self.metadata().is_floating
    }

    /// Return whether search on this kind accepts a tolerance window.
    #[must_use]
    pub const fn supports_tolerance(self) -> bool {
        self.metadata().supports_tolerance
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// ElementMetadata
///
/// Capability metadata for one element kind.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ElementMetadata {
    pub family: ElementFamily,
    pub label: &'static str,
    pub is_floating: bool,
    pub supports_tolerance: bool,
}

///
/// ElementFamily
///
/// Coarse family deciding which equality rule applies.
/// Everything except `Floating` compares exactly during search.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ElementFamily {
    Integral,
    Floating,
    Bool,
    Char,
    Reference,
}

/// Ordered list of all element kinds in registry order.
pub const ALL_ELEMENT_KINDS: [ElementKind; 9] = element_kind_registry!(all_kinds_from_registry);

///
/// TESTS
///
