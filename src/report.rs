//! Diagnostics: [`Report`], [`Warning`], [`WarningKind`] and the
//! byte-range → character-range conversion utility. Grounded in
//! `snowcrash`'s `Report`/`Warning` (referenced throughout `Signature.h`
//! and `SectionProcessor.h`), generalizing a byte-pointer→line/column
//! mapper in the same style as `util::Code`/`Position` elsewhere in this
//! codebase into a byte-range→character-range mapper.

use once_cell::unsync::OnceCell;
use std::ops::Range;

/// The taxonomy of diagnostics the core emits (spec.md §7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A malformed signature line: missing identifier, missing value,
    /// unrecognized specifier, mismatched escape sequence, and so on.
    SignatureSyntaxWarning,
    /// An unrecognized Markdown block at the section level.
    IgnoringWarning,
}

/// An inclusive-exclusive range of character offsets in the source text,
/// used to locate a [`Warning`] for a human-facing renderer.
pub type CharacterRange = Range<usize>;

/// One diagnostic accumulated while parsing. Never fatal — see
/// [`crate::error::AccessUndefinedValue`] for the sole exceptional
/// condition the core can raise instead of warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    pub kind: WarningKind,
    pub character_ranges: Vec<CharacterRange>,
}

impl Warning {
    pub fn new(
        message: impl Into<String>,
        kind: WarningKind,
        character_ranges: Vec<CharacterRange>,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            character_ranges,
        }
    }
}

/// Accumulates warnings emitted during a parse. `error` is reserved for a
/// future fatal condition the core does not itself raise (forward
/// compatibility with callers — e.g. the surrounding API Blueprint parser
/// — that do have fatal failure modes).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub error: Option<String>,
    pub warnings: Vec<Warning>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_warning(&mut self, message: impl Into<String>, kind: WarningKind, ranges: Vec<CharacterRange>) {
        self.warnings.push(Warning::new(message, kind, ranges));
    }
}

/// Byte-offset source text wrapper that lazily indexes line breaks, used
/// only to turn byte ranges into character ranges on demand — a direct
/// generalization of `Code`/`Position`'s byte-pointer index.
pub struct SourceText<'s> {
    value: &'s str,
    char_offsets: OnceCell<Vec<usize>>,
}

impl<'s> SourceText<'s> {
    pub fn new(value: &'s str) -> Self {
        Self {
            value,
            char_offsets: OnceCell::new(),
        }
    }

    /// Byte offset of the start of every character in `value`, plus one
    /// sentinel entry for `value.len()`.
    fn char_boundaries(&self) -> &Vec<usize> {
        self.char_offsets.get_or_init(|| {
            let mut offsets: Vec<usize> = self.value.char_indices().map(|(i, _)| i).collect();
            offsets.push(self.value.len());
            offsets
        })
    }

    /// Convert a byte offset into a character offset by binary-searching
    /// the char-boundary index.
    pub fn byte_to_char_offset(&self, byte_offset: usize) -> usize {
        let boundaries = self.char_boundaries();
        match boundaries.binary_search(&byte_offset) {
            Ok(index) => index,
            Err(index) => index,
        }
    }

    /// Convert a set of byte ranges into character ranges — the
    /// `bytes_range_set_to_characters_range_set` utility named in spec.md
    /// §6.
    pub fn bytes_range_set_to_characters_range_set(
        &self,
        byte_ranges: &[Range<usize>],
    ) -> Vec<CharacterRange> {
        byte_ranges
            .iter()
            .map(|r| self.byte_to_char_offset(r.start)..self.byte_to_char_offset(r.end))
            .collect()
    }
}
