//! `SectionParserData` (spec.md §6): the read-only context threaded
//! through a parse — source bytes (for byte→character range conversion)
//! and the current section context. The upstream blueprint context named
//! in spec.md §6 is opaque to this core and genuinely unused by it, so it
//! is not modeled here.

use crate::report::SourceText;
use crate::section_type::SectionType;

pub struct SectionParserData<'s> {
    pub source: SourceText<'s>,
    pub section_context: SectionType,
}

impl<'s> SectionParserData<'s> {
    pub fn new(source: &'s str, section_context: SectionType) -> Self {
        Self {
            source: SourceText::new(source),
            section_context,
        }
    }
}

#[cfg(test)]
mod __tests__ {
    use super::*;

    #[test]
    fn carries_the_requested_section_context() {
        let pd = SectionParserData::new("- id: 1\n", SectionType::MSONProperty);
        assert_eq!(pd.section_context, SectionType::MSONProperty);
    }
}
