//! Section classification (spec.md §4.4/§4.5). Grounded in
//! `Section.h`'s `SectionType`/`SectionTraits` and the keyword-marker
//! recognizers scattered through `MSONElementsParser.h` /
//! `MSONPropertiesParser.h`, plus the `nestedSectionType` look-ahead in
//! `MSONElementParser.cc`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{self, Display, Formatter};

use crate::element::DataType;
use crate::markdown::{MarkdownNode, MarkdownNodeKind};

/// What role a Markdown node plays once classified against the section
/// currently being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionType {
    Undefined,
    MSONElement,
    MSONProperty,
    MSONElements,
    MSONProperties,
}

impl Display for SectionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionType::Undefined => "Undefined",
            SectionType::MSONElement => "MSONElement",
            SectionType::MSONProperty => "MSONProperty",
            SectionType::MSONElements => "MSONElements",
            SectionType::MSONProperties => "MSONProperties",
        };
        write!(f, "{}", name)
    }
}

/// Recognizers for the two keyword-marked nested sections. Passed in
/// rather than read off a singleton, per the REDESIGN FLAGS in spec.md §9
/// (the original reaches these through `Traits::get()`).
pub struct SectionTraits {
    elements_keyword: &'static Regex,
    properties_keyword: &'static Regex,
}

static ELEMENTS_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[Ee]lements?$").unwrap());
static PROPERTIES_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[Pp]roperties?$").unwrap());

impl Default for SectionTraits {
    fn default() -> Self {
        Self {
            elements_keyword: &ELEMENTS_KEYWORD,
            properties_keyword: &PROPERTIES_KEYWORD,
        }
    }
}

impl SectionTraits {
    /// `Some(MSONElements)` / `Some(MSONProperties)` if `node`'s own text,
    /// trimmed, is a bare "Elements"/"Properties" marker line — else
    /// `None`. Checked against `node.text` directly rather than a
    /// synthesized first child, since this adapter already denormalizes a
    /// list item's own line into `text`.
    pub fn keyword_section_type(&self, node: &MarkdownNode) -> Option<SectionType> {
        if node.kind != MarkdownNodeKind::ListItem {
            return None;
        }
        let trimmed = node.text.trim();
        if self.elements_keyword.is_match(trimmed) {
            Some(SectionType::MSONElements)
        } else if self.properties_keyword.is_match(trimmed) {
            Some(SectionType::MSONProperties)
        } else {
            None
        }
    }
}

/// Is `node` itself shaped like a nested element/property signature line:
/// a list item with non-empty text. `expect_property` comes from the
/// enclosing context's type (Array ⇒ expect nested elements, anything
/// else ⇒ expect nested properties), per spec.md §4.5.
pub fn candidate_section_type(node: &MarkdownNode, expect_property: bool) -> SectionType {
    if node.kind != MarkdownNodeKind::ListItem || node.text.trim().is_empty() {
        return SectionType::Undefined;
    }
    if expect_property {
        SectionType::MSONProperty
    } else {
        SectionType::MSONElement
    }
}

/// Classify `siblings[index]` within the children of the element/property
/// currently being parsed, per spec.md §4.5's five-step description:
///
/// 1. Expect property iff `context_type != Array`; else expect element.
/// 2. Peek at the next sibling to see whether the list already appears
///    underway (a recognizable nested element/property right after this
///    node), and treat being the last sibling the same way — there is
///    nothing left to contradict this node being a real signature line.
/// 3. If either holds, and this node is itself shaped like a nested
///    element/property, accept it as one.
/// 4. Otherwise test for an `Elements`/`Properties` keyword marker.
/// 5. Else `Undefined` (the driver treats this as description text).
pub fn nested_section_type(
    siblings: &[MarkdownNode],
    index: usize,
    context_type: DataType,
    traits: &SectionTraits,
) -> SectionType {
    let expect_property = context_type != DataType::Array;
    let node = &siblings[index];

    let next_is_nested_section = siblings
        .get(index + 1)
        .map(|next| candidate_section_type(next, expect_property) != SectionType::Undefined)
        .unwrap_or(false);
    let is_last = index + 1 == siblings.len();

    if next_is_nested_section || is_last {
        let section = candidate_section_type(node, expect_property);
        if section != SectionType::Undefined {
            return section;
        }
    }

    if let Some(section) = traits.keyword_section_type(node) {
        return section;
    }

    SectionType::Undefined
}

#[cfg(test)]
mod __tests__ {
    use super::*;

    fn item(text: &str) -> MarkdownNode {
        MarkdownNode::list_item(text, vec![])
    }

    fn paragraph(text: &str) -> MarkdownNode {
        MarkdownNode::paragraph(text, vec![])
    }

    #[test]
    fn keyword_markers_allow_only_first_letter_case_and_plural() {
        let traits = SectionTraits::default();
        assert_eq!(
            traits.keyword_section_type(&item("Elements")),
            Some(SectionType::MSONElements)
        );
        assert_eq!(
            traits.keyword_section_type(&item("elements")),
            Some(SectionType::MSONElements)
        );
        assert_eq!(
            traits.keyword_section_type(&item("Element")),
            Some(SectionType::MSONElements)
        );
        assert_eq!(
            traits.keyword_section_type(&item("properties")),
            Some(SectionType::MSONProperties)
        );
        assert_eq!(traits.keyword_section_type(&item("ELEMENTS")), None);
        assert_eq!(traits.keyword_section_type(&item("Element Types")), None);
    }

    #[test]
    fn sole_nested_child_is_recognized_as_element() {
        // "- tags: home, green (required)\n    - (string)\n"
        let traits = SectionTraits::default();
        let siblings = vec![item("(string)")];
        assert_eq!(
            nested_section_type(&siblings, 0, DataType::Array, &traits),
            SectionType::MSONElement
        );
    }

    #[test]
    fn leading_description_paragraph_is_undefined() {
        let traits = SectionTraits::default();
        let siblings = vec![paragraph("This is tags."), item("(string)")];
        assert_eq!(
            nested_section_type(&siblings, 0, DataType::Array, &traits),
            SectionType::Undefined
        );
        assert_eq!(
            nested_section_type(&siblings, 1, DataType::Array, &traits),
            SectionType::MSONElement
        );
    }

    #[test]
    fn properties_are_expected_outside_array_context() {
        let traits = SectionTraits::default();
        let siblings = vec![item("street: Main Street")];
        assert_eq!(
            nested_section_type(&siblings, 0, DataType::Object, &traits),
            SectionType::MSONProperty
        );
    }
}
