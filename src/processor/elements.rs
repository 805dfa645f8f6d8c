//! `SectionProcessor<Elements>` (spec.md §4.7). Grounded in
//! `MSONElementsParser.h`: a keyword-marked (`Elements`) singleton
//! section whose only content is further element list items.

use crate::element::Element;
use crate::markdown::MarkdownNode;
use crate::parser_data::SectionParserData;
use crate::report::Report;
use crate::section_type::{candidate_section_type, SectionType};

use super::{element, push_ignoring_warning};

/// Parse the children of an `Elements` keyword-marker node into an
/// ordered collection. Non-element children are reported as
/// `IgnoringWarning` and skipped — `isDescriptionNode` is always `false`
/// for this processor, so nothing here is ever treated as prose.
pub fn parse_elements(node: &MarkdownNode, report: &mut Report, pd: &SectionParserData) -> Vec<Element> {
    let mut elements = Vec::new();
    for child in &node.children {
        if candidate_section_type(child, false) == SectionType::MSONElement {
            elements.push(element::parse_element(child, report, pd));
        } else {
            push_ignoring_warning(report, pd, child);
        }
    }
    elements
}

#[cfg(test)]
mod __tests__ {
    use super::*;
    use crate::element::DataType;
    use crate::report::WarningKind;
    use crate::section_type::SectionType as ST;

    fn pd() -> SectionParserData<'static> {
        SectionParserData::new("", ST::MSONElements)
    }

    #[test]
    fn collects_each_nested_element_in_order() {
        let node = MarkdownNode::list_item("Elements", vec![0..8]).with_children(vec![
            MarkdownNode::list_item("(string)", vec![10..18]),
            MarkdownNode::list_item("(number)", vec![20..28]),
        ]);
        let mut report = Report::new();
        let elements = parse_elements(&node, &mut report, &pd());
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].r#type, DataType::String);
        assert_eq!(elements[1].r#type, DataType::Number);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn non_element_child_is_reported_and_skipped() {
        let node = MarkdownNode::list_item("Elements", vec![0..8]).with_children(vec![
            MarkdownNode::paragraph("stray prose", vec![10..21]),
            MarkdownNode::list_item("(string)", vec![22..30]),
        ]);
        let mut report = Report::new();
        let elements = parse_elements(&node, &mut report, &pd());
        assert_eq!(elements.len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].kind, WarningKind::IgnoringWarning);
    }
}
