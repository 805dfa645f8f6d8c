//! `SectionProcessor<Element>` (spec.md §4.5). Grounded in
//! `MSONElementParser.h::ElementSignature::setSignature` and
//! `SectionProcessor<mson::Element>` in `MSONElementParser.cc`.

use crate::applier::apply_element_signature;
use crate::element::Element;
use crate::markdown::MarkdownNode;
use crate::parser_data::SectionParserData;
use crate::report::{Report, WarningKind};
use crate::signature::{self, SignatureTraits};

use super::drive_nested;

/// Parse `node` as an MSON element: its own signature line, then its
/// nested children (description, nested elements/properties, or a
/// keyword-marked collection).
pub fn parse_element(node: &MarkdownNode, report: &mut Report, pd: &SectionParserData) -> Element {
    let mut element = Element::default();
    let traits = SignatureTraits::element();
    let (sig, warnings) = signature::parse(&node.text, &traits);
    let ranges = pd
        .source
        .bytes_range_set_to_characters_range_set(&node.source_map);
    for message in warnings {
        report.push_warning(message, WarningKind::SignatureSyntaxWarning, ranges.clone());
    }
    apply_element_signature(&sig, &mut element, report, &ranges);
    drive_nested(&node.children, &mut element, report, pd);
    element
}
