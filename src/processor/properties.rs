//! `SectionProcessor<Properties>` (spec.md §4.7). Grounded in
//! `MSONPropertiesParser.h`: a keyword-marked (`Properties`) section
//! whose only content is further property list items. Flagged as
//! non-singleton in the original despite being semantically comparable to
//! `Elements` — see DESIGN.md's Open Question resolution.

use crate::element::Property;
use crate::markdown::MarkdownNode;
use crate::parser_data::SectionParserData;
use crate::report::Report;
use crate::section_type::{candidate_section_type, SectionType};

use super::{property, push_ignoring_warning};

/// Parse the children of a `Properties` keyword-marker node into an
/// ordered collection, skipping and reporting anything that isn't itself
/// a property signature line.
pub fn parse_properties(node: &MarkdownNode, report: &mut Report, pd: &SectionParserData) -> Vec<Property> {
    let mut properties = Vec::new();
    for child in &node.children {
        if candidate_section_type(child, true) == SectionType::MSONProperty {
            properties.push(property::parse_property(child, report, pd));
        } else {
            push_ignoring_warning(report, pd, child);
        }
    }
    properties
}

#[cfg(test)]
mod __tests__ {
    use super::*;
    use crate::section_type::SectionType as ST;

    fn pd() -> SectionParserData<'static> {
        SectionParserData::new("", ST::MSONProperties)
    }

    #[test]
    fn collects_each_nested_property_in_order() {
        let node = MarkdownNode::list_item("Properties", vec![0..10]).with_children(vec![
            MarkdownNode::list_item("street", vec![12..18]),
            MarkdownNode::list_item("city", vec![19..23]),
        ]);
        let mut report = Report::new();
        let properties = parse_properties(&node, &mut report, &pd());
        let names: Vec<&str> = properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["street", "city"]);
        assert!(report.warnings.is_empty());
    }
}
