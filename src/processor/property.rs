//! `SectionProcessor<Property>` (spec.md §4.6). Grounded in
//! `MSONPropertyParser.h::PropertySignature::setSignature`.

use crate::applier::apply_property_signature;
use crate::element::Property;
use crate::markdown::MarkdownNode;
use crate::parser_data::SectionParserData;
use crate::report::{Report, WarningKind};
use crate::signature::{self, SignatureTraits};

use super::drive_nested;

/// Parse `node` as an MSON property: name, requirement and templating
/// from the signature line, then nested children via the same dispatch
/// the Element processor uses.
pub fn parse_property(node: &MarkdownNode, report: &mut Report, pd: &SectionParserData) -> Property {
    let mut property = Property::default();
    let traits = SignatureTraits::property();
    let (sig, warnings) = signature::parse(&node.text, &traits);
    let ranges = pd
        .source
        .bytes_range_set_to_characters_range_set(&node.source_map);
    for message in warnings {
        report.push_warning(message, WarningKind::SignatureSyntaxWarning, ranges.clone());
    }
    apply_property_signature(&sig, &mut property, report, &ranges);
    drive_nested(&node.children, &mut property, report, pd);
    property
}

#[cfg(test)]
mod __tests__ {
    use super::*;
    use crate::element::DataType;
    use crate::section_type::SectionType;

    fn pd() -> SectionParserData<'static> {
        SectionParserData::new("", SectionType::MSONProperty)
    }

    #[test]
    fn scalar_property_with_identifier_and_description() {
        let node = MarkdownNode::list_item(
            "id-1: 42 (number) - Identifier of the resource",
            vec![0..48],
        );
        let mut report = Report::new();
        let property = parse_property(&node, &mut report, &pd());
        assert_eq!(property.name, "id-1");
        assert!(!property.templated);
        assert!(!property.required);
        assert_eq!(property.r#type, DataType::Number);
        assert_eq!(property.as_string().unwrap(), "42");
        assert_eq!(property.description, "Identifier of the resource");
    }

    #[test]
    fn sole_nested_child_extends_the_array() {
        // "- tags: home, green (required)\n    - (string)\n"
        let node = MarkdownNode::list_item("tags: home, green (required)", vec![0..29])
            .with_children(vec![MarkdownNode::list_item("(string)", vec![33..41])]);
        let mut report = Report::new();
        let property = parse_property(&node, &mut report, &pd());
        assert_eq!(property.name, "tags");
        assert!(property.required);
        assert_eq!(property.r#type, DataType::Array);
        let values = property.as_array().unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0].as_string().unwrap(), "home");
        assert_eq!(values[1].as_string().unwrap(), "green");
        assert_eq!(values[2].r#type, DataType::String);
        assert!(values[2].value.is_none());
    }

    #[test]
    fn templated_object_property_collects_nested_properties() {
        // "- {address}\n    - street\n    - city\n    - state\n"
        let node = MarkdownNode::list_item("{address}", vec![0..9]).with_children(vec![
            MarkdownNode::list_item("street", vec![13..19]),
            MarkdownNode::list_item("city", vec![23..27]),
            MarkdownNode::list_item("state", vec![31..36]),
        ]);
        let mut report = Report::new();
        let property = parse_property(&node, &mut report, &pd());
        assert_eq!(property.name, "address");
        assert!(property.templated);
        assert_eq!(property.r#type, DataType::Object);
        let props = property.as_object().unwrap();
        let names: Vec<&str> = props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["street", "city", "state"]);
        assert!(report.warnings.is_empty());
    }
}
