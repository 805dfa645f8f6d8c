//! The section-processor driver (spec.md §4.5–§4.9) and the four
//! concrete processors. Grounded in `SectionProcessor.h`'s
//! `SectionProcessorBase` driving loop and the element/property/keyword
//! processors in `MSONElementParser.{h,cc}`, `MSONPropertyParser.h`,
//! `MSONElementsParser.h`, `MSONPropertiesParser.h`.
//!
//! Adaptation note (recorded in DESIGN.md): spec.md §6 describes the
//! external interface in terms of a mutable sibling iterator
//! (`(next_iterator, Element)`); since this crate owns `MarkdownNode`'s
//! children directly as an owned slice, the iterator-threading is
//! unnecessary — each processor simply walks `node.children` once and
//! returns its fully built value.

pub mod element;
pub mod elements;
pub mod properties;
pub mod property;

pub use element::parse_element;
pub use elements::parse_elements;
pub use properties::parse_properties;
pub use property::parse_property;

use crate::element::{DataType, Element, Value};
use crate::markdown::MarkdownNode;
use crate::parser_data::SectionParserData;
use crate::report::{Report, WarningKind};
use crate::section_type::{nested_section_type, SectionTraits, SectionType};
use crate::util::Log;

/// The generic driving loop shared by the Element and Property processors
/// (spec.md §4.6: "processNestedSection delegates to the Element
/// processor"). Classifies each child and dispatches to the matching
/// hook, accumulating into `target`.
pub(crate) fn drive_nested(
    children: &[MarkdownNode],
    target: &mut Element,
    report: &mut Report,
    pd: &SectionParserData,
) {
    let traits = SectionTraits::default();
    let log: Log<&str> = Log::Default("processor::drive_nested");

    for (index, child) in children.iter().enumerate() {
        let section = nested_section_type(children, index, target.r#type, &traits);
        log.log_dispatch("nested section", &section);

        match section {
            SectionType::MSONElement => {
                let nested = element::parse_element(child, report, pd);
                target.array_value_mut().push(nested);
            }
            SectionType::MSONElements => {
                let nested = elements::parse_elements(child, report, pd);
                target.value = Some(Value::ArrayValue(nested));
            }
            SectionType::MSONProperty => {
                promote_to_object(target, report, pd, child, &log);
                let nested = property::parse_property(child, report, pd);
                target.object_value_mut().push(nested);
            }
            SectionType::MSONProperties => {
                promote_to_object(target, report, pd, child, &log);
                let nested = properties::parse_properties(child, report, pd);
                target.value = Some(Value::ObjectValue(nested));
            }
            SectionType::Undefined => {
                append_description_block(target, child);
            }
        }
    }
}

/// Post-condition from spec.md §4.5: once a property-shaped child is
/// about to be added, `target.type` must end up `Object` — silently if
/// it was `Undefined`, with a warning otherwise.
fn promote_to_object(
    target: &mut Element,
    report: &mut Report,
    pd: &SectionParserData,
    child: &MarkdownNode,
    log: &Log<&str>,
) {
    if target.r#type == DataType::Object {
        return;
    }
    if target.r#type == DataType::Undefined {
        target.r#type = DataType::Object;
        return;
    }
    let message = format!(
        "unexpected property for parent of '{}', assuming 'object' instead",
        target.r#type
    );
    log.log_warning(&message);
    let ranges = pd.source.bytes_range_set_to_characters_range_set(&child.source_map);
    report.push_warning(message, WarningKind::SignatureSyntaxWarning, ranges);
    target.r#type = DataType::Object;
}

/// `SectionProcessorBase`'s default `processDescription`: append `child`'s
/// own text as a description block, separating multiple blocks with a
/// blank line.
pub(crate) fn append_description_block(target: &mut Element, child: &MarkdownNode) {
    if !target.description.is_empty() {
        ensure_two_trailing_newlines(&mut target.description);
    }
    target.description.push_str(child.text.trim_end());
}

fn ensure_two_trailing_newlines(s: &mut String) {
    let trailing = s.chars().rev().take_while(|&c| c == '\n').count();
    for _ in trailing..2 {
        s.push('\n');
    }
}

/// Emit an `IgnoringWarning` for a Markdown block that doesn't fit the
/// section it was found in — used by the `Elements`/`Properties`
/// processors, whose `isDescriptionNode` is always `false` (spec.md §4.7).
pub(crate) fn push_ignoring_warning(report: &mut Report, pd: &SectionParserData, node: &MarkdownNode) {
    let ranges = pd.source.bytes_range_set_to_characters_range_set(&node.source_map);
    report.push_warning(
        "ignoring unrecognized block in keyword-marked section",
        WarningKind::IgnoringWarning,
        ranges,
    );
}
