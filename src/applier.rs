//! `ElementSignatureApplier` / `PropertySignatureApplier` (spec.md
//! §4.2/§4.3). Grounded in
//! `original_source/src/MSONElementParser.h::dataTypeFromString` and
//! `MSONPropertyParser.h::PropertySignature::setSignature`.

use crate::element::{DataType, Element, Property, Value};
use crate::report::{CharacterRange, Report, WarningKind};
use crate::signature::Signature;
use crate::text_util;

fn primitive_data_type(s: &str) -> Option<DataType> {
    match s {
        "string" => Some(DataType::String),
        "number" => Some(DataType::Number),
        "object" => Some(DataType::Object),
        "array" => Some(DataType::Array),
        "bool" | "boolean" => Some(DataType::Boolean),
        _ => None,
    }
}

/// Resolve a specifier to `(type, inferred element type)`. Handles exactly
/// one level of `array: T` nesting — supplemental detail in SPEC_FULL.md
/// §4.2: `array: array: string` resolves its inner hint to `Undefined`
/// rather than drilling further, since the inner lookup goes through
/// [`primitive_data_type`] and not back through this function.
fn data_type_from_spec(s: &str) -> Option<(DataType, Option<DataType>)> {
    if let Some(t) = primitive_data_type(s) {
        return Some((t, None));
    }
    let (left, right) = text_util::split_on_first(s, ':');
    if text_util::trim(left) != "array" {
        return None;
    }
    match right {
        Some(rest) => {
            let inferred = primitive_data_type(text_util::trim(rest)).unwrap_or(DataType::Undefined);
            Some((DataType::Array, Some(inferred)))
        }
        None => Some((DataType::Array, None)),
    }
}

/// Apply a parsed [`Signature`] to `element`, per spec.md §4.2's three
/// steps: specifier→type inference, value application, description
/// application.
pub fn apply_element_signature(
    signature: &Signature,
    element: &mut Element,
    report: &mut Report,
    ranges: &[CharacterRange],
) {
    let mut inferred_element_type: Option<DataType> = None;
    let mut type_specifier_count = 0usize;

    for specifier in &signature.specifiers {
        match data_type_from_spec(specifier) {
            Some((resolved, inferred)) => {
                type_specifier_count += 1;
                element.r#type = resolved;
                if inferred.is_some() {
                    inferred_element_type = inferred;
                }
            }
            None => report.push_warning(
                format!("unexpected specifier '{}'", specifier),
                WarningKind::SignatureSyntaxWarning,
                ranges.to_vec(),
            ),
        }
    }
    if type_specifier_count > 1 {
        report.push_warning(
            "too many type specifiers, expected 'string', 'number', 'object', 'array' or 'bool'",
            WarningKind::SignatureSyntaxWarning,
            ranges.to_vec(),
        );
    }

    if signature.values.len() > 1 && element.r#type != DataType::Array {
        if element.r#type == DataType::Undefined {
            element.r#type = DataType::Array;
        } else {
            report.push_warning(
                "mismatched type specifier, assuming 'array'",
                WarningKind::SignatureSyntaxWarning,
                ranges.to_vec(),
            );
            element.r#type = DataType::Array;
        }
    }

    match element.r#type {
        DataType::Array => {
            if !signature.values.is_empty() {
                let child_type = inferred_element_type.unwrap_or(DataType::Undefined);
                let children = signature
                    .values
                    .iter()
                    .map(|v| Element::scalar(child_type, v.clone()))
                    .collect();
                element.value = Some(Value::ArrayValue(children));
            } else if let Some(child_type) = inferred_element_type {
                element.value = Some(Value::ArrayValue(vec![Element::new(child_type)]));
            }
        }
        DataType::Object => {
            if !signature.values.is_empty() {
                report.push_warning(
                    "value for 'object' type element is not supported, ignoring",
                    WarningKind::SignatureSyntaxWarning,
                    ranges.to_vec(),
                );
            }
        }
        _ => {
            if let Some(first) = signature.values.first() {
                element.value = Some(Value::StringValue(first.clone()));
            }
        }
    }

    if !signature.content.is_empty() {
        element.description = signature.content.clone();
    }
    if !signature.additional_content.is_empty() {
        if !element.description.is_empty() {
            element.description.push('\n');
        }
        element.description.push_str(&signature.additional_content);
        element.description.push('\n');
    }
}

/// Apply a parsed [`Signature`] to `property`: extract name/templating and
/// requirement specifiers, then delegate the remainder to
/// [`apply_element_signature`] — spec.md §4.3.
pub fn apply_property_signature(
    signature: &Signature,
    property: &mut Property,
    report: &mut Report,
    ranges: &[CharacterRange],
) {
    let mut name = signature.identifier.clone();
    if name.len() >= 2 && name.starts_with('{') && name.ends_with('}') {
        name = name[1..name.len() - 1].to_string();
        property.templated = true;
    }
    property.name = name;

    let mut requirement_count = 0usize;
    let mut remaining_specifiers = Vec::with_capacity(signature.specifiers.len());
    for specifier in &signature.specifiers {
        match specifier.as_str() {
            "optional" => {
                property.required = false;
                requirement_count += 1;
            }
            "required" => {
                property.required = true;
                requirement_count += 1;
            }
            _ => remaining_specifiers.push(specifier.clone()),
        }
    }
    if requirement_count > 1 {
        report.push_warning(
            "too many requirement specifiers, expected 'optional' or 'required'",
            WarningKind::SignatureSyntaxWarning,
            ranges.to_vec(),
        );
    }

    let remainder = Signature {
        specifiers: remaining_specifiers,
        ..signature.clone()
    };
    apply_element_signature(&remainder, &mut property.element, report, ranges);
}

#[cfg(test)]
mod __tests__ {
    use super::*;
    use crate::signature::SignatureTraits;

    fn apply(text: &str, traits: &SignatureTraits) -> (Element, Report) {
        let (sig, _warnings) = crate::signature::parse(text, traits);
        let mut element = Element::default();
        let mut report = Report::new();
        apply_element_signature(&sig, &mut element, &mut report, &[]);
        (element, report)
    }

    #[test]
    fn scalar_string_with_description() {
        let (e, report) = apply(
            "`Hello World` (string) - A message for the world out there",
            &SignatureTraits::element(),
        );
        assert_eq!(e.r#type, DataType::String);
        assert_eq!(e.as_string().unwrap(), "Hello World");
        assert_eq!(e.description, "A message for the world out there");
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn array_of_untyped_backtick_values() {
        let (e, _) = apply("`home`, `green` (array)", &SignatureTraits::element());
        assert_eq!(e.r#type, DataType::Array);
        let items = e.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].r#type, DataType::Undefined);
        assert_eq!(items[0].as_string().unwrap(), "home");
    }

    #[test]
    fn abbreviated_array_of_type_with_no_values() {
        let (e, _) = apply("(array: number)", &SignatureTraits::element());
        assert_eq!(e.r#type, DataType::Array);
        let items = e.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].r#type, DataType::Number);
        assert!(items[0].value.is_none());
    }

    #[test]
    fn array_of_typed_values() {
        let (e, _) = apply("home, green (array: string)", &SignatureTraits::element());
        let items = e.as_array().unwrap();
        assert_eq!(items[0].r#type, DataType::String);
        assert_eq!(items[0].as_string().unwrap(), "home");
        assert_eq!(items[1].as_string().unwrap(), "green");
    }

    #[test]
    fn nested_array_type_hint_caps_at_one_level() {
        let (e, _) = apply("(array: array: string)", &SignatureTraits::element());
        assert_eq!(e.r#type, DataType::Array);
        let items = e.as_array().unwrap();
        assert_eq!(items[0].r#type, DataType::Undefined);
    }

    #[test]
    fn object_type_with_inline_value_warns_and_ignores() {
        let (e, report) = apply("home (object)", &SignatureTraits::element());
        assert_eq!(e.r#type, DataType::Object);
        assert!(e.value.is_none());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.message.contains("not supported")));
    }

    #[test]
    fn property_signature_extracts_name_and_requirement() {
        let (sig, _) = crate::signature::parse(
            "id-1: 42 (number) - Identifier of the resource",
            &SignatureTraits::property(),
        );
        let mut property = Property::default();
        let mut report = Report::new();
        apply_property_signature(&sig, &mut property, &mut report, &[]);
        assert_eq!(property.name, "id-1");
        assert!(!property.templated);
        assert_eq!(property.r#type, DataType::Number);
        assert_eq!(property.as_string().unwrap(), "42");
        assert_eq!(property.description, "Identifier of the resource");
    }

    #[test]
    fn templated_property_name_strips_braces() {
        let (sig, _) = crate::signature::parse("{address}", &SignatureTraits::property());
        let mut property = Property::default();
        let mut report = Report::new();
        apply_property_signature(&sig, &mut property, &mut report, &[]);
        assert_eq!(property.name, "address");
        assert!(property.templated);
    }

    #[test]
    fn multiple_values_without_array_type_promotes_silently() {
        let (sig, _) = crate::signature::parse(
            "tags: home, green (required)",
            &SignatureTraits::property(),
        );
        let mut property = Property::default();
        let mut report = Report::new();
        apply_property_signature(&sig, &mut property, &mut report, &[]);
        assert_eq!(property.name, "tags");
        assert!(property.required);
        assert_eq!(property.r#type, DataType::Array);
        assert_eq!(property.as_array().unwrap().len(), 2);
        assert!(report.warnings.is_empty());
    }
}
