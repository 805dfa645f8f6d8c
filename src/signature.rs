//! The signature line parser (spec.md §4.1). Grounded in
//! `original_source/src/Signature.h`'s `scpl::Signature`, `SignatureTraits`
//! and `SignatureParser::parseSignature`/`RetrieveValues`.

use crate::text_util;

/// Which lexical fields a signature line is expected to carry, plus the
/// two configuration knobs that change how they're recognized. Passed in
/// per call rather than read off a singleton — REDESIGN FLAGS in
/// spec.md §9.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureTraits {
    pub identifier: bool,
    pub value: bool,
    pub array: bool,
    pub specifier: bool,
    pub content: bool,
    pub content_delimiter: String,
    /// Hint used only for diagnostic wording (never parsing behavior).
    pub max_specifier_count: usize,
}

impl SignatureTraits {
    /// Traits for `SectionProcessor<Element>::processSignature` (spec.md
    /// §4.5): no identifier field.
    pub fn element() -> Self {
        Self {
            identifier: false,
            value: true,
            array: true,
            specifier: true,
            content: true,
            content_delimiter: "-".to_string(),
            max_specifier_count: 1,
        }
    }

    /// Traits for `SectionProcessor<Property>::processSignature` (spec.md
    /// §4.6).
    pub fn property() -> Self {
        Self {
            identifier: true,
            ..Self::element()
        }
    }

    fn expected_schema(&self) -> String {
        let mut parts = Vec::new();
        if self.identifier {
            parts.push("<identifier>".to_string());
        }
        if self.value {
            parts.push(if self.identifier {
                ": <value>".to_string()
            } else {
                "<value>".to_string()
            });
        }
        if self.specifier {
            parts.push("(<specifiers>)".to_string());
        }
        if self.content {
            parts.push(format!("{} <content>", self.content_delimiter));
        }
        parts.join(" ")
    }
}

/// The decoded fields of a signature line, ready for
/// [`crate::applier::apply_element_signature`] /
/// [`crate::applier::apply_property_signature`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    pub identifier: String,
    pub values: Vec<String>,
    pub specifiers: Vec<String>,
    pub content: String,
    pub additional_content: String,
}

/// The comma/backtick tokenizer (spec.md's `retrieveValues`). Returns the
/// parsed values, the number of bytes of `work` consumed, and an optional
/// warning message. `include_content_delimiter` excludes the content
/// delimiter from the unescaped truncation set for the identifier field,
/// since an identifier may itself contain it (e.g. "id-1") and only ':'
/// should end it there.
fn retrieve_values(
    work: &str,
    traits: &SignatureTraits,
    include_content_delimiter: bool,
) -> (Vec<String>, usize, Option<String>) {
    if let Some(after_open) = work.strip_prefix('`') {
        let mut values = Vec::new();
        let mut rest = after_open;
        let mut consumed = 1usize;
        let mut warning = None;
        loop {
            match rest.find('`') {
                None => {
                    warning = Some(format!(
                        "Mismatched escape sequence \u{2013} missing closing '`' in '{}'",
                        work
                    ));
                    break;
                }
                Some(close) => {
                    values.push(rest[..close].to_string());
                    consumed += close + 1;
                    let after_close = &rest[close + 1..];
                    let after_run = after_close.trim_start_matches([',', ' ', '\t']);
                    consumed += after_close.len() - after_run.len();
                    rest = after_run;
                    if !traits.array || !rest.starts_with('`') {
                        break;
                    }
                    consumed += 1;
                    rest = &rest[1..];
                }
            }
        }
        (values, consumed, warning)
    } else {
        let mut delimiters: Vec<char> = ":(".chars().collect();
        if include_content_delimiter {
            delimiters.extend(traits.content_delimiter.chars());
        }
        let cut = work.find(|c| delimiters.contains(&c)).unwrap_or(work.len());
        let values = text_util::split_trimmed(&work[..cut], ',');
        (values, cut, None)
    }
}

/// Run the signature parser (spec.md §4.1, steps 1–7) over `text`,
/// returning the filled [`Signature`] and any `SignatureSyntaxWarning`
/// messages produced, in emission order.
pub fn parse(text: &str, traits: &SignatureTraits) -> (Signature, Vec<String>) {
    let mut warnings = Vec::new();
    let (first_line, additional_content) = text_util::split_first_line(text);
    let mut signature = Signature {
        additional_content: additional_content.to_string(),
        ..Signature::default()
    };
    let mut work = first_line;

    if traits.identifier {
        // The content delimiter ('-' by default) is excluded here: an
        // identifier may legitimately contain it (e.g. "id-1"), and only
        // ':' marks the end of the identifier field.
        let (values, consumed, warning) = retrieve_values(work, traits, false);
        if let Some(w) = warning {
            warnings.push(w);
        }
        work = text_util::trim_start(&work[consumed..]);
        signature.identifier = values.into_iter().next().unwrap_or_default();
        if signature.identifier.is_empty() {
            warnings.push("missing expected identifier".to_string());
        }
    }

    if traits.value {
        let should_enter = !traits.identifier || work.starts_with(':');
        if should_enter {
            if let Some(rest) = work.strip_prefix(':') {
                work = text_util::trim_start(rest);
            }
            let (values, consumed, warning) = retrieve_values(work, traits, true);
            if let Some(w) = warning {
                warnings.push(w);
            }
            work = &work[consumed..];
            if traits.identifier && values.is_empty() {
                warnings.push(
                    "missing value after ':', expected '<identifier>: <value>'".to_string(),
                );
            }
            signature.values = values;
        }
    }

    if traits.specifier {
        if let Some(rest) = work.strip_prefix('(') {
            if let Some(close) = rest.find(')') {
                signature.specifiers = text_util::split_trimmed(&rest[..close], ',');
                work = &rest[close + 1..];
            }
        }
    }

    if !traits.identifier && signature.values.is_empty() && signature.specifiers.is_empty() {
        warnings.push("missing element value or trait(s), expected '<value> (<traits>)'".to_string());
    }

    work = text_util::trim_start(work);
    if traits.content {
        if let Some(rest) = work.strip_prefix(traits.content_delimiter.as_str()) {
            signature.content = text_util::trim_start(rest).to_string();
            work = "";
        }
    }

    let leftover = text_util::trim(work);
    if !leftover.is_empty() {
        warnings.push(format!(
            "ignoring '{}', expected '{}'",
            leftover,
            traits.expected_schema()
        ));
    }

    (signature, warnings)
}

#[cfg(test)]
mod __tests__ {
    use super::*;

    #[test]
    fn identifier_value_specifier_content_all_decode() {
        let (s, warnings) = parse("id: 42 (yes, no) - a good message", &SignatureTraits::property());
        assert!(warnings.is_empty());
        assert_eq!(s.identifier, "id");
        assert_eq!(s.values, vec!["42"]);
        assert_eq!(s.specifiers, vec!["yes", "no"]);
        assert_eq!(s.content, "a good message");
    }

    #[test]
    fn escaped_identifier_and_value_round_trip() {
        let (s, _warnings) = parse(
            "`*id*(data):3`: `42` (yes, no) - a good message",
            &SignatureTraits::property(),
        );
        assert_eq!(s.identifier, "*id*(data):3");
        assert_eq!(s.values, vec!["42"]);
        assert_eq!(s.specifiers, vec!["yes", "no"]);
        assert_eq!(s.content, "a good message");
    }

    #[test]
    fn multiline_signature_preserves_additional_content() {
        let (s, _) = parse("id\nLine 2\nLine 3\n", &SignatureTraits::property());
        assert_eq!(s.identifier, "id");
        assert_eq!(s.additional_content, "Line 2\nLine 3\n");
    }

    #[test]
    fn backtick_values_tokenize_with_array_trait() {
        let (s, warnings) = parse("`home`, `green` (array)", &SignatureTraits::element());
        assert!(warnings.is_empty());
        assert_eq!(s.values, vec!["home", "green"]);
        assert_eq!(s.specifiers, vec!["array"]);
    }

    #[test]
    fn unclosed_backtick_warns_and_keeps_parsing() {
        let (_s, warnings) = parse("`unterminated (array)", &SignatureTraits::element());
        assert!(warnings[0].starts_with("Mismatched escape sequence"));
        // No values or specifiers were recovered, so the missing-element
        // check also fires.
        assert!(warnings.iter().any(|w| w.starts_with("missing element value")));
    }

    #[test]
    fn missing_identifier_warns_but_keeps_specifiers() {
        let (s, warnings) = parse("(x)", &SignatureTraits::property());
        assert_eq!(s.specifiers, vec!["x"]);
        assert!(warnings.iter().any(|w| w == "missing expected identifier"));
    }

    #[test]
    fn value_only_traits_do_not_require_colon() {
        let (s, warnings) = parse("home, green (array: string)", &SignatureTraits::element());
        assert!(warnings.is_empty());
        assert_eq!(s.values, vec!["home", "green"]);
        assert_eq!(s.specifiers, vec!["array: string"]);
    }

    #[test]
    fn trailing_garbage_is_reported_once() {
        let (_s, warnings) = parse("id: 1 (number) trailing junk", &SignatureTraits::property());
        assert!(warnings.iter().any(|w| w.starts_with("ignoring 'trailing junk'")));
    }
}
