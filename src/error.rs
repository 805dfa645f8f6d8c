use std::fmt::{Display, Formatter};

/// Programmer error raised when the typed value of an [`crate::Element`] is
/// accessed through an accessor whose variant does not match `value`, or
/// when `value` is absent entirely.
///
/// Every other failure mode the core can hit is represented as a
/// [`crate::report::Warning`] accumulated into a
/// [`crate::report::Report`] — parsing itself never raises. This is
/// expected to be unreachable under correct use of the AST produced by
/// `parse_element`/`parse_property`/`parse_elements`/`parse_properties`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessUndefinedValue {
    what: &'static str,
}

impl AccessUndefinedValue {
    pub fn new(what: &'static str) -> Self {
        Self { what }
    }
}

impl Display for AccessUndefinedValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "accessing undefined element value as {}", self.what)
    }
}

impl std::error::Error for AccessUndefinedValue {}
