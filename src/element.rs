//! The MSON value tree: [`DataType`], [`Element`], [`Property`] and the
//! recursive [`Value`] variants. Replaces `snowcrash`'s `ValueBase` +
//! `Value<T>` downcast hierarchy (`MSON.h`) with a tagged sum type, per
//! REDESIGN FLAGS in spec.md §9.

use std::fmt::{self, Display, Formatter};

use crate::error::AccessUndefinedValue;

/// MSON data types. `Undefined` is the default for freshly constructed
/// elements; it is legal at construction but certain contexts coerce it
/// (see [`crate::applier`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    #[default]
    Undefined,
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Undefined => "undefined",
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Object => "object",
            DataType::Array => "array",
        };
        write!(f, "{}", name)
    }
}

/// The value carried by an [`Element`], tagged by one of three variants.
/// Numbers and booleans are stored as verbatim text (`StringValue`), with
/// `Element::type` distinguishing them — mirroring the original's
/// `StringValue` typedef being reused for every scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    StringValue(String),
    ArrayValue(Vec<Element>),
    ObjectValue(Vec<Property>),
}

/// One node of the MSON value tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Human-readable prose associated with the element.
    pub description: String,
    pub r#type: DataType,
    pub value: Option<Value>,
}

impl Element {
    pub fn new(r#type: DataType) -> Self {
        Self {
            description: String::new(),
            r#type,
            value: None,
        }
    }

    /// Leaf scalar element holding `text`, typed `r#type`.
    pub fn scalar(r#type: DataType, text: impl Into<String>) -> Self {
        Self {
            description: String::new(),
            r#type,
            value: Some(Value::StringValue(text.into())),
        }
    }

    /// The scalar text value, or `Err` if `value` is absent or not a
    /// `StringValue`.
    pub fn as_string(&self) -> Result<&str, AccessUndefinedValue> {
        match &self.value {
            Some(Value::StringValue(s)) => Ok(s),
            _ => Err(AccessUndefinedValue::new("string")),
        }
    }

    /// The array elements, or `Err` if `value` is absent or not an
    /// `ArrayValue`.
    pub fn as_array(&self) -> Result<&[Element], AccessUndefinedValue> {
        match &self.value {
            Some(Value::ArrayValue(elements)) => Ok(elements),
            _ => Err(AccessUndefinedValue::new("array")),
        }
    }

    /// The object properties, or `Err` if `value` is absent or not an
    /// `ObjectValue`.
    pub fn as_object(&self) -> Result<&[Property], AccessUndefinedValue> {
        match &self.value {
            Some(Value::ObjectValue(properties)) => Ok(properties),
            _ => Err(AccessUndefinedValue::new("object")),
        }
    }

    /// Mutable access to the backing array, creating an empty one first if
    /// `value` is absent — mirrors the
    /// `ElementValue<ArrayValue>::isDefined` / `set` dance in
    /// `MSONElementParser.cc`.
    pub fn array_value_mut(&mut self) -> &mut Vec<Element> {
        if !matches!(self.value, Some(Value::ArrayValue(_))) {
            self.value = Some(Value::ArrayValue(Vec::new()));
        }
        match self.value.as_mut() {
            Some(Value::ArrayValue(elements)) => elements,
            _ => unreachable!(),
        }
    }

    /// Mutable access to the backing object, creating an empty one first
    /// if `value` is absent.
    pub fn object_value_mut(&mut self) -> &mut Vec<Property> {
        if !matches!(self.value, Some(Value::ObjectValue(_))) {
            self.value = Some(Value::ObjectValue(Vec::new()));
        }
        match self.value.as_mut() {
            Some(Value::ObjectValue(properties)) => properties,
            _ => unreachable!(),
        }
    }
}

/// An [`Element`] extended with a name, requirement flag and templating
/// flag — MSON's object property.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Property {
    pub element: Element,
    /// Property name (key). Never contains surrounding `{…}` once parsed.
    pub name: String,
    pub required: bool,
    /// `true` exactly when the source identifier was wrapped in `{…}`.
    pub templated: bool,
}

impl std::ops::Deref for Property {
    type Target = Element;
    fn deref(&self) -> &Element {
        &self.element
    }
}

impl std::ops::DerefMut for Property {
    fn deref_mut(&mut self) -> &mut Element {
        &mut self.element
    }
}

impl Property {
    pub fn new(r#type: DataType) -> Self {
        Self {
            element: Element::new(r#type),
            name: String::new(),
            required: false,
            templated: false,
        }
    }
}
