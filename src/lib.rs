//! A parser for MSON (Markdown Syntax for Object Notation): turns a
//! list-structured Markdown subtree into a typed, possibly recursive
//! `Element`/`Property` tree describing strings, numbers, booleans,
//! objects and arrays, each carrying a declared or inferred [`DataType`]
//! and a human-readable description.
//!
//! # Overview
//!
//! The crate is built from two tightly coupled subsystems:
//!
//! 1. The [`signature`] line parser — decodes the first line of an MSON
//!    list item into an identifier, one or more values, a parenthesized
//!    specifier list, and a trailing content segment.
//! 2. The [`processor`] section drivers — a mutually recursive descent
//!    over a Markdown list-item tree that builds [`Element`]s and
//!    [`Property`]s, recognizing the `Elements`/`Properties` keyword
//!    sections and promoting containers as nested content is found.
//!
//! Building the real Markdown AST, and everything above the level of a
//! single MSON subtree (the surrounding API Blueprint document, CLI, file
//! I/O), is out of scope — see [`markdown::MarkdownNodeLike`] for the
//! boundary this crate consumes through.
//!
//! # Example
//!
//! ```
//! use mson_core::element::DataType;
//! use mson_core::markdown::MarkdownNode;
//! use mson_core::parser_data::SectionParserData;
//! use mson_core::processor::parse_property;
//! use mson_core::report::Report;
//! use mson_core::section_type::SectionType;
//!
//! let node = MarkdownNode::list_item(
//!     "id-1: 42 (number) - Identifier of the resource",
//!     vec![0..48],
//! );
//! let mut report = Report::new();
//! let pd = SectionParserData::new("", SectionType::MSONProperty);
//! let property = parse_property(&node, &mut report, &pd);
//!
//! assert_eq!(property.name, "id-1");
//! assert_eq!(property.r#type, DataType::Number);
//! assert_eq!(property.as_string().unwrap(), "42");
//! ```
//!
//! # License
//! [mson-core](crate) is provided under the MIT OR Apache-2.0 license.

pub mod applier;
pub mod element;
pub mod error;
pub mod markdown;
pub mod parser_data;
pub mod processor;
pub mod report;
pub mod section_type;
pub mod signature;
pub mod text_util;
mod util;

pub use element::{DataType, Element, Property, Value};
pub use error::AccessUndefinedValue;
pub use processor::{parse_element, parse_elements, parse_properties, parse_property};
pub use report::{Report, Warning, WarningKind};
pub use util::Log;
