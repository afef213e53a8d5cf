//! FHIR R4 primitive data types.
//!
//! Each primitive is an [`Element`] pairing the Rust value with the element's `id` and
//! `extension`, which FHIR JSON carries in the `_name` sibling of the property.
//! Textual primitives share `std::string::String` as their value type; the remaining
//! ones use a type that enforces the lexical space on decode.

use crate::r4::Extension;
use crate::{
    Element, PreciseDecimal, PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime,
};

/// FHIR primitive type for base64-encoded content
///
/// A stream of bytes, base64 encoded (RFC 4648).
///
/// See: [base64Binary](http://hl7.org/fhir/StructureDefinition/base64Binary)
pub type Base64Binary = Element<std::string::String, Extension>;

/// FHIR primitive type for true/false values
///
/// See: [boolean](http://hl7.org/fhir/StructureDefinition/boolean)
pub type Boolean = Element<bool, Extension>;

/// FHIR primitive type for canonical URLs
///
/// A URI that refers to a resource by its canonical URL (resources with a url
/// property). The type may carry a version after a `|`.
///
/// See: [canonical](http://hl7.org/fhir/StructureDefinition/canonical)
pub type Canonical = Element<std::string::String, Extension>;

/// FHIR primitive type for coded values
///
/// A string which has at least one character and no leading or trailing whitespace and
/// where there is no whitespace other than single spaces in the contents.
///
/// See: [code](http://hl7.org/fhir/StructureDefinition/code)
pub type Code = Element<std::string::String, Extension>;

/// FHIR primitive type for dates
///
/// A date or partial date (e.g. just year or year + month) as used in human
/// communication. There is no time zone.
///
/// See: [date](http://hl7.org/fhir/StructureDefinition/date)
pub type Date = Element<PrecisionDate, Extension>;

/// FHIR primitive type for date-time values
///
/// A date, date-time or partial date (e.g. just year or year + month). If hours and
/// minutes are specified, a time zone SHALL be populated.
///
/// See: [dateTime](http://hl7.org/fhir/StructureDefinition/dateTime)
pub type DateTime = Element<PrecisionDateTime, Extension>;

/// FHIR primitive type for rational numbers
///
/// A rational number with implicit precision. The original JSON text is kept, so
/// `1.50` is written back as `1.50`.
///
/// See: [decimal](http://hl7.org/fhir/StructureDefinition/decimal)
pub type Decimal = Element<PreciseDecimal, Extension>;

/// FHIR primitive type for logical identifiers
///
/// Any combination of letters, numerals, `-` and `.`, with a length limit of 64
/// characters.
///
/// See: [id](http://hl7.org/fhir/StructureDefinition/id)
pub type Id = Element<std::string::String, Extension>;

/// FHIR primitive type for instants
///
/// An instant in time, known at least to the second, always including a time zone.
///
/// See: [instant](http://hl7.org/fhir/StructureDefinition/instant)
pub type Instant = Element<PrecisionInstant, Extension>;

/// FHIR primitive type for signed 32-bit integers
///
/// See: [integer](http://hl7.org/fhir/StructureDefinition/integer)
pub type Integer = Element<i32, Extension>;

/// FHIR primitive type for markdown content
///
/// See: [markdown](http://hl7.org/fhir/StructureDefinition/markdown)
pub type Markdown = Element<std::string::String, Extension>;

/// FHIR primitive type for OIDs
///
/// See: [oid](http://hl7.org/fhir/StructureDefinition/oid)
pub type Oid = Element<std::string::String, Extension>;

/// FHIR primitive type for positive integers
///
/// Any positive integer in the range 1..2,147,483,647. The lower bound is not enforced
/// by the codec.
///
/// See: [positiveInt](http://hl7.org/fhir/StructureDefinition/positiveInt)
pub type PositiveInt = Element<u32, Extension>;

/// FHIR primitive type for strings
///
/// A sequence of Unicode characters.
///
/// See: [string](http://hl7.org/fhir/StructureDefinition/string)
pub type String = Element<std::string::String, Extension>;

/// FHIR primitive type for times of day
///
/// See: [time](http://hl7.org/fhir/StructureDefinition/time)
pub type Time = Element<PrecisionTime, Extension>;

/// FHIR primitive type for non-negative integers
///
/// See: [unsignedInt](http://hl7.org/fhir/StructureDefinition/unsignedInt)
pub type UnsignedInt = Element<u32, Extension>;

/// FHIR primitive type for URIs
///
/// See: [uri](http://hl7.org/fhir/StructureDefinition/uri)
pub type Uri = Element<std::string::String, Extension>;

/// FHIR primitive type for URLs
///
/// See: [url](http://hl7.org/fhir/StructureDefinition/url)
pub type Url = Element<std::string::String, Extension>;

/// FHIR primitive type for UUIDs
///
/// See: [uuid](http://hl7.org/fhir/StructureDefinition/uuid)
pub type Uuid = Element<std::string::String, Extension>;

/// FHIR primitive type for limited XHTML content
///
/// The `div` of a [`Narrative`](crate::r4::Narrative).
///
/// See: [xhtml](http://hl7.org/fhir/StructureDefinition/xhtml)
pub type Xhtml = Element<std::string::String, Extension>;
