use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

use crate::codec::FhirJson;
use crate::error::FhirError;

/// High-precision decimal type that preserves original string representation.
///
/// FHIR requires that decimal values maintain their original precision and format
/// when serialized back to JSON. This type stores both the parsed `Decimal` value
/// for mathematical operations and the original string for serialization.
///
/// # FHIR Precision Requirements
///
/// FHIR decimal values must:
/// - Preserve trailing zeros (e.g., "12.340" vs "12.34")
/// - Maintain original precision during round-trip serialization
/// - Support high-precision arithmetic without floating-point errors
/// - Handle edge cases like very large or very small numbers
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_r4::PreciseDecimal;
/// use rust_decimal::Decimal;
///
/// // Create from Decimal (derives string representation)
/// let precise = PreciseDecimal::from(Decimal::new(12340, 3)); // 12.340
/// assert_eq!(precise.original_string(), "12.340");
///
/// // Create with specific string format
/// let precise = PreciseDecimal::from_parts(
///     Some(Decimal::new(1000, 2)),
///     "10.00".to_string()
/// );
/// assert_eq!(precise.original_string(), "10.00");
/// ```
#[derive(Debug, Clone)]
pub struct PreciseDecimal {
    /// The parsed decimal value, `None` if parsing failed (e.g., out of range)
    value: Option<Decimal>,
    /// The original string representation preserving format and precision
    original_string: Arc<str>,
}

/// Implements equality comparison based on the parsed decimal value.
///
/// Two `PreciseDecimal` values are equal if their parsed `Decimal` values are equal,
/// regardless of their original string representations. Values that could not be
/// parsed compare by their text.
///
/// ```rust
/// use atrius_fhir_r4::PreciseDecimal;
/// use rust_decimal::Decimal;
///
/// let a = PreciseDecimal::from_parts(Some(Decimal::new(100, 1)), "10.0".to_string());
/// let b = PreciseDecimal::from_parts(Some(Decimal::new(1000, 2)), "10.00".to_string());
/// assert_eq!(a, b); // Same decimal value (10.0 == 10.00)
/// ```
impl PartialEq for PreciseDecimal {
    fn eq(&self, other: &Self) -> bool {
        match (self.value, other.value) {
            (None, None) => self.original_string == other.original_string,
            (a, b) => a == b,
        }
    }
}

impl Eq for PreciseDecimal {}

/// Ordering is based on the mathematical value. `None` values (unparseable decimals)
/// are considered less than any valid decimal value.
impl PartialOrd for PreciseDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreciseDecimal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| match (self.value, other.value) {
                (None, None) => self.original_string.cmp(&other.original_string),
                _ => std::cmp::Ordering::Equal,
            })
    }
}

// === PreciseDecimal Methods ===

impl PreciseDecimal {
    /// Creates a new `PreciseDecimal` from its constituent parts.
    ///
    /// Use this when you need to preserve a specific string format or when parsing
    /// has already been attempted.
    pub fn from_parts(value: Option<Decimal>, original_string: String) -> Self {
        Self {
            value,
            original_string: Arc::from(original_string.as_str()),
        }
    }

    /// Parses decimal text, keeping the text as written.
    ///
    /// Text that is a valid JSON number but out of `Decimal`'s range (such as `1e400`)
    /// is kept with no parsed value. Anything else fails with `InvalidValue`.
    ///
    /// ```rust
    /// use atrius_fhir_r4::PreciseDecimal;
    ///
    /// let d = PreciseDecimal::parse("1.50").unwrap();
    /// assert_eq!(d.original_string(), "1.50");
    /// assert!(PreciseDecimal::parse("one").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, FhirError> {
        if Number::from_str(text).is_err() {
            return Err(FhirError::invalid_value("decimal", text));
        }
        Ok(Self::from_parts(Self::parse_decimal_string(text), text.to_string()))
    }

    /// Helper method to parse a decimal string with support for scientific notation.
    ///
    /// 'E' is normalized to 'e' for parsing while the original string representation
    /// is preserved for serialization.
    fn parse_decimal_string(s: &str) -> Option<Decimal> {
        let normalized = s.replace('E', "e");

        if normalized.contains('e') {
            Decimal::from_scientific(&normalized).ok()
        } else {
            normalized.parse::<Decimal>().ok()
        }
    }

    /// Returns the parsed decimal value if parsing was successful.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Returns the original string representation.
    ///
    /// This string is used during serialization to maintain FHIR's precision
    /// requirements.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }
}

/// Converts a `Decimal` to `PreciseDecimal` with derived string representation.
///
/// ```rust
/// use atrius_fhir_r4::PreciseDecimal;
/// use rust_decimal::Decimal;
///
/// let decimal = Decimal::new(12345, 3); // 12.345
/// let precise: PreciseDecimal = decimal.into();
/// assert_eq!(precise.value(), Some(decimal));
/// assert_eq!(precise.original_string(), "12.345");
/// ```
impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        let original_string = Arc::from(value.to_string());
        Self {
            value: Some(value),
            original_string,
        }
    }
}

impl FromStr for PreciseDecimal {
    type Err = FhirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// FHIR decimals are JSON numbers; the number's text is kept exactly as written.
///
/// Relies on `serde_json`'s `arbitrary_precision` feature, without which `1.50` would
/// already have become the float `1.5` before reaching this code.
impl FhirJson for PreciseDecimal {
    fn from_json(value: Value) -> Result<Self, FhirError> {
        match value {
            Value::Number(number) => {
                let original_string = number.to_string();
                let parsed_value = Self::parse_decimal_string(&original_string);
                Ok(PreciseDecimal::from_parts(parsed_value, original_string))
            }
            other => Err(FhirError::invalid_type("number", &other)),
        }
    }

    fn to_json(&self) -> Result<Value, FhirError> {
        Number::from_str(&self.original_string)
            .map(Value::Number)
            .map_err(|_| FhirError::invalid_value("decimal", self.original_string.as_ref()))
    }
}

/// Implements serialization for `PreciseDecimal` preserving original format.
///
/// ```rust
/// use atrius_fhir_r4::PreciseDecimal;
/// use rust_decimal::Decimal;
///
/// let precise = PreciseDecimal::from_parts(
///     Some(Decimal::new(1230, 2)),
///     "12.30".to_string()
/// );
///
/// let json = serde_json::to_string(&precise).unwrap();
/// assert_eq!(json, "12.30"); // Preserves trailing zero
/// ```
impl Serialize for PreciseDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PreciseDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json_value = Value::deserialize(deserializer)?;
        PreciseDecimal::from_json(json_value).map_err(serde::de::Error::custom)
    }
}
