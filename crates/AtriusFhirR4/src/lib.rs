//! # Atrius FHIR R4
//!
//! The FHIR R4 object model and its JSON codec.
//!
//! Every resource and data type is a plain Rust struct deriving [`FhirSerde`], which
//! generates the FHIR-specific JSON handling:
//!
//! - **Primitive extensions**: a primitive field `name` is an [`Element`] holding its
//!   value, element id and extensions together; on the wire the metadata moves to a
//!   `_name` sibling, with positionally aligned arrays for repeated primitives
//! - **Choice types**: a `value[x]` element is a closed enum, written as one of
//!   `valueQuantity`, `valueString`, ...; two populated siblings are a decode error
//! - **Resource envelope**: the [`r4::Resource`] enum dispatches on `resourceType`
//!   through a [`r4::ResourceRegistry`], for contained resources, bundle entries and
//!   any standalone document
//!
//! ```rust
//! use atrius_fhir_r4::json;
//! use atrius_fhir_r4::r4::{Observation, ObservationEffective};
//!
//! let observation: Observation = json::from_str(r#"{
//!     "resourceType": "Observation",
//!     "status": "final",
//!     "code": {"text": "Heart rate"},
//!     "effectiveDateTime": "2020-01-01",
//!     "_effectiveDateTime": {"id": "a1"}
//! }"#)?;
//!
//! let Some(ObservationEffective::DateTime(effective)) = &observation.effective else {
//!     panic!("expected a dateTime");
//! };
//! assert_eq!(effective.id.as_deref(), Some("a1"));
//! # Ok::<(), atrius_fhir_r4::FhirError>(())
//! ```

extern crate self as atrius_fhir_r4;

pub mod codec;
pub mod date_time;
mod element;
pub mod error;
pub mod json;
mod precise_decimal;
pub mod r4;

pub use atrius_fhir_macros::FhirSerde;
pub use codec::{FhirChoice, FhirJson, FhirResource, JsonObject};
pub use date_time::{
    DatePrecision, DateTimePrecision, PrecisionDate, PrecisionDateTime, PrecisionInstant,
    PrecisionTime, TimePrecision,
};
pub use element::Element;
pub use error::FhirError;
pub use precise_decimal::PreciseDecimal;

/// Paths used by `#[derive(FhirSerde)]` expansions. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
