//! The FHIR R4 object model.
//!
//! Every type here is written in the shape the model generator emits: plain structs
//! with public fields, `[x]` elements as closed enums, and the JSON codec derived with
//! `#[derive(FhirSerde)]`. All types are re-exported at this level, so
//! `atrius_fhir_r4::r4::Observation` and `atrius_fhir_r4::r4::String` both work.

pub mod complex_types;
pub mod primitives;
mod registry;
mod resource;
pub mod resources;

pub use complex_types::*;
pub use primitives::*;
pub use registry::{ResourceDecoder, ResourceRegistry, UnknownResourcePolicy};
pub use resource::{OpaqueResource, Resource};
pub use resources::*;
