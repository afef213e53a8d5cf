//! FHIR R4 resources.

pub mod basic;
pub mod binary;
pub mod bundle;
pub mod condition;
pub mod device;
pub mod observation;
pub mod organization;
pub mod parameters;
pub mod patient;
pub mod procedure;
pub mod specimen;

pub use basic::*;
pub use binary::*;
pub use bundle::*;
pub use condition::*;
pub use device::*;
pub use observation::*;
pub use organization::*;
pub use parameters::*;
pub use patient::*;
pub use procedure::*;
pub use specimen::*;
