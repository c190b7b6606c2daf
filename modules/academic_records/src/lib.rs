// === PUBLIC CONTRACT ===
pub mod contract;

pub use contract::{error, model};

// === MODULE DEFINITION ===
// Context object wiring storage gateways into the domain services
pub mod module;
pub use module::AcademicRecords;

// === DEMO DATA ===
pub mod seed;

// === INTERNAL MODULES ===
// Exposed for the binary and for integration tests; prefer `contract` and `AcademicRecords`.
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
