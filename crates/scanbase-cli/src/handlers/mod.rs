//! Command handlers. Each handler delegates to `AppCore` or the Axum
//! adapter; no business logic lives here.

pub mod serve;
pub mod workspace;
