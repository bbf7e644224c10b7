//! Catalog domain - components, analysis results and the pure rules over them
pub mod domain;
pub mod policies;
pub mod services;
