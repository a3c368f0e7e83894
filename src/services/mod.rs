//! Supporting services

pub mod tracing_setup;
