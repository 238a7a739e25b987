//! Unit tests for the message module.
//!
//! Tests are organised by component, covering happy paths, error cases,
//! and boundary lengths for every builder, plus the client and use case.

mod template_builder_tests;
