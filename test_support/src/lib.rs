//! Shared fixtures for the integration tests.
//!
//! The fixture is a small ICU-shaped data set covering every bundle the
//! crate reads. It can be loaded into memory or written to a temporary data
//! directory for the binary.

pub mod fixture;

pub use fixture::{
    FIXTURE_LOCALES, data_dir, fixture_data, fixture_documents, fixture_store, write_data_dir,
};
