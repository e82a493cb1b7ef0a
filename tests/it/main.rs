//! Single test binary entry point.
//!
//! All integration tests are compiled into one binary to keep link times down.
//!
//! Structure:
//! - helpers: Builders, fake collaborators and assertions
//! - integration: Multi-component workflow tests
//! - unit: Single-component unit tests
