//! Document-level formatter tests.
