//! Registry-level behaviour tests
