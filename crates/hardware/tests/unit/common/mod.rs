//! Tests for shared support types.
