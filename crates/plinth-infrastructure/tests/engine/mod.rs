//! Engine Tests
//!
//! End-to-end bootstrap scenarios over explicit plugin module lists, plus the
//! process-wide engine handle.

mod support;
