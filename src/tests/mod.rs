// Test modules for upcloud-sdk crate
//
// Each source file has a corresponding test file that focuses on behavior
// verification. Logger behavior that depends on process-wide state
// (configure, stderr diagnostics, panic exit) lives in tests/logging_process_tests.rs.

pub mod error;
