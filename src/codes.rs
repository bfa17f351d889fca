//! UpCloud API error vocabulary.
//!
//! Legacy responses carry one of the symbolic `error_code` values below.
//! Problem responses carry a type URI whose fragment is one of the
//! `ERROR_*` problem types.

// Legacy error codes

pub const AUTHENTICATION_FAILED: &str = "AUTHENTICATION_FAILED";
pub const SERVER_NOT_FOUND: &str = "SERVER_NOT_FOUND";
pub const ROUTER_NOT_FOUND: &str = "ROUTER_NOT_FOUND";

pub const FIREWALL_RULE_EXISTS: &str = "FIREWALL_RULE_EXISTS";
pub const DB_EXISTS: &str = "DB_EXISTS";
pub const SERVICE_EXISTS: &str = "SERVICE_EXISTS";
pub const INTERFACE_EXISTS: &str = "INTERFACE_EXISTS";
pub const TAG_EXISTS: &str = "TAG_EXISTS";

/// Legacy codes that signal a duplicate-resource conflict (sent with 409).
pub const ALREADY_EXISTS_CODES: &[&str] = &[
    FIREWALL_RULE_EXISTS,
    DB_EXISTS,
    SERVICE_EXISTS,
    INTERFACE_EXISTS,
    TAG_EXISTS,
];

// Problem type fragments

pub const ERROR_RESOURCE_ALREADY_EXISTS: &str = "ERROR_RESOURCE_ALREADY_EXISTS";
pub const ERROR_RESOURCE_NOT_FOUND: &str = "ERROR_RESOURCE_NOT_FOUND";
pub const ERROR_AUTHENTICATION_FAILED: &str = "ERROR_AUTHENTICATION_FAILED";

/// Problem type fragments that signal a duplicate resource (sent with 400).
pub const ALREADY_EXISTS_PROBLEM_TYPES: &[&str] = &[ERROR_RESOURCE_ALREADY_EXISTS];
