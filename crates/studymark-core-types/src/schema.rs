//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and diagnostic
//! reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Entity identifiers
pub const FIELD_DOC_PATH: &str = "doc_path";
pub const FIELD_SECTION: &str = "section";
pub const FIELD_SNIPPET_INDEX: &str = "snippet_index";
pub const FIELD_VERDICT: &str = "verdict";

// Collection sizes
pub const FIELD_DOC_COUNT: &str = "doc_count";
pub const FIELD_DIAGNOSTIC_COUNT: &str = "diagnostic_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
