//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log pipeline
//! stages. Every event carries the component, operation name, and event
//! kind fields from the studymark-core-types schema.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use studymark_core::log_op_start;
/// log_op_start!("load_corpus");
/// log_op_start!("load_corpus", doc_path = "closures.md");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = studymark_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = studymark_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use studymark_core::log_op_end;
/// log_op_end!("load_corpus", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = studymark_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = studymark_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```ignore
/// # use studymark_core::{log_op_error, errors::StudymarkError};
/// let err = StudymarkError::CorpusRootNotFound { path: "docs/".into() };
/// log_op_error!("load_corpus", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = studymark_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err = %$err,
        );
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = studymark_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err = %$err,
            $($field)*
        );
    };
}
