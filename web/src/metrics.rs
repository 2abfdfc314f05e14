//! Prometheus metrics for list mutations.
//!
//! Every accepted command bumps a counter named after its event; every
//! rejected one bumps `listkeeper_commands_rejected_total` labelled by error
//! kind. Without an installed recorder the counters are no-ops.

use listkeeper_core::{ListError, ListsEvent};
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use thiserror::Error;

/// Counter for rejected commands
pub const COMMANDS_REJECTED: &str = "listkeeper_commands_rejected_total";

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Installs the global Prometheus recorder.
///
/// # Errors
///
/// Returns an error if a recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle, MetricsError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::Install(e.to_string()))?;
    register_metrics();
    Ok(handle)
}

/// Counter name for an accepted command.
#[must_use]
pub const fn event_counter(event: &ListsEvent) -> &'static str {
    match event {
        ListsEvent::ListCreated { .. } => "listkeeper_lists_created_total",
        ListsEvent::ListRenamed { .. } => "listkeeper_lists_renamed_total",
        ListsEvent::ListDeleted { .. } => "listkeeper_lists_deleted_total",
        ListsEvent::TodoAdded { .. } => "listkeeper_todos_added_total",
        ListsEvent::TodoDeleted { .. } => "listkeeper_todos_deleted_total",
        ListsEvent::TodoCompletionSet { .. } => "listkeeper_todos_checked_total",
        ListsEvent::AllTodosCompleted { .. } => "listkeeper_lists_completed_total",
    }
}

/// Counts an accepted command.
pub fn record_event(event: &ListsEvent) {
    counter!(event_counter(event)).increment(1);
}

/// Counts a rejected command.
pub fn record_rejection(error: &ListError) {
    counter!(COMMANDS_REJECTED, "kind" => error.kind().as_str()).increment(1);
}

fn register_metrics() {
    describe_counter!("listkeeper_lists_created_total", "Total number of lists created");
    describe_counter!("listkeeper_lists_renamed_total", "Total number of lists renamed");
    describe_counter!("listkeeper_lists_deleted_total", "Total number of lists deleted");
    describe_counter!("listkeeper_todos_added_total", "Total number of todos added");
    describe_counter!("listkeeper_todos_deleted_total", "Total number of todos deleted");
    describe_counter!(
        "listkeeper_todos_checked_total",
        "Total number of todos checked or unchecked"
    );
    describe_counter!("listkeeper_lists_completed_total", "Total number of complete-all commands");
    describe_counter!(COMMANDS_REJECTED, "Total number of commands rejected, by error kind");
}
