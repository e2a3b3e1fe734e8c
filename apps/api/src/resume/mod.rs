// Record-level operations: advisory scoring, required-field hints, and the HTTP
// handlers that read and replace the current record.

pub mod completeness;
pub mod handlers;
pub mod validation;
