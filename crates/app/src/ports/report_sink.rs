//! Report sink port — hands a rendered report to its destination.

use std::future::Future;

use pantry_domain::error::PantryError;

/// Destination for generated inventory reports (file, share target, …).
pub trait ReportSink {
    /// Deliver `report` and return a human-readable location for it.
    fn publish(&self, report: String) -> impl Future<Output = Result<String, PantryError>> + Send;
}
