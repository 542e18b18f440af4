//! Legacy summary API retained for existing callers.
//!
//! [`describe`] predates the structured [`crate::operations::ArrayStatistics`]
//! result and is kept callable so old code keeps working. Every call records
//! a [`DeprecationNotice`] into a process-wide registry and logs a warning;
//! the legacy text output itself is unchanged. The function is deliberately
//! absent from the crate-root re-export list.

use std::sync::Mutex;

use ndarray::Array1;

/// A recorded deprecation event, naming the replacement to migrate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    pub function: &'static str,
    pub replacement: &'static str,
    pub since: &'static str,
}

static NOTICES: Mutex<Vec<DeprecationNotice>> = Mutex::new(Vec::new());

fn record(function: &'static str, replacement: &'static str, since: &'static str) {
    log::warn!(
        "[Numbox::Compat] {} is deprecated since {}; use {} instead",
        function,
        since,
        replacement
    );
    NOTICES.lock().unwrap().push(DeprecationNotice {
        function,
        replacement,
        since,
    });
}

/// Drain every deprecation notice recorded so far.
pub fn take_notices() -> Vec<DeprecationNotice> {
    std::mem::take(&mut *NOTICES.lock().unwrap())
}

/// Produce a one-line text summary of an array.
///
/// Records one deprecation notice per call and then performs the legacy
/// behavior; it never redirects to `array_statistics`. An empty array yields
/// `"n=0"`, matching the historical output.
#[deprecated(since = "0.1.0", note = "use `array_statistics` for structured results")]
pub fn describe(values: &Array1<f64>) -> String {
    record("describe", "array_statistics", "0.1.0");
    if values.is_empty() {
        return "n=0".to_string();
    }
    let n = values.len();
    let mean = values.sum() / n as f64;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
    format!("n={} mean={:.4} std_dev={:.4}", n, mean, var.sqrt())
}
