use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::kernel::error::Result as KernelResult;
use crate::kernel::service::KernelService;

/// Alert severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertSeverity {
    /// Informational message
    Info,
    /// Warning message
    Warning,
    /// Error message
    Error,
    /// Critical error message
    Critical,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Info => write!(f, "info"),
            AlertSeverity::Warning => write!(f, "warning"),
            AlertSeverity::Error => write!(f, "error"),
            AlertSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// A posted alert, identified by a stable id until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub severity: AlertSeverity,
    /// Component or module that posted the alert
    pub source: String,
    pub message: String,
}

#[derive(Debug, Default)]
struct AlertStore {
    next_id: u64,
    alerts: Vec<Alert>,
}

/// Application-wide buffer of active alerts.
///
/// Views read the buffer when rendering; modules and services post into it.
/// Dismissal is explicit via [`dismiss`](AlertCenter::dismiss) or
/// [`clear`](AlertCenter::clear).
#[derive(Debug, Default)]
pub struct AlertCenter {
    store: Mutex<AlertStore>,
}

impl AlertCenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, AlertStore> {
        // A poisoned lock still holds consistent alert data
        match self.store.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Post an alert, returning its id
    pub fn post(&self, severity: AlertSeverity, source: &str, message: &str) -> u64 {
        let mut store = self.lock();
        let id = store.next_id;
        store.next_id += 1;
        store.alerts.push(Alert {
            id,
            severity,
            source: source.to_string(),
            message: message.to_string(),
        });
        id
    }

    /// Post an informational alert
    pub fn info(&self, source: &str, message: &str) -> u64 {
        self.post(AlertSeverity::Info, source, message)
    }

    /// Post a warning alert
    pub fn warning(&self, source: &str, message: &str) -> u64 {
        self.post(AlertSeverity::Warning, source, message)
    }

    /// Post an error alert
    pub fn error(&self, source: &str, message: &str) -> u64 {
        self.post(AlertSeverity::Error, source, message)
    }

    /// Dismiss an alert by id. Returns whether anything was removed.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut store = self.lock();
        let before = store.alerts.len();
        store.alerts.retain(|alert| alert.id != id);
        store.alerts.len() != before
    }

    /// Snapshot of the active alerts, in posting order
    pub fn active(&self) -> Vec<Alert> {
        self.lock().alerts.clone()
    }

    /// Snapshot of the active alerts at or above the given severity
    pub fn active_at_least(&self, severity: AlertSeverity) -> Vec<Alert> {
        self.lock()
            .alerts
            .iter()
            .filter(|alert| alert.severity >= severity)
            .cloned()
            .collect()
    }

    /// Drop all active alerts
    pub fn clear(&self) {
        self.lock().alerts.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().alerts.is_empty()
    }
}

/// Kernel service wrapper around the shared [`AlertCenter`].
#[derive(Debug, Default)]
pub struct DefaultAlertCenter {
    center: Arc<AlertCenter>,
}

impl DefaultAlertCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared alert center handed to modules and render scopes
    pub fn center(&self) -> Arc<AlertCenter> {
        Arc::clone(&self.center)
    }
}

#[async_trait]
impl KernelService for DefaultAlertCenter {
    fn name(&self) -> &'static str {
        "alert-center"
    }

    async fn initialize(&self) -> KernelResult<()> {
        Ok(())
    }

    async fn start(&self) -> KernelResult<()> {
        Ok(())
    }

    async fn stop(&self) -> KernelResult<()> {
        let outstanding = self.center.len();
        if outstanding > 0 {
            log::debug!("clearing {} outstanding alerts", outstanding);
        }
        self.center.clear();
        Ok(())
    }
}
