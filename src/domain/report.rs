use std::io;

/// Result of trying to create one zone directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneOutcome {
    Created,
    Failed { kind: io::ErrorKind, reason: String },
}

/// Per-zone entry of a scaffold pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneReport {
    pub act: String,
    pub code: String,
    pub name: String,
    pub outcome: ZoneOutcome,
}

impl ZoneReport {
    pub fn dir_name(&self) -> String {
        format!("{} {}", self.code, self.name)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, ZoneOutcome::Failed { .. })
    }

    /// Diagnostic line printed for a failed zone.
    pub fn diagnostic(&self) -> String {
        format!("Could not create {} {}", self.code, self.name)
    }
}

/// Ordered per-zone outcomes of one scaffold pass, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    zones: Vec<ZoneReport>,
}

impl ScaffoldReport {
    pub fn push(&mut self, report: ZoneReport) {
        self.zones.push(report);
    }

    pub fn zones(&self) -> &[ZoneReport] {
        &self.zones
    }

    pub fn total(&self) -> usize {
        self.zones.len()
    }

    pub fn created(&self) -> impl Iterator<Item = &ZoneReport> {
        self.zones.iter().filter(|zone| !zone.is_failed())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ZoneReport> {
        self.zones.iter().filter(|zone| zone.is_failed())
    }

    pub fn created_count(&self) -> usize {
        self.created().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    /// True when every zone directory was created by this pass.
    pub fn is_complete(&self) -> bool {
        self.failed_count() == 0
    }

    /// One-line summary, e.g. `Created 3 of 4 zone directories (1 failed)`.
    pub fn summary(&self) -> String {
        format!(
            "Created {} of {} zone directories ({} failed)",
            self.created_count(),
            self.total(),
            self.failed_count()
        )
    }
}
