/// A single failed binding or enablement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationFailure {
    /// Role or API name.
    pub item: String,
    pub error: String,
}

/// Per-resource aggregate of operation results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationTally {
    pub succeeded: usize,
    pub failures: Vec<OperationFailure>,
}

impl OperationTally {
    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, item: impl Into<String>, error: impl Into<String>) {
        self.failures.push(OperationFailure { item: item.into(), error: error.into() });
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Tally for one resource (or project), kept in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceResult {
    pub resource_id: String,
    pub tally: OperationTally,
}

/// Results of one phase across every resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseReport {
    pub resources: Vec<ResourceResult>,
}

impl PhaseReport {
    pub fn push(&mut self, resource_id: impl Into<String>, tally: OperationTally) {
        self.resources.push(ResourceResult { resource_id: resource_id.into(), tally });
    }

    pub fn total_succeeded(&self) -> usize {
        self.resources.iter().map(|r| r.tally.succeeded).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.resources.iter().map(|r| r.tally.failed()).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.resources.iter().any(|r| !r.tally.is_clean())
    }
}
