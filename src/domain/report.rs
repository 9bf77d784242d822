use std::fmt;

/// Result of materializing one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterializationOutcome {
    /// Nothing existed at the path before this run.
    Created,
    /// The path already existed. Files are fully rewritten; directories are left intact.
    Overwritten,
    /// The entry could not be materialized.
    Failed(String),
}

impl MaterializationOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, MaterializationOutcome::Failed(_))
    }
}

impl fmt::Display for MaterializationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterializationOutcome::Created => write!(f, "Created"),
            MaterializationOutcome::Overwritten => write!(f, "Overwritten"),
            MaterializationOutcome::Failed(reason) => write!(f, "Failed ({})", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializationResult {
    pub path: String,
    pub is_directory: bool,
    pub outcome: MaterializationOutcome,
}

/// Aggregated per-entry results in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializationReport {
    pub results: Vec<MaterializationResult>,
}

impl MaterializationReport {
    pub fn record(&mut self, path: &str, is_directory: bool, outcome: MaterializationOutcome) {
        self.results.push(MaterializationResult { path: path.to_string(), is_directory, outcome });
    }

    pub fn failures(&self) -> impl Iterator<Item = &MaterializationResult> {
        self.results.iter().filter(|result| result.outcome.is_failure())
    }

    pub fn created(&self) -> usize {
        self.count(|outcome| matches!(outcome, MaterializationOutcome::Created))
    }

    pub fn overwritten(&self) -> usize {
        self.count(|outcome| matches!(outcome, MaterializationOutcome::Overwritten))
    }

    pub fn failed(&self) -> usize {
        self.count(MaterializationOutcome::is_failure)
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn outcome_of(&self, path: &str) -> Option<&MaterializationOutcome> {
        self.results.iter().find(|result| result.path == path).map(|result| &result.outcome)
    }

    fn count(&self, predicate: impl Fn(&MaterializationOutcome) -> bool) -> usize {
        self.results.iter().filter(|result| predicate(&result.outcome)).count()
    }
}
