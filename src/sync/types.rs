//! Document and report types shared by the two phases.

/// One generated output file: a relative filename plus the verbatim body text.
/// Names are expected to be unique within a run; a repeated name is written
/// last-write-wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDocument {
    pub name: String,
    pub body: String,
}

impl PlanDocument {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// Names actually deleted during the delete phase, in call order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RemovalReport {
    pub removed: Vec<String>,
}

impl RemovalReport {
    pub fn count(&self) -> usize {
        self.removed.len()
    }
}

/// Names written during the write phase, in call order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<String>,
}

impl WriteReport {
    pub fn count(&self) -> usize {
        self.written.len()
    }
}

/// Combined outcome of one full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub removed: RemovalReport,
    pub written: WriteReport,
}
