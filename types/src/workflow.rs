use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Result, err};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Running,
    Paused,
    Stopped,
}

impl WorkflowStatus {
    /// Pause a running workflow; start anything else.
    pub const fn toggled(self) -> Self {
        match self {
            WorkflowStatus::Running => WorkflowStatus::Paused,
            WorkflowStatus::Paused | WorkflowStatus::Stopped => WorkflowStatus::Running,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            WorkflowStatus::Running => "Running",
            WorkflowStatus::Paused => "Paused",
            WorkflowStatus::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: WorkflowStatus,
    pub last_run: String,
    pub next_run: String,
    pub success_rate: f64,
    pub execution_time: String,
}

impl Workflow {
    /// Apply a status the remote API has accepted.
    pub fn apply_status(&mut self, status: WorkflowStatus) {
        self.status = status;
        if status == WorkflowStatus::Running {
            self.last_run = "Just now".to_string();
        }
    }
}

/// Body for creating a workflow. New workflows start paused and never run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkflow {
    pub name: String,
    pub description: String,
    pub status: WorkflowStatus,
    pub last_run: String,
    pub next_run: String,
    pub success_rate: f64,
    pub execution_time: String,
}

impl NewWorkflow {
    pub fn new(name: &str, description: &str) -> Result<Self> {
        if name.trim().is_empty() || description.trim().is_empty() {
            return Err(err!("Please fill in all fields."));
        }

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            status: WorkflowStatus::Paused,
            last_run: "Never".to_string(),
            next_run: "Manual trigger".to_string(),
            success_rate: 0.0,
            execution_time: "0s".to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPatch {
    pub status: WorkflowStatus,
}
