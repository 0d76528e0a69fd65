//! Execution status enumerations

use crate::symbol::Symbol;

symbol_enum! {
    /// Status of a workflow or pipeline execution
    pub enum ExecutionStatus: "execution-status" {
        New => "NEW",
        Starting => "STARTING",
        Running => "RUNNING",
        Success => "SUCCESS",
        Failed => "FAILED",
        Error => "ERROR",
        Aborted => "ABORTED",
        Aborting => "ABORTING",
        Queued => "QUEUED",
        Scheduled => "SCHEDULED",
        Paused => "PAUSED",
        Pausing => "PAUSING",
        Resumed => "RESUMED",
        Waiting => "WAITING",
        Discontinuing => "DISCONTINUING",
        Skipped => "SKIPPED",
        Rejected => "REJECTED",
        Expired => "EXPIRED",
        Preparing => "PREPARING",
    }
}

impl ExecutionStatus {
    const FINAL: [ExecutionStatus; 7] = [
        ExecutionStatus::Aborted,
        ExecutionStatus::Error,
        ExecutionStatus::Failed,
        ExecutionStatus::Success,
        ExecutionStatus::Rejected,
        ExecutionStatus::Expired,
        ExecutionStatus::Skipped,
    ];

    const RUNNING: [ExecutionStatus; 5] = [
        ExecutionStatus::New,
        ExecutionStatus::Starting,
        ExecutionStatus::Running,
        ExecutionStatus::Paused,
        ExecutionStatus::Waiting,
    ];

    const HALTED: [ExecutionStatus; 2] = [ExecutionStatus::Paused, ExecutionStatus::Waiting];

    const NEGATIVE: [ExecutionStatus; 6] = [
        ExecutionStatus::Aborted,
        ExecutionStatus::Discontinuing,
        ExecutionStatus::Error,
        ExecutionStatus::Expired,
        ExecutionStatus::Failed,
        ExecutionStatus::Rejected,
    ];

    /// Statuses after which an execution never changes again
    pub fn final_statuses() -> &'static [ExecutionStatus] {
        &Self::FINAL
    }

    /// Statuses of an execution that has not finished
    pub fn active_statuses() -> Vec<ExecutionStatus> {
        Self::all()
            .iter()
            .copied()
            .filter(|status| !status.is_final())
            .collect()
    }

    pub fn is_final(&self) -> bool {
        Self::FINAL.contains(self)
    }

    pub fn is_active(&self) -> bool {
        !self.is_final()
    }

    /// Statuses counted as running, including executions halted for input
    pub fn running_statuses() -> &'static [ExecutionStatus] {
        &Self::RUNNING
    }

    /// Statuses of an execution waiting on a user or an external event
    pub fn halted_statuses() -> &'static [ExecutionStatus] {
        &Self::HALTED
    }

    /// Statuses reported as an unsuccessful outcome
    pub fn negative_statuses() -> &'static [ExecutionStatus] {
        &Self::NEGATIVE
    }

    pub fn is_running(&self) -> bool {
        Self::RUNNING.contains(self)
    }

    pub fn is_halted(&self) -> bool {
        Self::HALTED.contains(self)
    }

    pub fn is_negative(&self) -> bool {
        Self::NEGATIVE.contains(self)
    }
}

symbol_enum! {
    /// Outcome of a single command unit run by a delegate
    pub enum CommandExecutionStatus: "command-execution-status" {
        Success => "SUCCESS",
        Failure => "FAILURE",
        Running => "RUNNING",
        Queued => "QUEUED",
        Skipped => "SKIPPED",
    }
}

impl CommandExecutionStatus {
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            CommandExecutionStatus::Success
                | CommandExecutionStatus::Failure
                | CommandExecutionStatus::Skipped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_and_active_partition_all_statuses() {
        let active = ExecutionStatus::active_statuses();
        assert_eq!(
            active.len() + ExecutionStatus::final_statuses().len(),
            ExecutionStatus::all().len()
        );
        for status in ExecutionStatus::all() {
            assert_ne!(active.contains(status), status.is_final());
        }
    }

    #[test]
    fn test_running_is_active() {
        assert!(ExecutionStatus::Running.is_active());
        assert!(ExecutionStatus::Paused.is_active());
        assert!(ExecutionStatus::Success.is_final());
        assert!(ExecutionStatus::Aborted.is_final());
    }

    #[test]
    fn test_running_halted_and_negative_sets() {
        let running: Vec<&str> = ExecutionStatus::running_statuses()
            .iter()
            .map(Symbol::as_str)
            .collect();
        assert_eq!(running, vec!["NEW", "STARTING", "RUNNING", "PAUSED", "WAITING"]);

        for status in ExecutionStatus::halted_statuses() {
            assert!(status.is_running());
            assert!(status.is_active());
        }
        assert!(ExecutionStatus::Waiting.is_halted());
        assert!(!ExecutionStatus::Running.is_halted());
        assert!(!ExecutionStatus::Queued.is_running());

        assert_eq!(ExecutionStatus::negative_statuses().len(), 6);
        assert!(ExecutionStatus::Discontinuing.is_negative());
        assert!(ExecutionStatus::Failed.is_negative());
        assert!(!ExecutionStatus::Success.is_negative());
        assert!(!ExecutionStatus::Skipped.is_negative());
    }

    #[test]
    fn test_execution_status_wire_symbol() {
        assert_eq!(serde_json::to_string(&ExecutionStatus::Running).unwrap(), "\"RUNNING\"");
        assert_eq!("RUNNING".parse::<ExecutionStatus>().unwrap(), ExecutionStatus::Running);
    }

    #[test]
    fn test_command_status_finished() {
        assert!(CommandExecutionStatus::Failure.is_finished());
        assert!(!CommandExecutionStatus::Queued.is_finished());
    }
}
