//! The five-step guided flow that assembles a portfolio one validated
//! commit at a time.
//!
//! The cursor is a plain serializable value persisted through the store, so
//! a half-finished flow survives client restarts and server redeploys. Data
//! itself never lives here: every "next" writes the step's form through the
//! same merge path as a direct PATCH, so the record can never drift from
//! what the wizard showed.

pub mod forms;
pub mod handlers;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The five steps in flow order. Positions are 1-indexed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Theme,
    Details,
    Experience,
    Projects,
    Preview,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Theme
    }
}

impl WizardStep {
    pub const COUNT: u8 = 5;

    pub const ALL: [WizardStep; 5] = [
        WizardStep::Theme,
        WizardStep::Details,
        WizardStep::Experience,
        WizardStep::Projects,
        WizardStep::Preview,
    ];

    /// 1-based position, matching the wire representation.
    pub fn index(&self) -> u8 {
        match self {
            WizardStep::Theme => 1,
            WizardStep::Details => 2,
            WizardStep::Experience => 3,
            WizardStep::Projects => 4,
            WizardStep::Preview => 5,
        }
    }

    pub fn from_index(index: u8) -> Option<WizardStep> {
        match index {
            1 => Some(WizardStep::Theme),
            2 => Some(WizardStep::Details),
            3 => Some(WizardStep::Experience),
            4 => Some(WizardStep::Projects),
            5 => Some(WizardStep::Preview),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            WizardStep::Theme => "theme",
            WizardStep::Details => "details",
            WizardStep::Experience => "experience",
            WizardStep::Projects => "projects",
            WizardStep::Preview => "preview",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Theme => "Theme",
            WizardStep::Details => "Details",
            WizardStep::Experience => "Experience",
            WizardStep::Projects => "Projects",
            WizardStep::Preview => "Preview",
        }
    }

    fn next(&self) -> Option<WizardStep> {
        WizardStep::from_index(self.index() + 1)
    }

    fn prev(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).and_then(WizardStep::from_index)
    }
}

/// Navigation failures. All of them leave the cursor untouched and map to
/// 400 responses at the HTTP boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Already at the final step")]
    AtLastStep,

    #[error("Already at the first step")]
    AtFirstStep,

    #[error("Step {target} has not been reached yet (currently at step {current})")]
    StepNotReached { target: u8, current: u8 },

    #[error("Step index {0} is out of range (valid steps are 1 through 5)")]
    StepOutOfRange(u8),

    #[error("Form is for the '{form}' step but the wizard is at '{current}'")]
    StepMismatch {
        form: &'static str,
        current: &'static str,
    },
}

/// Durable per-user cursor into the flow.
///
/// Only reachable positions exist: the cursor starts at `Theme` and moves
/// through `advance`/`back`/`go_to`/`restart`, each of which either succeeds
/// or leaves the state exactly as it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub current: WizardStep,
}

impl WizardState {
    pub fn new() -> Self {
        WizardState::default()
    }

    /// Moves one step forward. Callers validate and commit the current
    /// step's form before calling this.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        match self.current.next() {
            Some(next) => {
                self.current = next;
                Ok(next)
            }
            None => Err(WizardError::AtLastStep),
        }
    }

    /// Moves one step back without touching committed data.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        match self.current.prev() {
            Some(prev) => {
                self.current = prev;
                Ok(prev)
            }
            None => Err(WizardError::AtFirstStep),
        }
    }

    /// Jumps to an already-reached step. Steps ahead of the cursor have not
    /// been validated yet, so forward jumps are rejected.
    pub fn go_to(&mut self, target: WizardStep) -> Result<WizardStep, WizardError> {
        if target > self.current {
            return Err(WizardError::StepNotReached {
                target: target.index(),
                current: self.current.index(),
            });
        }
        self.current = target;
        Ok(target)
    }

    /// Returns the cursor to the first step. Committed data is untouched.
    pub fn restart(&mut self) {
        self.current = WizardStep::Theme;
    }
}
