use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::portfolio::handlers::UserIdQuery;
use crate::state::AppState;
use crate::wizard::forms::StepForm;
use crate::wizard::{WizardError, WizardState, WizardStep};

/// Where the flow stands, plus the full step catalog so clients can draw
/// the stepper without hardcoding it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardStatus {
    pub step: WizardStep,
    pub step_index: u8,
    pub total_steps: u8,
    pub steps: Vec<StepInfo>,
}

#[derive(Serialize)]
pub struct StepInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub index: u8,
}

impl From<WizardState> for WizardStatus {
    fn from(state: WizardState) -> Self {
        WizardStatus {
            step: state.current,
            step_index: state.current.index(),
            total_steps: WizardStep::COUNT,
            steps: WizardStep::ALL
                .iter()
                .map(|step| StepInfo {
                    id: step.id(),
                    label: step.label(),
                    index: step.index(),
                })
                .collect(),
        }
    }
}

#[derive(Deserialize)]
pub struct GoToRequest {
    pub step: u8,
}

/// The wizard is anchored to a portfolio; users without one have no flow to
/// resume. A user with a portfolio but no saved cursor starts at step one.
async fn load_state(state: &AppState, user_id: Uuid) -> Result<WizardState, AppError> {
    state
        .storage
        .get_portfolio(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No portfolio exists for user {user_id}")))?;
    Ok(state
        .storage
        .get_wizard_state(user_id)
        .await?
        .unwrap_or_default())
}

/// GET /api/v1/wizard
pub async fn handle_get_wizard(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<WizardStatus>, AppError> {
    let wizard = load_state(&state, params.user_id).await?;
    Ok(Json(wizard.into()))
}

/// POST /api/v1/wizard/next
///
/// Validates the current step's form, commits it through the same merge
/// path as a direct PATCH, then moves the cursor forward. On any failure
/// both the record and the cursor stay where they were.
pub async fn handle_next(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(form): Json<StepForm>,
) -> Result<Json<WizardStatus>, AppError> {
    let mut wizard = load_state(&state, params.user_id).await?;

    if wizard.current == WizardStep::Preview {
        return Err(WizardError::AtLastStep.into());
    }
    if form.step() != wizard.current {
        return Err(WizardError::StepMismatch {
            form: form.step().id(),
            current: wizard.current.id(),
        }
        .into());
    }

    let update = form.into_update()?;
    state.storage.update_portfolio(params.user_id, update).await?;

    wizard.advance()?;
    state.storage.save_wizard_state(params.user_id, wizard).await?;
    Ok(Json(wizard.into()))
}

/// POST /api/v1/wizard/back
pub async fn handle_back(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<WizardStatus>, AppError> {
    let mut wizard = load_state(&state, params.user_id).await?;
    wizard.back()?;
    state.storage.save_wizard_state(params.user_id, wizard).await?;
    Ok(Json(wizard.into()))
}

/// POST /api/v1/wizard/goto
pub async fn handle_goto(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<GoToRequest>,
) -> Result<Json<WizardStatus>, AppError> {
    let mut wizard = load_state(&state, params.user_id).await?;
    let target = WizardStep::from_index(req.step).ok_or(WizardError::StepOutOfRange(req.step))?;
    wizard.go_to(target)?;
    state.storage.save_wizard_state(params.user_id, wizard).await?;
    Ok(Json(wizard.into()))
}

/// POST /api/v1/wizard/restart
///
/// Returns the cursor to the first step. Committed portfolio data stays.
pub async fn handle_restart(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<WizardStatus>, AppError> {
    let mut wizard = load_state(&state, params.user_id).await?;
    wizard.restart();
    state.storage.save_wizard_state(params.user_id, wizard).await?;
    Ok(Json(wizard.into()))
}
