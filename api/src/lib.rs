use dioxus::prelude::*;
use types::{
    UserId, UserRecord, UserStatus,
    workflow::{NewWorkflow, Workflow, WorkflowStatus},
};

/// The whole roster. Filtering and paging happen in the browser.
#[post("/api/users")]
pub async fn list_users() -> ServerFnResult<Vec<UserRecord>> {
    let state = server::state()?;
    Ok(state.roster.snapshot().await.into())
}

#[post("/api/users/toggle-status")]
pub async fn toggle_user_status(user_id: UserId) -> ServerFnResult<Option<UserStatus>> {
    let state = server::state()?;
    Ok(state
        .roster
        .toggle_status(&user_id)
        .await
        .map(|user| user.status))
}

#[post("/api/users/delete")]
pub async fn delete_user(user_id: UserId) -> ServerFnResult<()> {
    let state = server::state()?;
    state.roster.delete(&user_id).await;
    Ok(())
}

#[post("/api/workflows")]
pub async fn list_workflows() -> ServerFnResult<Vec<Workflow>> {
    let state = server::state()?;
    Ok(state.workflows.list_workflows().await?)
}

#[post("/api/workflows/create")]
pub async fn create_workflow(name: String, description: String) -> ServerFnResult<Workflow> {
    let state = server::state()?;
    let workflow = NewWorkflow::new(&name, &description)?;
    Ok(state.workflows.create_workflow(&workflow).await?)
}

#[post("/api/workflows/status")]
pub async fn set_workflow_status(
    workflow_id: String,
    status: WorkflowStatus,
) -> ServerFnResult<()> {
    let state = server::state()?;
    Ok(state.workflows.set_status(&workflow_id, status).await?)
}
