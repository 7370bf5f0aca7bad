use dioxus::prelude::*;
use types::workflow::{NewWorkflow, Workflow, WorkflowStatus};

use super::components::WorkflowStatusBadge;
use crate::{Route, use_error};

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "Automation workflows and user administration." }
                }
                div { class: "page-header-actions",
                    Link { to: Route::Users {}, class: "btn btn-secondary", "Manage Users" }
                }
            }
            Workflows {}
        }
    }
}

#[component]
fn Workflows() -> Element {
    let mut workflows = use_signal(Vec::<Workflow>::new);
    let mut loading = use_signal(|| true);
    let mut error_state = use_error();
    let mut show_create_form = use_signal(|| false);
    let mut updating = use_signal(|| None::<String>);

    use_effect(move || {
        spawn(async move {
            loading.set(true);
            match api::list_workflows().await {
                Ok(w) => workflows.set(w),
                Err(e) => error_state.set_server_error(&e),
            }
            loading.set(false);
        });
    });

    let toggle = move |workflow_id: String, status: WorkflowStatus| {
        let next = status.toggled();
        spawn(async move {
            updating.set(Some(workflow_id.clone()));
            match api::set_workflow_status(workflow_id.clone(), next).await {
                Ok(()) => {
                    if let Some(wf) = workflows.write().iter_mut().find(|w| w.id == workflow_id) {
                        wf.apply_status(next);
                    }
                }
                Err(e) => error_state.set_server_error(&e),
            }
            updating.set(None);
        });
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Automation Workflows" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_create_form.set(true),
                    "Create Workflow"
                }
            }

            if *show_create_form.read() {
                CreateWorkflowModal {
                    on_close: move |_| show_create_form.set(false),
                    on_created: move |wf: Workflow| {
                        workflows.write().push(wf);
                        show_create_form.set(false);
                    },
                }
            }

            if *loading.read() {
                div { class: "loading", "Loading workflows..." }
            } else if workflows.read().is_empty() {
                p { class: "text-muted", "No workflows yet." }
            } else {
                div { class: "workflow-grid",
                    for wf in workflows.read().iter() {
                        {
                            let workflow_id = wf.id.clone();
                            let status = wf.status;
                            let is_updating = updating.read().as_deref() == Some(wf.id.as_str());
                            let action = if status == WorkflowStatus::Running { "Pause" } else { "Start" };
                            let success_rate = format!("{:.1}%", wf.success_rate);

                            rsx! {
                                div { key: "{wf.id}", class: "workflow-card",
                                    div { class: "workflow-card-header",
                                        h3 { class: "workflow-name", "{wf.name}" }
                                        WorkflowStatusBadge { status }
                                    }
                                    p { class: "text-muted", "{wf.description}" }
                                    dl { class: "workflow-stats",
                                        dt { "Last run" }
                                        dd { "{wf.last_run}" }
                                        dt { "Next run" }
                                        dd { "{wf.next_run}" }
                                        dt { "Success rate" }
                                        dd { "{success_rate}" }
                                        dt { "Execution time" }
                                        dd { "{wf.execution_time}" }
                                    }
                                    button {
                                        class: "btn btn-secondary",
                                        disabled: is_updating,
                                        onclick: move |_| toggle(workflow_id.clone(), status),
                                        if is_updating { "Updating..." } else { "{action}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CreateWorkflowModal(on_close: EventHandler<()>, on_created: EventHandler<Workflow>) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut creating = use_signal(|| false);
    let mut form_error = use_signal(|| None::<String>);

    let submit = move |_: MouseEvent| {
        if let Err(e) = NewWorkflow::new(&name.read(), &description.read()) {
            form_error.set(Some(e.message));
            return;
        }

        spawn(async move {
            creating.set(true);
            form_error.set(None);
            match api::create_workflow(name(), description()).await {
                Ok(wf) => {
                    name.set(String::new());
                    description.set(String::new());
                    on_created.call(wf);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to create workflow");
                    form_error.set(Some("Failed to create workflow. Try again.".to_string()));
                }
            }
            creating.set(false);
        });
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                div { class: "modal-header",
                    h3 { class: "modal-title", "Create Workflow" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                if let Some(message) = form_error() {
                    div { class: "form-error", "{message}" }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "workflow_name", "Name" }
                    input {
                        id: "workflow_name",
                        class: "form-input",
                        r#type: "text",
                        placeholder: "e.g. Nightly Backup",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "workflow_description", "Description" }
                    textarea {
                        id: "workflow_description",
                        class: "form-input",
                        placeholder: "What does this workflow do?",
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                    }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: *creating.read(),
                        onclick: submit,
                        if *creating.read() { "Creating..." } else { "Create" }
                    }
                }
            }
        }
    }
}
