use dioxus::prelude::*;
use types::{Role, UserStatus, workflow::WorkflowStatus};

#[component]
pub fn StatusBadge(status: UserStatus) -> Element {
    let class = match status {
        UserStatus::Active => "badge badge-success",
        UserStatus::Inactive => "badge badge-muted",
        UserStatus::Suspended => "badge badge-danger",
    };

    rsx! {
        span { class, "{status}" }
    }
}

#[component]
pub fn RoleBadge(role: Role) -> Element {
    let class = match role {
        Role::Admin => "badge badge-admin",
        Role::User => "badge badge-user",
        Role::Viewer => "badge badge-viewer",
    };

    rsx! {
        span { class, "{role}" }
    }
}

#[component]
pub fn WorkflowStatusBadge(status: WorkflowStatus) -> Element {
    let class = match status {
        WorkflowStatus::Running => "badge badge-success",
        WorkflowStatus::Paused => "badge badge-warning",
        WorkflowStatus::Stopped => "badge badge-danger",
    };

    rsx! {
        span { class, "{status}" }
    }
}

/// Numbered page buttons with a "showing X to Y of Z" summary.
#[component]
pub fn PaginationControls(
    page: usize,
    total_pages: usize,
    first_index: usize,
    last_index: usize,
    total_results: usize,
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        div { class: "pagination",
            p { class: "pagination-summary",
                "Showing "
                span { class: "font-medium", "{first_index}" }
                " to "
                span { class: "font-medium", "{last_index}" }
                " of "
                span { class: "font-medium", "{total_results}" }
                " results"
            }
            nav { class: "pagination-pages",
                for number in 1..=total_pages {
                    button {
                        key: "{number}",
                        class: if number == page { "page-btn active" } else { "page-btn" },
                        onclick: move |_| on_select.call(number),
                        "{number}"
                    }
                }
            }
        }
    }
}
