use dioxus::prelude::*;
use types::{Roster, RosterView, UserId};

use super::components::{PaginationControls, RoleBadge, StatusBadge};
use crate::use_error;

#[component]
pub fn Users() -> Element {
    let mut roster = use_signal(Roster::default);
    let mut view = use_signal(RosterView::new);
    let mut loading = use_signal(|| true);
    let mut deleting = use_signal(|| false);
    let mut error_state = use_error();

    // Fetch the roster on mount
    use_effect(move || {
        spawn(async move {
            loading.set(true);
            match api::list_users().await {
                Ok(users) => match Roster::new(users) {
                    Ok(r) => roster.set(r),
                    Err(e) => error_state.set(e.message),
                },
                Err(e) => error_state.set_server_error(&e),
            }
            loading.set(false);
        });
    });

    let current = use_memo(move || view.read().current_page(&roster.read()));

    let pending_user = use_memo(move || {
        let view = view.read();
        let id = view.pending_delete()?;
        roster.read().get(id).cloned()
    });

    let toggle_status = move |user_id: UserId| {
        spawn(async move {
            match api::toggle_user_status(user_id.clone()).await {
                Ok(Some(status)) => {
                    roster.write().set_status(&user_id, status);
                }
                Ok(None) => {
                    tracing::warn!(%user_id, "user no longer exists");
                    roster.write().remove(&user_id);
                    view.write().clamp_page(&roster.read());
                }
                Err(e) => error_state.set_server_error(&e),
            }
        });
    };

    let confirm_delete = move || {
        let Some(user_id) = view.read().pending_delete().cloned() else {
            return;
        };

        spawn(async move {
            deleting.set(true);
            match api::delete_user(user_id).await {
                Ok(()) => {
                    view.write().confirm_delete(&mut roster.write());
                }
                Err(e) => error_state.set_server_error(&e),
            }
            deleting.set(false);
        });
    };

    let page = current();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "User Management" }
                    p { class: "page-subtitle", "Search, activate and remove dashboard users." }
                }
                div { class: "page-header-actions",
                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Search users...",
                        value: "{view.read().search()}",
                        oninput: move |e| view.write().set_search(e.value()),
                    }
                }
            }

            if *loading.read() {
                div { class: "loading", "Loading users..." }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "User" }
                                    th { "Role" }
                                    th { "Status" }
                                    th { "Last Active" }
                                    th { "Joined" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for user in page.users.iter() {
                                    {
                                        let toggle_id = user.id.clone();
                                        let delete_id = user.id.clone();
                                        rsx! {
                                            tr { key: "{user.id}",
                                                td {
                                                    div { class: "user-cell",
                                                        div { class: "avatar", "{user.initials()}" }
                                                        div {
                                                            div { class: "user-name", "{user.name}" }
                                                            div { class: "text-muted", "{user.email}" }
                                                        }
                                                    }
                                                }
                                                td { RoleBadge { role: user.role } }
                                                td {
                                                    button {
                                                        class: "btn btn-link",
                                                        title: "Toggle status",
                                                        onclick: move |_| toggle_status(toggle_id.clone()),
                                                        StatusBadge { status: user.status }
                                                    }
                                                }
                                                td { class: "text-muted", "{user.last_active}" }
                                                td { class: "text-muted", "{user.join_date}" }
                                                td {
                                                    button {
                                                        class: "btn btn-danger btn-sm",
                                                        onclick: move |_| view.write().request_delete(delete_id.clone()),
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        if page.users.is_empty() {
                            p { class: "text-muted", "No users found." }
                        }
                    }

                    if page.has_multiple_pages() {
                        PaginationControls {
                            page: page.page,
                            total_pages: page.total_pages,
                            first_index: page.first_index,
                            last_index: page.last_index,
                            total_results: page.total_results,
                            on_select: move |number| view.write().set_page(number),
                        }
                    }
                }
            }

            if let Some(user) = pending_user() {
                div { class: "modal-backdrop",
                    div { class: "modal",
                        h3 { class: "modal-title", "Delete User" }
                        p {
                            "Are you sure you want to delete "
                            strong { "{user.name}" }
                            "? This action cannot be undone."
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                disabled: *deleting.read(),
                                onclick: move |_| view.write().cancel_delete(),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-danger",
                                disabled: *deleting.read(),
                                onclick: move |_| confirm_delete(),
                                if *deleting.read() { "Deleting..." } else { "Delete" }
                            }
                        }
                    }
                }
            }
        }
    }
}
