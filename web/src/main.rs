use dioxus::prelude::*;

mod views;

use views::{Dashboard, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/users")]
        Users {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init().await?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Opsboard" }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<String>>);

impl ErrorState {
    pub fn set(&mut self, error: impl Into<String>) {
        self.0.set(Some(error.into()));
    }

    pub fn set_server_error(&mut self, err: &ServerFnError) {
        let message = match err {
            ServerFnError::ServerError { message, .. } => message.clone(),
            other => other.to_string(),
        };
        tracing::warn!(%message, "server function failed");
        self.0.set(Some(message));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the global error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_error();
    let error = error_state.0.read();

    if let Some(message) = error.as_ref() {
        rsx! {
            div { class: "error-banner",
                div { class: "error-banner-content",
                    span { class: "error-banner-message", "{message}" }
                    button {
                        class: "error-banner-close",
                        onclick: move |_| error_state.clear(),
                        "×"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}

#[component]
fn AppLayout() -> Element {
    use_context_provider(|| ErrorState(Signal::new(None)));

    rsx! {
        div { class: "app-layout",
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "Opsboard" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Dashboard {}, "Dashboard" }
                    NavLink { to: Route::Users {}, "Users" }
                }
            }
            main { class: "main-content",
                ErrorBanner {}
                Outlet::<Route> {}
            }
        }
    }
}
