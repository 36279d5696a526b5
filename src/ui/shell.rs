use dioxus::prelude::*;

use crate::app::Route;
use crate::infra::HealthStatus;
use crate::ui::theme;
use crate::util::version::{version_label, APP_AUTHOR, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        div { class: "flex min-h-screen flex-col bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-sky-900/40 bg-slate-950/90 px-6 py-4 backdrop-blur",
                div { class: "mx-auto flex max-w-6xl flex-wrap items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🚢" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight text-sky-200", "{APP_NAME}" }
                            p { class: "text-xs italic text-slate-500", "your cargo, quoted in seconds" }
                        }
                    }

                    nav { class: "flex flex-wrap gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Home {}),
                            onclick: move |_| { nav.push(Route::Home {}); },
                            label: "🏠 Home",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Chat {}),
                            onclick: move |_| { nav.push(Route::Chat {}); },
                            label: "💬 AI Assistant",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Rates {}),
                            onclick: move |_| { nav.push(Route::Rates {}); },
                            label: "🔍 Rate Search",
                        }
                        NavButton {
                            active: matches!(current_route, Route::About {}),
                            onclick: move |_| { nav.push(Route::About {}); },
                            label: "ℹ️ About",
                        }
                    }
                }
            }

            main { class: "mx-auto w-full max-w-6xl flex-1 px-6 py-10",
                {children}
            }

            footer {
                class: "border-t border-slate-900/60 bg-slate-950/80 px-6 py-5",
                div { class: "mx-auto flex max-w-6xl flex-wrap items-center justify-between gap-3 text-xs text-slate-500",
                    p { "{APP_AUTHOR} · sea freight, air freight and customs clearance." }
                    div { class: "flex items-center gap-4",
                        HealthBadge {}
                        span { "{version}" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

/// Footer pill reflecting the last `/health` probe.
#[component]
fn HealthBadge() -> Element {
    let health = use_context::<Signal<Option<HealthStatus>>>();

    let (class, label) = match health() {
        None => (
            "border-slate-700 text-slate-500",
            "Checking API…".to_string(),
        ),
        Some(status) if status.is_healthy() => (
            "border-emerald-500/40 text-emerald-300",
            match status.version {
                Some(version) => format!("API Online · v{version}"),
                None => "API Online".to_string(),
            },
        ),
        Some(_) => ("border-rose-500/40 text-rose-300", "API Offline".to_string()),
    };

    rsx! {
        span {
            class: "inline-flex items-center gap-1.5 rounded-full border px-2.5 py-0.5 {class}",
            span { class: "h-1.5 w-1.5 rounded-full bg-current" }
            "{label}"
        }
    }
}
