//! Render-failure fallbacks: one for a whole page, one for a dashboard section.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdReportProblem};

use crate::routes::Route;

fn describe(err: &ErrorContext) -> String {
    match err.error() {
        Some(captured) => format!("{:#}", captured.0),
        None => "No details were captured.".to_string(),
    }
}

/// Replaces everything below it, offering the way back to sign in.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let details = format!("[{boundary_name}] {}", describe(&err));
                rsx! {
                    ErrorPanel {
                        heading: "The file explorer stopped working",
                        details,
                        // sits above the router, so a plain anchor rather than Link
                        a {
                            href: Route::LandingPage {}.to_string(),
                            style: "color:#4F46E5; font-size: 17px;",
                            "Back to sign in"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing section from taking the whole dashboard down.
#[component]
pub fn SectionErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let details = describe(&err);
                rsx! {
                    ErrorPanel {
                        heading: "Your files could not be shown",
                        details,
                        button {
                            class: "x-hover-shadow-background",
                            style: "height: 34px; padding: 0 14px; border: 1px solid #D1D5DB; border-radius: 8px; background: white; cursor: pointer;",
                            onclick: move |_| err.clear_errors(),
                            "Try again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
fn ErrorPanel(heading: String, details: String, children: Element) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                max-width: 640px;
                margin: 24px auto;
                padding: 18px 20px;
                background: #FEF2F2;
                border: 1px solid #FCA5A5;
                border-radius: 12px;
                color: #7F1D1D;
            ",
            div {
                style: "display: flex; align-items: center; gap: 8px; font-size: 20px; font-weight: 500;",
                Icon { icon: MdReportProblem, style: "width: 24px; height: 24px;" }
                "{heading}"
            }
            details {
                summary { style: "cursor: pointer;", "Details" }
                pre { style: "white-space: pre-wrap; max-height: 240px; overflow-y: auto; margin: 8px 0 0 0;", "{details}" }
            }
            div { {children} }
        }
    }
}
