//! Overlay showing the summary of one file.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::data_definitions::signal_store::AppController;

#[component]
pub fn SummaryModal() -> Element {
    let controller = use_context::<AppController>();
    let state = controller.store().signal();
    let Some(summary) = state.read().summary().cloned() else {
        return rsx! {};
    };
    let text_color = if summary.failed { "#B91C1C" } else { "#111827" };

    rsx! {
        // Close is the only way out; the overlay itself does not react to clicks
        div {
            class: "x-modal-overlay",
            div {
                class: "x-modal-window",
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        justify-content: space-between;
                        gap: 12px;
                    ",
                    h2 {
                        style: "margin: 0; font-size: 22px; font-weight: 500; color: #0F172A;",
                        "Summary - {summary.filename}"
                    }
                    button {
                        class: "x-hover-shadow-background",
                        style: "
                            display: flex;
                            align-items: center;
                            gap: 4px;
                            height: 34px;
                            padding: 0 12px;
                            border: 1px solid #D1D5DB;
                            border-radius: 8px;
                            background: white;
                            cursor: pointer;
                        ",
                        onclick: move |_| controller.close_summary(),
                        Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
                        "Close"
                    }
                }
                p {
                    style: "
                        margin: 0;
                        white-space: pre-wrap;
                        font-size: 16px;
                        line-height: 1.6;
                        color: {text_color};
                        max-height: 60vh;
                        overflow-y: auto;
                    ",
                    "{summary.text}"
                }
            }
        }
    }
}
