//! Displayed files partitioned into category sections.

use dioxus::prelude::*;

use crate::{components::dashboard_components::file_card::FileCard, data_definitions::signal_store::AppController};

#[component]
pub fn FileGroups() -> Element {
    let controller = use_context::<AppController>();
    let state = controller.store().signal();
    let categories = state.read().categories();

    if categories.is_empty() {
        return rsx! {
            p {
                style: "font-size: 18px; color: #6B7280; padding: 24px 4px;",
                "No files uploaded yet"
            }
        };
    }

    rsx! {
        div {
            id: "x-grouped-files",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
            ",
            for category in categories.iter() {
                div {
                    key: "{category.name}",
                    h3 {
                        style: "
                            font-size: 18px;
                            font-weight: 500;
                            letter-spacing: 0.06em;
                            color: rgb(75, 87, 112);
                            border-bottom: 1px solid rgb(75, 87, 112);
                            padding-bottom: 4px;
                            margin: 0 0 12px 0;
                        ",
                        "{category.title()}"
                    }
                    div {
                        style: "
                            display: grid;
                            grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                            gap: 14px;
                        ",
                        for file in category.files.iter().cloned() {
                            FileCard { key: "{file.filename}", file }
                        }
                    }
                }
            }
        }
    }
}
