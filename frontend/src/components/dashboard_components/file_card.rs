//! Card for a single file.

use common::models::FileRecord;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdDescription};

use crate::components::dashboard_components::file_card_actions::FileCardActions;

#[component]
pub fn FileCard(file: ReadSignal<FileRecord>) -> Element {
    let FileRecord { filename, .. } = file.read().clone();
    let stored_summary = file.read().stored_summary().map(|s| s.to_string());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                background: white;
                border: 1px solid #AAAAAA55;
                border-radius: 8px;
                padding: 12px 14px;
                box-shadow: 0 4px 10px rgba(0,0,0,0.05);
                box-sizing: border-box;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    min-width: 0;
                ",
                Icon { icon: MdDescription, style: "width: 22px; height: 22px; color: #4F46E5; flex-shrink: 0;" }
                span {
                    style: "
                        font-size: 16px;
                        font-weight: 500;
                        color: #111827;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    title: "{filename}",
                    "{filename}"
                }
            }
            if let Some(summary) = stored_summary {
                p {
                    style: "
                        margin: 0;
                        font-size: 13px;
                        color: #4B5563;
                        max-height: 54px;
                        overflow: hidden;
                    ",
                    "{summary}"
                }
            }
            FileCardActions { filename }
        }
    }
}
