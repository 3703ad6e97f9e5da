//! View, delete and summarize buttons of a file card.

use common::config::ApiConfig;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdDelete, MdOpenInNew}, md_file_icons::MdCloudQueue}};

use crate::{api::files_api::view_url, data_definitions::signal_store::AppController};

const ACTION_BUTTON_STYLE: &str = "
    display: flex;
    align-items: center;
    gap: 4px;
    height: 32px;
    padding: 0 10px;
    cursor: pointer;
    border: 1px solid #000;
    border-radius: 8px;
    background: white;
    color: black;
    font-size: 14px;
    text-decoration: none;
    box-sizing: border-box;
";

#[component]
pub fn FileCardActions(filename: ReadSignal<String>) -> Element {
    let controller = use_context::<AppController>();
    let config = use_context::<ApiConfig>();
    let summarizing = controller.store().signal().read().activity().is_summarizing(&filename.read());

    let delete_file = {
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            let filename = filename();
            spawn(async move {
                controller.delete(filename).await;
            });
        }
    };
    let summarize_file = move |_| {
        let controller = controller.clone();
        let filename = filename();
        spawn(async move {
            controller.summarize(filename).await;
        });
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 6px;
            ",
            a {
                style: ACTION_BUTTON_STYLE,
                class: "x-hover-shadow-background",
                target: "_blank",
                href: view_url(&config, &filename.read()),
                Icon { icon: MdOpenInNew, style: "width: 16px; height: 16px;" }
                "View"
            }
            button {
                style: ACTION_BUTTON_STYLE,
                class: "x-hover-shadow-background",
                onclick: delete_file,
                Icon { icon: MdDelete, style: "width: 16px; height: 16px;" }
                "Delete"
            }
            button {
                style: ACTION_BUTTON_STYLE,
                class: "x-hover-shadow-background",
                disabled: summarizing,
                onclick: summarize_file,
                Icon { icon: MdCloudQueue, style: "width: 16px; height: 16px;" }
                if summarizing { "Summarizing..." } else { "Summarize" }
            }
        }
    }
}
