//! File picker that sends the chosen file to the backend.

use common::{dashboard_state::Activity, error::ApiError, models::FileUpload};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFileUpload};

use crate::{components::loading_indicator::LoadingIndicator, data_definitions::signal_store::AppController};

#[component]
pub fn UploadSection() -> Element {
    let controller = use_context::<AppController>();
    let state = controller.store().signal();

    let upload_picked_file = use_callback(move |event: Event<FormData>| {
        let controller = controller.clone();
        spawn(async move {
            let Some(file) = event.files().into_iter().next() else {
                return;
            };
            let filename = file.name();
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    controller.upload_unreadable(filename, ApiError::FileRead(e.to_string())).await;
                    return;
                }
            };
            let upload = FileUpload { filename, content_type: file.content_type(), bytes: bytes.to_vec() };
            controller.upload(upload).await;
        });
    });

    let uploading = match state.read().activity() {
        Activity::Uploading { filename, .. } => Some(filename.clone()),
        _ => None,
    };

    rsx! {
        div {
            id: "x-upload-section",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 14px;
            ",
            label {
                class: "x-hover-shadow-background",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    height: 40px;
                    padding: 0 16px;
                    border-radius: 8px;
                    background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                    color: white;
                    font-size: 16px;
                    cursor: pointer;
                ",
                Icon { icon: MdFileUpload, style: "width: 20px; height: 20px;" }
                "Upload File"
                input {
                    r#type: "file",
                    hidden: true,
                    onchange: move |event| upload_picked_file.call(event),
                }
            }
            if let Some(filename) = uploading {
                LoadingIndicator { label: format!("Uploading {filename}...") }
            }
        }
    }
}
