//! Header and footer shared by every page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_file_icons::MdFolderOpen;
use dioxus_free_icons::Icon;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared page frame component.
#[component]
pub fn PageFrame() -> Element {
    rsx! {

        div {
            id:"x-app-container",

            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
                background: #F5F6F8;
                font-family: Roboto, sans-serif;
            ",

            header {
                id: "x-app-header",
                style:"
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    height: 64px;
                    padding: 0 24px;
                    background-color: #1C212D;
                    color: white;
                    font-size: 24px;
                    font-weight: 500;
                    flex-shrink: 0;
                ",
                Icon { icon: MdFolderOpen, style: "width: 30px; height: 30px;" }
                "Intelligent File Explorer"
            }

            main {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "PageFrame".to_string(),
                    Outlet::<Route> {}
                }
            }

            footer {
                id: "x-app-footer",
                style: "
                    padding: 14px 24px;
                    text-align: center;
                    font-size: 14px;
                    color: #6B7280;
                    border-top: 1px solid #E5E7EB;
                    background: white;
                ",
                "© 2025 Intelligent File Explorer"
            }
        }

    }
}
