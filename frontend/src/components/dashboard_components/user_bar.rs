//! Greeting and logout row.

use common::{config::ApiConfig, dashboard_state::AuthState};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::{MdAccountCircle, MdExitToApp}};

use crate::{api::auth_api::logout_url, components::loading_indicator::LoadingIndicator, data_definitions::signal_store::AppController};

#[component]
pub fn UserBar() -> Element {
    let controller = use_context::<AppController>();
    let config = use_context::<ApiConfig>();
    let state = controller.store().signal();
    let email = match state.read().auth() {
        AuthState::Authenticated(user) => Some(user.email.clone()),
        _ => None,
    };

    rsx! {
        div {
            id: "x-user-bar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                gap: 16px;
                padding: 12px 16px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
            ",
            div {
                style: "display: flex; align-items: center; gap: 10px; font-size: 18px; color: #111827;",
                Icon { icon: MdAccountCircle, style: "width: 28px; height: 28px; color: #4F46E5;" }
                if let Some(email) = email {
                    span { "Welcome, {email}" }
                } else {
                    LoadingIndicator { label: "Checking your session...".to_string() }
                }
            }
            // native form post, the backend answers with a redirect
            form {
                action: logout_url(&config),
                method: "post",
                button {
                    r#type: "submit",
                    class: "x-hover-shadow-background",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        height: 36px;
                        padding: 0 14px;
                        font-size: 15px;
                        border-radius: 8px;
                        background: white;
                        color: #111827;
                        border: 1px solid #D1D5DB;
                        cursor: pointer;
                    ",
                    Icon { icon: MdExitToApp, style: "width: 18px; height: 18px;" }
                    "Logout"
                }
            }
        }
    }
}
