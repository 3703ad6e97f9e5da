use common::config::ApiConfig;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdLock};

use crate::api::auth_api::begin_login;

const GOOGLE_LOGO_URL: &str = "https://www.gstatic.com/firebasejs/ui/2.0.0/images/auth/google.svg";

/// Sign-in page
#[component]
pub fn LandingPage() -> Element {
    rsx! {
        Title { "Intelligent File Explorer - Sign in" }
        div {
            id: "x-landing-container",
            style: "
                display:flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",
            SignInCard {}
        }
    }
}

#[component]
fn SignInCard() -> Element {
    let config = use_context::<ApiConfig>();

    rsx! {
        div {
            id: "x-card-sign-in",
            style: "
                display:flex;
                flex-direction: column;
                align-items: center;
                gap: 18px;
                width: 420px;
                max-width: 100%;
                border-radius: 22px;
                padding: 32px 28px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                box-sizing: border-box;
            ",
            Icon { icon: MdLock, style: "width: 40px; height: 40px;" }
            div {
                style: "font-size: 34px; font-weight: 500; letter-spacing: -0.02em;",
                "Welcome"
            }
            div {
                style: "font-size: 18px; color: rgba(255,255,255,0.92); text-align: center;",
                "Sign in to access your files securely"
            }
            button {
                class: "x-hover-shadow-background",
                style: "
                    display:flex;
                    align-items:center;
                    gap: 12px;
                    height: 46px;
                    padding: 0 20px;
                    border: none;
                    border-radius: 9999px;
                    background: white;
                    color: #111827;
                    font-size: 17px;
                    font-family: Roboto, sans-serif;
                    cursor: pointer;
                ",
                onclick: move |_| begin_login(&config),
                img {
                    src: GOOGLE_LOGO_URL,
                    alt: "Google",
                    style: "width: 22px; height: 22px;",
                }
                "Sign in with Google"
            }
        }
    }
}
