use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "Intelligent File Explorer - Not found" }
        div {
            style: "
                display:flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
                padding: 60px 20px;
                color: #111827;
            ",
            h1 { style: "font-size: 32px; font-weight: 500; margin: 0;", "Page not found" }
            p { style: "font-size: 18px; color: #4B5563; margin: 0;", "Nothing lives at /{path}." }
            Link {
                to: Route::LandingPage {},
                style: "color:#4F46E5; font-size: 18px;",
                "Back to sign in"
            }
        }
    }
}
