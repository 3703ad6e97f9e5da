use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdClose}};

use crate::data_definitions::signal_store::AppController;


#[component]
pub fn SearchBar() -> Element {
    let controller = use_context::<AppController>();
    let state = controller.store().signal();
    let mut search_query = use_signal(String::new);

    let run_search = use_callback({
        let controller = controller.clone();
        move |query: String| {
            let controller = controller.clone();
            spawn(async move {
                controller.search(query).await;
            });
        }
    });
    let clear_search = use_callback(move |_: ()| {
        search_query.set(String::new());
        controller.clear_search();
    });

    let search_onsubmit = move |event: Event<FormData>| {
        event.prevent_default();
        run_search.call(search_query.read().clone());
    };
    let search_oninput = move |event: Event<FormData>| {
        search_query.set(event.value());
    };

    let searching = state.read().activity().is_searching();
    let result_summary = state.read().search_results().map(|s| (s.results.len(), s.query.clone()));

    rsx! {
        form {
            id: "x-search-bar",
            onsubmit: search_onsubmit,
            style: "
                display:flex;
                align-items:center;
                gap: 12px;
                background-color: white;
                border-radius: 9999px;
                padding: 6px 8px 6px 16px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                max-width: 640px;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Search files with AI...",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 18px;
                    font-family: Roboto, sans-serif;
                ",
                value: "{search_query}",
                oninput: search_oninput,
            }
            button {
                r#type: "submit",
                style: "
                    height: 34px;
                    padding: 0 16px;
                    border: none;
                    border-radius: 9999px;
                    background: #4F46E5;
                    color: white;
                    font-size: 15px;
                    cursor: pointer;
                ",
                if searching { "Searching..." } else { "Search" }
            }
        }
        if let Some((count, query)) = result_summary {
            div {
                id: "x-search-status",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    font-size: 15px;
                    color: rgb(75, 87, 112);
                ",
                span { "{count} matches for \"{query}\"" }
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        border: 1px solid #D1D5DB;
                        border-radius: 6px;
                        background: white;
                        cursor: pointer;
                        padding: 2px 8px;
                    ",
                    onclick: move |_| clear_search.call(()),
                    Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
                    "Clear"
                }
            }
        }
    }
}
