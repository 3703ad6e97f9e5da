//! Signed-in view: session, uploads, search and the grouped file list.

use common::{config::ApiConfig, dashboard_state::{AuthState, DashboardState}};
use dioxus::{logger::tracing, prelude::*};

use crate::{
    api::files_api::HttpFilesApi,
    components::{
        dashboard_components::{
            file_groups::FileGroups, notice_toaster::NoticeToaster, search_bar::SearchBar,
            summary_modal::SummaryModal, upload_section::UploadSection, user_bar::UserBar,
        },
        error_boundary::SectionErrorBoundary,
    },
    data_definitions::signal_store::{AppController, SignalStore},
    routes::Route,
};

#[component]
pub fn DashboardPage() -> Element {
    let config = use_context::<ApiConfig>();
    let state = use_signal(DashboardState::default);
    let controller = use_context_provider(|| AppController::new(HttpFilesApi::new(&config), SignalStore(state)));
    let nav = navigator();

    // identity and listing start together; only an explicit "not signed in" leaves the page
    use_effect(move || {
        let identity = controller.clone();
        spawn(async move {
            if identity.load_identity().await == AuthState::Unauthenticated {
                tracing::info!("dashboard: no session, back to sign in");
                nav.replace(Route::LandingPage {});
            }
        });
        let listing = controller.clone();
        spawn(async move {
            listing.refresh_files().await;
        });
    });

    rsx! {
        Title { "Intelligent File Explorer - Dashboard" }
        div {
            id: "x-dashboard-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                padding: 28px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
            ",
            UserBar {}
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 16px;
                ",
                div {
                    style: "display:flex; flex-direction: column; gap: 8px; flex: 1; min-width: 300px;",
                    SearchBar {}
                }
                UploadSection {}
            }
            SectionErrorBoundary {
                FileGroups {}
            }
        }
        SummaryModal {}
        NoticeToaster {}
    }
}
