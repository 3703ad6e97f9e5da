//! Turns queued dashboard notices into toasts.

use std::time::Duration;

use common::dashboard_state::{Notice, NoticeKind};
use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, consume_toast};

use crate::data_definitions::signal_store::AppController;

const NOTICE_DURATION: Duration = Duration::from_secs(8);

#[component]
pub fn NoticeToaster() -> Element {
    let controller = use_context::<AppController>();
    let mut state = controller.store().signal();

    use_effect(move || {
        if !state.read().has_pending_notices() {
            return;
        }
        let notices = state.write().take_notices();
        let toast_api = consume_toast();
        for Notice { kind, title, description } in notices {
            let options = ToastOptions::new()
                .description(description)
                .duration(NOTICE_DURATION)
                .permanent(false);
            match kind {
                NoticeKind::Info => toast_api.info(title, options),
                NoticeKind::Success => toast_api.success(title, options),
                NoticeKind::Error => toast_api.error(title, options),
            }
        }
    });

    rsx! {}
}
