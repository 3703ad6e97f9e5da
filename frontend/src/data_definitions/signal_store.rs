//! Dashboard state held in a Dioxus signal.

use common::{
    controller::{DashboardController, DashboardStore},
    dashboard_state::DashboardState,
};
use dioxus::prelude::*;

use crate::api::files_api::HttpFilesApi;

/// Controller the dashboard components share through context.
pub type AppController = DashboardController<HttpFilesApi, SignalStore>;

#[derive(Clone, Copy, PartialEq)]
pub struct SignalStore(pub Signal<DashboardState>);

impl SignalStore {
    pub fn signal(&self) -> Signal<DashboardState> {
        self.0
    }
}

impl DashboardStore for SignalStore {
    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut signal = self.0;
        let mut state = signal.write();
        f(&mut *state)
    }
}
