use dioxus::prelude::*;

use crate::components::page_frame::PageFrame;
use crate::pages::dashboard_page::DashboardPage;
use crate::pages::landing_page::LandingPage;
use crate::pages::not_found_page::NotFoundPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PageFrame)]


    #[route("/")]
    LandingPage {},


    #[route("/dashboard")]
    DashboardPage {},


    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths() {
        assert_eq!(Route::LandingPage {}.to_string(), "/");
        assert_eq!(Route::DashboardPage {}.to_string(), "/dashboard");
    }

    #[test]
    fn parse_known_and_unknown_paths() {
        assert_eq!("/dashboard".parse::<Route>().ok(), Some(Route::DashboardPage {}));
        assert_eq!("/".parse::<Route>().ok(), Some(Route::LandingPage {}));
        assert_eq!(
            "/files/old".parse::<Route>().ok(),
            Some(Route::NotFoundPage { segments: vec!["files".to_string(), "old".to_string()] })
        );
    }
}
