use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{Notifications, Overlays, SimulatedSubmitter};

use crate::context::{get_catalog, get_site_config, SharedSubmitter};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The portfolio page. Projects open as overlays on top of it, not
///   as routes of their own.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, page context, and routing.
#[component]
pub fn App() -> Element {
    let config = get_site_config();
    let submit_delay = config.submit_delay();

    use_context_provider(get_catalog);
    use_context_provider(|| config);
    use_context_provider(|| -> SharedSubmitter { Rc::new(SimulatedSubmitter::new(submit_delay)) });

    let overlays: Signal<Overlays> = use_signal(Overlays::new);
    let notifications: Signal<Notifications> = use_signal(Notifications::new);
    use_context_provider(|| overlays);
    use_context_provider(|| notifications);

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css",
        }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_the_only_route() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
        assert!("/projects/pacman".parse::<Route>().is_err());
    }
}
