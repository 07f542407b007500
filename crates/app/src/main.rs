use dioxus::prelude::*;
use shared_types::{DashboardDataSource, PortalFlags, StaticDashboardSource};
use shared_ui::theme::{ThemeMode, ThemeSeed, ThemeState};
use std::rc::Rc;

mod icons;
pub mod notify;
mod session;
mod views;

use session::SessionHandle;

/// Dashboard records provided as context. Views never build their own.
#[derive(Clone)]
pub struct DataSource(Rc<dyn DashboardDataSource>);

impl DataSource {
    pub fn new(source: impl DashboardDataSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn get(&self) -> &dyn DashboardDataSource {
        self.0.as_ref()
    }
}

/// Hook to access the dashboard data source.
pub fn use_data_source() -> DataSource {
    use_context::<DataSource>()
}

const THEME: Asset = asset!("/assets/theme.css");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        let router = server::router::with_request_layers(dioxus::server::router(App));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch flags once and provide via context (defaults on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_portal_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(PortalFlags::default()))
        .unwrap_or_default();

    let initial_mode = ThemeMode::from_dark(flags.dark_mode);
    use_context_provider(|| flags);
    use_context_provider(|| ThemeState::new(initial_mode));
    use_context_provider(SessionHandle::new);
    use_context_provider(|| DataSource::new(StaticDashboardSource));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ThemeSeed {}
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "portal-loading",
                        p { "Loading..." }
                    }
                },
                views::PortalRoot {}
            }
        }
    }
}
