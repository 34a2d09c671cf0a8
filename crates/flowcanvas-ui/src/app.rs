//! Root application component.
//!
//! Loads the configuration once and shares it, together with the REST
//! repository, through Leptos context.

use leptos::prelude::*;

use crate::api::RestRepository;
use crate::config::AppConfig;
use crate::router::{AppRouter, routes};

/// Shared services available to every page
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub repository: RestRepository,
}

impl AppContext {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let repository = RestRepository::new(&config.api_url);
        Self { config, repository }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(AppConfig::load())
    }
}

/// The shared context, or a freshly loaded one outside the app tree
#[must_use]
pub fn app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_default()
}

/// Main application component with router integration
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::default());

    view! {
        <div class="app-container" style="display: flex; flex-direction: column; height: 100vh; font-family: system-ui, sans-serif;">
            <header class="app-header" style="display: flex; align-items: center; gap: 24px; padding: 8px 16px; background: #1e293b; color: white;">
                <h1 style="margin: 0; font-size: 18px;">"flowcanvas"</h1>
                <nav class="app-nav" style="display: flex; gap: 12px;">
                    <a href=routes::WORKFLOWS style="color: #cbd5e1;">"Workflows"</a>
                    <a href=routes::NEW_WORKFLOW style="color: #cbd5e1;">"New"</a>
                </nav>
            </header>
            <main class="app-main" style="flex: 1; min-height: 0; position: relative;">
                <AppRouter />
            </main>
        </div>
    }
}
