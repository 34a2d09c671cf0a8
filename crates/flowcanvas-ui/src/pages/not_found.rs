//! 404 Not Found page component

use leptos::prelude::*;

use crate::router::routes;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page" style="padding: 24px;">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <a href=routes::WORKFLOWS>"Back to workflows"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_component_exists() {
        let _component = NotFound;
    }
}
