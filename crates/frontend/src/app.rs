use crate::usecases::u501_review_code::ReviewCodePage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    log::info!("Backend: {}", crate::shared::api_utils::api_base());

    view! {
        <ConfigProvider>
            <ReviewCodePage />
        </ConfigProvider>
    }
}
