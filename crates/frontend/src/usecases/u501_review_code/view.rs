//! Review Code - View Component

use super::model::ReviewDisplay;
use super::view_model::ReviewCodeVm;
use super::EDITOR_LANGUAGE;
use crate::shared::components::CodeEditor;
use crate::shared::markdown::render_markdown;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_review_code::ReviewCode;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ReviewCodePage() -> impl IntoView {
    let vm = ReviewCodeVm::new();

    view! {
        <header class="app-header">
            <h1>"🚀 " {ReviewCode::display_name()}</h1>
            <p class="subtitle">{ReviewCode::description()}</p>
        </header>

        <main class="main-container">
            <div class="editor-section">
                <div class="section-header">
                    <h2>"💻 Your Code"</h2>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !vm.can_submit())
                        on_click=move |_| vm.submit()
                    >
                        {move || if vm.is_busy() { "🔄 Analyzing..." } else { "🔍 Review Code" }}
                    </Button>
                </div>

                <CodeEditor
                    value=Signal::derive(move || vm.code())
                    on_input=Callback::new(move |code: String| vm.set_code(code))
                    language=EDITOR_LANGUAGE
                />
            </div>

            <div class="review-section">
                <div class="section-header">
                    <h2>"📊 AI Analysis"</h2>
                </div>

                <div class="review-content">
                    {move || match vm.display.get() {
                        ReviewDisplay::Loading => view! { <ReviewLoading /> }.into_any(),
                        ReviewDisplay::Result(markdown) => {
                            view! {
                                <div class="markdown-content" inner_html=render_markdown(&markdown)></div>
                            }
                                .into_any()
                        }
                        ReviewDisplay::Empty => view! { <ReviewEmptyState /> }.into_any(),
                    }}
                </div>
            </div>
        </main>
    }
}

#[component]
#[allow(non_snake_case)]
fn ReviewLoading() -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="ai-thinking">
                <Spinner />
                <h3>"🤖 AI Analyzing Code..."</h3>
                <p>"Please wait while our AI reviews your code"</p>
            </div>

            <div class="skeleton-loading">
                <div class="skeleton-line skeleton-title"></div>
                <div class="skeleton-line skeleton-medium"></div>
                <div class="skeleton-line skeleton-long"></div>
                <div class="skeleton-line skeleton-short"></div>
                <div class="skeleton-line skeleton-medium"></div>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ReviewEmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-icon">"👨‍💻"</div>
            <h3>"Ready for Code Review"</h3>
            <p>"Write your code on the left and click Review Code to get AI-powered analysis"</p>
        </div>
    }
}
