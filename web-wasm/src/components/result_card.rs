//! 抽出結果カードコンポーネント

use leptos::prelude::*;

#[component]
pub fn ResultCard(result_text: ReadSignal<String>) -> impl IntoView {
    view! {
        <div class="results-card">
            <div class="results-header">
                <span class="badge badge-green">"Extraction Complete"</span>
                <h3>"Extracted Information"</h3>
            </div>
            <pre class="results-text">{move || result_text.get()}</pre>
        </div>
    }
}
