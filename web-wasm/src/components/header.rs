//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🩺 MedScan"</h1>
            <p class="text-muted">
                "Upload your prescription image and extract medication information instantly"
            </p>
        </header>
    }
}
