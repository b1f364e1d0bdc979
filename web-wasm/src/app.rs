//! メインアプリケーションコンポーネント
//!
//! タブでアップロード画面とダッシュボードを切り替え、
//! トースト通知のリストを保持する

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::{
    dashboard::Dashboard, header::Header, toast::Toast, toast::ToastHost,
    upload_view::UploadView,
};

/// 表示中のビュー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppTab {
    #[default]
    Upload,
    Dashboard,
}

#[component]
pub fn App() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(AppTab::Upload);
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());
    let toast_seq = StoredValue::new(0u64);

    // 通知を積んで、表示時間経過後に自動で取り除く
    let push_toast = move |mut toast: Toast| {
        toast_seq.update_value(|seq| *seq += 1);
        let id = toast_seq.get_value();
        toast.id = id;
        let duration = toast.duration_ms;
        set_toasts.update(|list| list.push(toast));

        Timeout::new(duration, move || {
            set_toasts.update(|list| list.retain(|t| t.id != id));
        })
        .forget();
    };

    view! {
        <div class="container">
            <Header />

            <div class="tab-bar">
                <button
                    class="tab"
                    class:active=move || active_tab.get() == AppTab::Upload
                    on:click=move |_| set_active_tab.set(AppTab::Upload)
                >
                    "📄 Upload Document"
                </button>
                <button
                    class="tab"
                    class:active=move || active_tab.get() == AppTab::Dashboard
                    on:click=move |_| set_active_tab.set(AppTab::Dashboard)
                >
                    "📊 Analytics Dashboard"
                </button>
            </div>

            <Show
                when=move || active_tab.get() == AppTab::Upload
                fallback=move || view! { <Dashboard push_toast=push_toast /> }
            >
                <UploadView push_toast=push_toast />
            </Show>

            <ToastHost toasts=toasts />
        </div>
    }
}
