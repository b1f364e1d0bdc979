//! トースト通知コンポーネント
//!
//! 成功3秒・警告3秒・エラー5秒で自動的に消える

use leptos::prelude::*;

/// 通知の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStatus {
    Success,
    Warning,
    Error,
}

impl ToastStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastStatus::Success => "toast-success",
            ToastStatus::Warning => "toast-warning",
            ToastStatus::Error => "toast-error",
        }
    }
}

/// 通知1件。idはホスト側で採番される
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub status: ToastStatus,
    pub duration_ms: u32,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: Option<String>) -> Self {
        Toast {
            id: 0,
            title: title.into(),
            description,
            status: ToastStatus::Success,
            duration_ms: 3000,
        }
    }

    pub fn warning(title: impl Into<String>, description: Option<String>) -> Self {
        Toast {
            id: 0,
            title: title.into(),
            description,
            status: ToastStatus::Warning,
            duration_ms: 3000,
        }
    }

    pub fn error(title: impl Into<String>, description: Option<String>) -> Self {
        Toast {
            id: 0,
            title: title.into(),
            description,
            status: ToastStatus::Error,
            duration_ms: 5000,
        }
    }
}

#[component]
pub fn ToastHost(toasts: ReadSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=format!("toast {}", toast.status.css_class())>
                            <p class="toast-title">{toast.title.clone()}</p>
                            {toast.description.clone().map(|description| {
                                view! { <p class="toast-description">{description}</p> }
                            })}
                        </div>
                    }
                }
            />
        </div>
    }
}
