//! アップロードエリアコンポーネント
//!
//! ファイルピッカーとドラッグ&ドロップの両方が同じコールバックに合流する

use leptos::prelude::*;
use web_sys::{DragEvent, File};

#[component]
pub fn UploadArea<F>(on_file_selected: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            // ブラウザのデフォルト動作（ファイルへのナビゲーション）を抑止
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    // 複数ドロップされても先頭の1件のみ扱う
                    if let Some(file) = files.get(0) {
                        on_file_selected(file);
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_change = {
        let on_file_selected = on_file_selected.clone();
        move |_| {
            if let Some(input) = file_input.get() {
                if let Some(files) = input.files() {
                    if let Some(file) = files.get(0) {
                        on_file_selected(file);
                    }
                }
                // 同じファイルを選び直してもchangeが発火するようにクリア
                input.set_value("");
            }
        }
    };

    let on_choose = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <div class="upload-icon">"📤"</div>
            <p class="upload-title">"Drop your prescription image here"</p>
            <p class="text-muted">"or"</p>
            <button class="btn btn-primary" on:click=on_choose>
                "📷 Choose File"
            </button>
            <input
                type="file"
                accept="image/*"
                class="file-input-hidden"
                node_ref=file_input
                on:change=on_change
            />
            <p class="upload-hint">"Supports: JPG, PNG, GIF (Max 10MB)"</p>
        </div>
    }
}
