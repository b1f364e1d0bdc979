//! アップロード画面（スキャンワークフロー）
//!
//! 状態遷移: Empty → FileSelected → Submitting → ResultReady。
//! resetでどの状態からもEmptyへ戻る

use leptos::prelude::*;
use medscan_common::{format_scan_error, format_scan_result, validate_image_type, ScanPhase};
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, Url};

use crate::api;
use crate::components::result_card::ResultCard;
use crate::components::toast::Toast;
use crate::components::upload_area::UploadArea;

#[component]
pub fn UploadView<FT>(push_toast: FT) -> impl IntoView
where
    FT: Fn(Toast) + 'static + Clone + Send,
{
    let (phase, set_phase) = signal(ScanPhase::Empty);
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (result_text, set_result_text) = signal(String::new());
    let (patient_name, set_patient_name) = signal("John Doe".to_string());

    // 選択中のファイル本体。表示はpreview_url経由なので非リアクティブでよい
    let selected_file = StoredValue::new_local(None::<File>);
    // リセットで破棄されたリクエストの応答を捨てるためのトークン
    let scan_seq = StoredValue::new(0u64);

    let revoke_preview = move || {
        if let Some(old) = preview_url.get_untracked() {
            let _ = Url::revoke_object_url(&old);
        }
    };

    let on_file_selected = {
        let push_toast = push_toast.clone();
        move |file: File| match validate_image_type(&file.type_()) {
            Ok(()) => {
                // 前のプレビューを解放してから新しいURLを割り当てる
                revoke_preview();
                let url = Url::create_object_url_with_blob(&file).unwrap_or_default();
                selected_file.set_value(Some(file));
                set_preview_url.set(Some(url));
                set_result_text.set(String::new());
                set_phase.set(ScanPhase::FileSelected);
                push_toast(Toast::success("Image uploaded successfully!", None));
            }
            Err(err) => {
                // 状態は変えない
                push_toast(Toast::error(
                    "Please select a valid image file",
                    Some(err.to_string()),
                ));
            }
        }
    };

    let on_scan = {
        let push_toast = push_toast.clone();
        move |_| {
            // Submitting中の再送信はno-op
            if !phase.get_untracked().can_submit() {
                return;
            }
            let Some(file) = selected_file.get_value() else {
                return;
            };

            set_phase.set(ScanPhase::Submitting);
            scan_seq.update_value(|seq| *seq += 1);
            let seq = scan_seq.get_value();
            let patient = patient_name.get_untracked();

            let push_toast = push_toast.clone();
            spawn_local(async move {
                let outcome =
                    api::scan::upload_scan(api::DEFAULT_API_BASE, &file, &patient).await;

                // リセットで上書き済みなら応答を捨てる
                if scan_seq.get_value() != seq {
                    return;
                }

                match outcome {
                    Ok(result) => {
                        let count = result.lab_values.len();
                        set_result_text.set(format_scan_result(&result));
                        set_phase.set(ScanPhase::ResultReady);
                        push_toast(Toast::success(
                            "Prescription processed successfully!",
                            Some(format!("Found {} lab values", count)),
                        ));
                    }
                    Err(err) => {
                        set_result_text.set(format_scan_error(&err.to_string()));
                        set_phase.set(ScanPhase::ResultReady);
                        push_toast(Toast::error(
                            "Error processing prescription",
                            Some(err.to_string()),
                        ));
                    }
                }
            });
        }
    };

    let on_reset = move |_| {
        scan_seq.update_value(|seq| *seq += 1);
        revoke_preview();
        selected_file.set_value(None);
        set_preview_url.set(None);
        set_result_text.set(String::new());
        set_phase.set(ScanPhase::Empty);
    };

    view! {
        <div class=move || format!("upload-view phase-{}", phase.get().as_str())>
            <div class="form-group patient-field">
                <label for="patient-name">"Patient Name"</label>
                <input
                    type="text"
                    id="patient-name"
                    prop:value=move || patient_name.get()
                    on:input=move |ev| {
                        set_patient_name.set(event_target_value(&ev));
                    }
                />
            </div>

            <div class:hidden=move || preview_url.get().is_some()>
                <UploadArea on_file_selected=on_file_selected />
            </div>

            <div class="preview-section" class:hidden=move || preview_url.get().is_none()>
                <img
                    class="prescription-preview"
                    alt="Prescription preview"
                    src=move || preview_url.get().unwrap_or_default()
                />
                <div class="preview-actions">
                    <button
                        class="btn btn-primary"
                        disabled=move || !phase.get().can_submit()
                        on:click=on_scan
                    >
                        {move || {
                            if phase.get().is_submitting() {
                                "Scanning..."
                            } else {
                                "✔ Scan Prescription"
                            }
                        }}
                    </button>
                    <button class="btn btn-secondary" on:click=on_reset>
                        "Upload New Image"
                    </button>
                </div>
            </div>

            <Show when=move || phase.get().is_submitting()>
                <div class="spinner-section">
                    <div class="spinner"></div>
                    <p>"Processing your prescription..."</p>
                </div>
            </Show>

            <Show when=move || phase.get() == ScanPhase::ResultReady>
                <ResultCard result_text=result_text />
            </Show>
        </div>
    }
}
