//! 分析ダッシュボード（患者名検索とレポート一覧）

use leptos::prelude::*;
use medscan_common::{format_report_date, validate_query, Report, SummaryStats};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::stats_cards::StatsCards;
use crate::components::toast::Toast;

#[component]
pub fn Dashboard<FT>(push_toast: FT) -> impl IntoView
where
    FT: Fn(Toast) + 'static + Clone + Send,
{
    let (patient_name, set_patient_name) = signal(String::new());
    let (reports, set_reports) = signal(Vec::<Report>::new());
    let (loading, set_loading) = signal(false);
    let (stats, set_stats) = signal(None::<SummaryStats>);
    // 「一度も検索していない」と「検索したが0件」を区別する
    let (searched_for, set_searched_for) = signal(None::<String>);

    let run_search = {
        let push_toast = push_toast.clone();
        move || {
            // 実行中の再検索はno-op
            if loading.get_untracked() {
                return;
            }

            let query = match validate_query(&patient_name.get_untracked()) {
                Ok(name) => name.to_string(),
                Err(err) => {
                    push_toast(Toast::warning(
                        "Please enter a patient name",
                        Some(err.to_string()),
                    ));
                    return;
                }
            };

            set_loading.set(true);
            let push_toast = push_toast.clone();
            spawn_local(async move {
                match api::reports::fetch_reports(api::DEFAULT_API_BASE, &query).await {
                    Ok(found) => {
                        push_toast(Toast::success(format!("Found {} reports", found.len()), None));
                        set_stats.set(SummaryStats::from_reports(&found));
                        set_reports.set(found);
                        set_searched_for.set(Some(query));
                    }
                    Err(err) => {
                        // 失敗時は直前のレポート集合と統計をそのまま残す
                        push_toast(Toast::error(
                            "Error fetching reports",
                            Some(err.to_string()),
                        ));
                    }
                }
                set_loading.set(false);
            });
        }
    };

    view! {
        <div class="dashboard">
            <div class="search-card">
                <h3>"🔍 Patient Lookup"</h3>
                <div class="search-row">
                    <div class="form-group">
                        <label for="search-patient-name">"Patient Name"</label>
                        <input
                            type="text"
                            id="search-patient-name"
                            placeholder="Enter patient name..."
                            prop:value=move || patient_name.get()
                            on:input=move |ev| {
                                set_patient_name.set(event_target_value(&ev));
                            }
                            on:keydown={
                                let run_search = run_search.clone();
                                move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        run_search();
                                    }
                                }
                            }
                        />
                    </div>
                    <button
                        class="btn btn-primary"
                        disabled=move || loading.get()
                        on:click={
                            let run_search = run_search.clone();
                            move |_| run_search()
                        }
                    >
                        {move || if loading.get() { "Loading..." } else { "Get Reports" }}
                    </button>
                </div>
            </div>

            <StatsCards stats=stats />

            <Show when=move || loading.get()>
                <div class="spinner-section">
                    <div class="spinner"></div>
                    <p>"Loading patient reports..."</p>
                </div>
            </Show>

            <Show when=move || !reports.get().is_empty()>
                <div class="reports-card">
                    <h3>"📋 Medical Reports"</h3>
                    <For
                        each={move || reports.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(index, _)| *index
                        children=move |(_, report): (usize, Report)| {
                            view! { <ReportCard report=report /> }
                        }
                    />
                </div>
            </Show>

            <Show when=move || {
                !loading.get() && reports.get().is_empty() && searched_for.get().is_some()
            }>
                <div class="empty-state">
                    <p class="empty-title">
                        {move || {
                            format!(
                                "📄 No reports found for \"{}\"",
                                searched_for.get().unwrap_or_default(),
                            )
                        }}
                    </p>
                    <p class="text-muted">"Try uploading some medical documents first"</p>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ReportCard(report: Report) -> impl IntoView {
    let severity = report.severity();
    let date = format_report_date(&report.report_date).to_string();
    let has_values = !report.lab_values.is_empty();

    view! {
        <div class="report-card">
            <div class="report-meta">
                <div>
                    <p class="report-date">"📅 " {date}</p>
                    <p class="text-muted">"Source: " {report.source_file.clone()}</p>
                </div>
                {report.category.clone().map(|category| {
                    view! {
                        <span class=format!("badge {}", severity.css_class())>{category}</span>
                    }
                })}
            </div>

            <Show when=move || has_values>
                <p class="report-values-label">"Lab Values:"</p>
            </Show>
            <div class="lab-values-grid">
                {report
                    .lab_values
                    .iter()
                    .map(|lab| {
                        let amount = match lab.unit.as_deref() {
                            Some(unit) if !unit.is_empty() => {
                                format!("{} {}", lab.value, unit)
                            }
                            _ => lab.value.clone(),
                        };
                        view! {
                            <div class="lab-value">
                                <p class="lab-test">{lab.test.clone()}</p>
                                <p class="lab-amount">{amount}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
