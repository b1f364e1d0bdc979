//! サマリ統計カードコンポーネント

use leptos::prelude::*;
use medscan_common::SummaryStats;

#[component]
pub fn StatsCards(stats: ReadSignal<Option<SummaryStats>>) -> impl IntoView {
    view! {
        <Show when=move || stats.get().is_some()>
            <div class="stats-grid">
                <div class="stat-card">
                    <p class="stat-label">"Total Reports"</p>
                    <p class="stat-number">
                        {move || stats.get().map(|s| s.total_reports).unwrap_or(0)}
                    </p>
                    <p class="stat-help">"Medical documents"</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">"Lab Tests"</p>
                    <p class="stat-number">
                        {move || stats.get().map(|s| s.total_tests).unwrap_or(0)}
                    </p>
                    <p class="stat-help">"Total values extracted"</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">"Unique Tests"</p>
                    <p class="stat-number">
                        {move || stats.get().map(|s| s.unique_tests).unwrap_or(0)}
                    </p>
                    <p class="stat-help">"Different test types"</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">"Avg per Report"</p>
                    <p class="stat-number">
                        {move || {
                            stats
                                .get()
                                .map(|s| format!("{:.1}", s.avg_values_per_report))
                                .unwrap_or_default()
                        }}
                    </p>
                    <p class="stat-help">"Values per document"</p>
                </div>
            </div>
        </Show>
    }
}
