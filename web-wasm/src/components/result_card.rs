//! OCR結果カードコンポーネント

use leptos::prelude::*;
use ocr_viewer_common::{format_date, OcrResult};

/// カードグリッド表示の1枚分
///
/// "View Details"は詳細ルートを新しいブラウジングコンテキストで開く
#[component]
pub fn ResultCard(result: OcrResult) -> impl IntoView {
    let detail_url = format!("/result/{}", result.id);
    let date_label = result
        .timestamp
        .map(|t| format_date(t.seconds))
        .unwrap_or_else(|| "-".to_string());

    let open_detail = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(&detail_url, "_blank");
        }
    };

    view! {
        <div class="result-card">
            <div class="result-card-body">
                <div class="result-card-head">
                    <h2 class="result-card-title">{result.file_name.clone()}</h2>
                    <span class="result-card-date">{date_label}</span>
                </div>
                <p class="result-card-preview">{result.text.clone()}</p>
            </div>
            <div class="result-card-footer">
                <button class="link-button" on:click=open_detail>
                    "View Details →"
                </button>
            </div>
        </div>
    }
}
