//! OCR結果テーブルコンポーネント

use leptos::prelude::*;
use ocr_viewer_common::{format_date, text_preview, OcrResult};

/// テーブル表示プレビューの最大文字数（2行に収まる程度）
const PREVIEW_MAX_CHARS: usize = 120;

/// 一覧のテーブル表示
///
/// 絞り込み済みの表示対象を受け取る。並び順は一覧共通の
/// 新しい順のまま
#[component]
pub fn ResultTable(results: Vec<OcrResult>) -> impl IntoView {
    view! {
        <table class="result-table">
            <thead>
                <tr>
                    <th>"File Name"</th>
                    <th>"Text"</th>
                    <th>"Date"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {results
                    .into_iter()
                    .map(|result| view! { <ResultRow result=result /> })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn ResultRow(result: OcrResult) -> impl IntoView {
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
        <tr>
            <td class="cell-file-name">{result.file_name.clone()}</td>
            <td class="cell-preview">{text_preview(&result.text, PREVIEW_MAX_CHARS)}</td>
            <td class="cell-date">{date_label}</td>
            <td>
                <button class="link-button" on:click=open_detail>
                    "View Details →"
                </button>
            </td>
        </tr>
    }
}
