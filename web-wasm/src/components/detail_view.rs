//! 詳細ビュー
//!
//! ルートパラメータのIDで1件だけ取得して全フィールドを表示する。
//! 一覧ビューの状態には依存しない（IDで再取得する）。
//!
//! 該当なしと取得エラーはどちらもNotFound表示（取得エラーのみログ）。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use ocr_viewer_common::{format_date_time, DetailState, DocumentStore, OcrResult};

use crate::api::firestore::FirestoreClient;
use crate::components::loading::LoadingIndicator;
use crate::config;

#[component]
pub fn DetailView() -> impl IntoView {
    let params = use_params_map();
    let (state, set_state) = signal(DetailState::Loading);

    let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    spawn_local(async move {
        let client = FirestoreClient::from_config();
        let fetched = client.get_by_id(config::COLLECTION, &id).await;
        if let Err(e) = &fetched {
            if !e.is_not_found() {
                gloo::console::error!(format!("Error fetching OCR result: {e}"));
            }
        }
        set_state.set(DetailState::from_fetch(fetched));
    });

    view! {
        <div class="page detail-page">
            {move || match state.get() {
                DetailState::Loading => view! { <LoadingIndicator /> }.into_any(),
                DetailState::NotFound => view! { <NotFoundView /> }.into_any(),
                DetailState::Found(result) => {
                    view! { <ResultDetail result=result /> }.into_any()
                }
            }}
        </div>
    }
}

/// 該当レコードなし（一覧への導線だけ残す）
#[component]
fn NotFoundView() -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <div class="not-found">
            <h1>"Result not found"</h1>
            <button
                class="link-button"
                on:click=move |_| navigate("/", Default::default())
            >
                "← Back to Home"
            </button>
        </div>
    }
}

#[component]
fn ResultDetail(result: OcrResult) -> impl IntoView {
    let navigate = use_navigate();
    let created_label = result
        .created_at
        .map(|t| format_date_time(t.seconds))
        .unwrap_or_else(|| "-".to_string());

    view! {
        <div class="detail-content">
            <div class="detail-header">
                <button
                    class="link-button"
                    on:click=move |_| navigate("/", Default::default())
                >
                    "← Back to Home"
                </button>
                <h1 class="detail-title">{result.file_name.clone()}</h1>
                <p class="detail-created-at">{created_label}</p>
            </div>

            <div class="detail-panel">
                <div class="metadata-grid">
                    <MetadataField label="User Name" value=result.user_name.clone() />
                    <MetadataField label="Document Name" value=result.document_name.clone() />
                    <MetadataField label="Facility Name" value=result.facility_name.clone() />
                    <MetadataField label="Date" value=result.date.clone() />
                </div>

                <div class="detail-text-section">
                    <h3>"Text"</h3>
                    <p class="detail-text">{result.text.clone()}</p>
                </div>

                <div class="preview-section">
                    <h3>"Document Preview"</h3>
                    <iframe
                        src=result.image_url.clone()
                        class="preview-frame"
                        title="PDF Preview"
                    ></iframe>
                </div>

                <div class="download-section">
                    <a
                        class="btn btn-primary"
                        href=result.download_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Download PDF"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MetadataField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="metadata-field">
            <h3 class="metadata-label">{label}</h3>
            <p class="metadata-value">{value}</p>
        </div>
    }
}
