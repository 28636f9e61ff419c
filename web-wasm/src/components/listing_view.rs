//! 一覧ビュー
//!
//! アクティベーション時にコレクション全件を1回だけ取得し、
//! 新しい順に表示する。表示形態はカードグリッドとテーブルの2種で、
//! ファイル名のライブ検索はテーブル表示のみが持つ。
//!
//! 取得失敗は0件と同じ空表示に落とす（エラーバナーは出さない）。

use leptos::prelude::*;
use leptos::task::spawn_local;
use ocr_viewer_common::{DocumentStore, ListingState, OcrResult};

use crate::api::firestore::FirestoreClient;
use crate::components::loading::LoadingIndicator;
use crate::components::result_card::ResultCard;
use crate::components::result_table::ResultTable;
use crate::config;

/// 一覧の表示形態
#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Cards,
    Table,
}

#[component]
pub fn ListingView() -> impl IntoView {
    let (state, set_state) = signal(ListingState::Loading);
    let (view_mode, set_view_mode) = signal(ViewMode::Cards);

    // アクティベーションごとに1回だけ取得する（キャッシュなし）
    spawn_local(async move {
        let client = FirestoreClient::from_config();
        let fetched = client.list_all(config::COLLECTION).await;
        if let Err(e) = &fetched {
            gloo::console::error!(format!("Error fetching OCR results: {e}"));
        }
        set_state.set(ListingState::from_fetch(fetched));
    });

    view! {
        <div class="page listing-page">
            <h1 class="page-title">"OCR Results"</h1>

            {move || {
                if state.with(|s| s.is_loading()) {
                    return view! { <LoadingIndicator /> }.into_any();
                }
                if state.with(|s| *s == ListingState::Empty) {
                    return view! {
                        <div class="empty-state">"No OCR results found."</div>
                    }
                    .into_any();
                }

                let mode = view_mode.get();
                let presentation = match mode {
                    ViewMode::Cards => {
                        // カードグリッドは常に全件（フィルタはテーブル表示のみ）
                        let results = state.with(|s| s.all().to_vec());
                        view! {
                            <div class="result-grid">
                                {results
                                    .into_iter()
                                    .map(|result| view! { <ResultCard result=result /> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                    ViewMode::Table => {
                        let results: Vec<OcrResult> =
                            state.with(|s| s.visible().into_iter().cloned().collect());
                        view! { <ResultTable results=results /> }.into_any()
                    }
                };

                view! {
                    <div class="listing-content">
                        <div class="listing-toolbar">
                            <div class="view-toggle">
                                <button
                                    class="btn btn-small"
                                    class:active=move || view_mode.get() == ViewMode::Cards
                                    on:click=move |_| set_view_mode.set(ViewMode::Cards)
                                >
                                    "Cards"
                                </button>
                                <button
                                    class="btn btn-small"
                                    class:active=move || view_mode.get() == ViewMode::Table
                                    on:click=move |_| set_view_mode.set(ViewMode::Table)
                                >
                                    "Table"
                                </button>
                            </div>
                            {(mode == ViewMode::Table)
                                .then(|| {
                                    view! {
                                        <input
                                            type="text"
                                            class="search-box"
                                            placeholder="Search by file name..."
                                            prop:value=move || {
                                                state.with(|s| s.query().to_string())
                                            }
                                            on:input=move |ev| {
                                                let query = event_target_value(&ev);
                                                set_state.update(|s| s.set_query(&query));
                                            }
                                        />
                                    }
                                })}
                        </div>
                        {presentation}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
