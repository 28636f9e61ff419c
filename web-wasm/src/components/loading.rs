//! ローディング表示コンポーネント

use leptos::prelude::*;

/// フェッチが確定（成功・失敗とも）するまで表示するスピナー
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner"></div>
        </div>
    }
}
