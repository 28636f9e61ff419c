//! メインアプリケーションコンポーネント
//!
//! ルーティング:
//! - `/`            一覧ビュー
//! - `/result/:id`  詳細ビュー
//!
//! 両ルートは独立したエントリポイントで、詳細ビューは
//! 一覧ビューのメモリ上の状態に依存しない（IDで再取得する）

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::detail_view::DetailView;
use crate::components::listing_view::ListingView;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="container">
                <Routes fallback=|| view! { <div class="empty-state">"Not found."</div> }>
                    <Route path=path!("/") view=ListingView />
                    <Route path=path!("/result/:id") view=DetailView />
                </Routes>
            </main>
        </Router>
    }
}
