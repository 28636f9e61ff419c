//! Firestore REST API連携
//!
//! DocumentStoreポートのfetch実装。ビューのアクティベーションごとに
//! ちょうど1回のリクエストを発行する（リトライ・タイムアウト・
//! キャンセルなし）。

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use ocr_viewer_common::firestore::{to_ocr_result, FirestoreDocument, ListDocumentsResponse};
use ocr_viewer_common::{DocumentStore, Error, OcrResult, Result};

use crate::config;

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Firestore RESTクライアント
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    project_id: String,
    api_key: String,
}

impl FirestoreClient {
    pub fn new(project_id: &str, api_key: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// 既定の接続設定でクライアントを作る
    pub fn from_config() -> Self {
        Self::new(config::PROJECT_ID, config::API_KEY)
    }

    fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}?key={}&pageSize={}",
            FIRESTORE_BASE_URL,
            self.project_id,
            collection,
            self.api_key,
            config::LIST_PAGE_SIZE
        )
    }

    // FirestoreのドキュメントIDはURLセーフな英数字のため追加エンコード不要
    fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}/{}?key={}",
            FIRESTORE_BASE_URL, self.project_id, collection, id, self.api_key
        )
    }
}

#[async_trait(?Send)]
impl DocumentStore for FirestoreClient {
    async fn list_all(&self, collection: &str) -> Result<Vec<OcrResult>> {
        let resp = fetch_response(&self.documents_url(collection)).await?;
        if !resp.ok() {
            return Err(Error::Fetch(format!("API error: {}", resp.status())));
        }

        let json = response_json(&resp).await?;
        let parsed: ListDocumentsResponse =
            serde_wasm_bindgen::from_value(json).map_err(|e| Error::Decode(e.to_string()))?;

        Ok(parsed.documents.iter().map(to_ocr_result).collect())
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<OcrResult> {
        let resp = fetch_response(&self.document_url(collection, id)).await?;
        if resp.status() == 404 {
            return Err(Error::NotFound(id.to_string()));
        }
        if !resp.ok() {
            return Err(Error::Fetch(format!("API error: {}", resp.status())));
        }

        let json = response_json(&resp).await?;
        let doc: FirestoreDocument =
            serde_wasm_bindgen::from_value(json).map_err(|e| Error::Decode(e.to_string()))?;

        Ok(to_ocr_result(&doc))
    }
}

/// GETリクエストを発行する
async fn fetch_response(url: &str) -> Result<Response> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Fetch("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;

    resp_value.dyn_into::<Response>().map_err(js_error)
}

async fn response_json(resp: &Response) -> Result<JsValue> {
    JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)
}

fn js_error(value: JsValue) -> Error {
    Error::Fetch(format!("{:?}", value))
}
