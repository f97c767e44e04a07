//! Static help content: FAQ search and the accepted-items guide.

pub mod faq;
pub mod items;

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

pub use faq::{FaqCatalog, FaqEntry, FaqPage, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use items::{Acceptance, ItemGroup, ItemGuide, ItemMatch, PackingTip};

/// Shown with the item guide; amounts are only final after inspection.
pub const SETTLEMENT_NOTICE: &str =
    "최종 정산 금액은 검수 후 확정되며, 수거 완료 후 3~5일 이내에 입금됩니다.";

#[derive(Debug, Clone, Default)]
pub struct GuideContent {
    pub faq: FaqCatalog,
    pub items: ItemGuide,
}

pub fn guide_router(content: Arc<GuideContent>) -> Router {
    Router::new()
        .route("/api/v1/faq", get(faq_handler))
        .route("/api/v1/guide/items", get(items_handler))
        .with_state(content)
}

#[derive(Debug, Deserialize)]
struct FaqQuery {
    #[serde(default)]
    q: String,
    #[serde(default = "first_page")]
    page: usize,
    #[serde(default = "default_page_size")]
    per_page: usize,
}

fn first_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize)]
struct ItemQuery {
    #[serde(default)]
    q: Option<String>,
}

async fn faq_handler(
    State(content): State<Arc<GuideContent>>,
    Query(query): Query<FaqQuery>,
) -> Response {
    let page = content.faq.page(&query.q, query.page, query.per_page);
    (StatusCode::OK, Json(page)).into_response()
}

async fn items_handler(
    State(content): State<Arc<GuideContent>>,
    Query(query): Query<ItemQuery>,
) -> Response {
    let payload = match query.q.as_deref() {
        Some(term) => json!({
            "query": term.trim(),
            "matches": content.items.lookup(term),
        }),
        None => json!({
            "groups": content.items.groups,
            "packing": content.items.packing,
            "notice": SETTLEMENT_NOTICE,
        }),
    };
    (StatusCode::OK, Json(payload)).into_response()
}
