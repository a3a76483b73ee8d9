//! Route handlers.
//!
//! Each handler maps one local route onto one upstream call (or, for the
//! two composite routes, three concurrent calls merged into a single
//! object). Inbound validation happens in the extractors; by the time a
//! handler body runs, its parameters are known-good.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use crate::http::error::ApiError;
use crate::http::params::{HoldersParams, KlineParams, PriceRequest, RanksParams, SearchParams};
use crate::http::server::AppState;
use crate::normalize::{self, Fallback};

/// Service banner.
pub async fn home() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "ave-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /tokens/search?keyword=&chain=` → upstream `/tokens`.
pub async fn search_tokens(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .upstream
        .get(
            "search_tokens",
            "/tokens",
            &[("keyword", Some(params.keyword)), ("chain", params.chain)],
        )
        .await;
    Ok(Json(normalize::unwrap(result)?))
}

/// `GET /tokens/trending` → upstream `/tokens/trending`.
pub async fn trending_tokens(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let result = state
        .upstream
        .get("trending_tokens", "/tokens/trending", &[])
        .await;
    Ok(Json(normalize::unwrap(result)?))
}

/// `GET /tokens/{id}` → upstream `/tokens/{id}`.
pub async fn token_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .upstream
        .get("token_details", &format!("/tokens/{id}"), &[])
        .await;
    Ok(Json(normalize::unwrap(result)?))
}

/// `GET /tokens/{id}/holders?count=` → upstream `/tokens/top100/{id}`.
///
/// Upstream always returns the full top-100 list; the enumerated `count`
/// is applied client-side.
pub async fn token_holders(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<HoldersParams>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .upstream
        .get("token_holders", &format!("/tokens/top100/{id}"), &[])
        .await;
    let holders = normalize::unwrap(result)?;
    Ok(Json(normalize::truncate(holders, params.count.get())))
}

/// `GET /tokens/{id}/risk` → upstream `/contracts/{id}`.
pub async fn contract_risk(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .upstream
        .get("contract_risk", &format!("/contracts/{id}"), &[])
        .await;
    Ok(Json(normalize::unwrap(result)?))
}

/// `GET /tokens/{id}/transactions` → upstream `/txs/{id}`.
pub async fn token_transactions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .upstream
        .get("token_transactions", &format!("/txs/{id}"), &[])
        .await;
    Ok(Json(normalize::unwrap(result)?))
}

/// `GET /klines/pair/{id}?size=` → upstream `/klines/pair/{id}`.
pub async fn pair_klines(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<KlineParams>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .upstream
        .get("pair_klines", &format!("/klines/pair/{id}"), &[])
        .await;
    let points = normalize::unwrap(result)?;
    Ok(Json(normalize::truncate(points, params.size.get())))
}

/// `GET /klines/token/{id}?size=` → upstream `/klines/token/{id}`.
pub async fn token_klines(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<KlineParams>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .upstream
        .get("token_klines", &format!("/klines/token/{id}"), &[])
        .await;
    let points = normalize::unwrap(result)?;
    Ok(Json(normalize::truncate(points, params.size.get())))
}

/// `GET /ranks?topic=` → upstream `/ranks`.
pub async fn ranks(
    State(state): State<AppState>,
    Query(params): Query<RanksParams>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .upstream
        .get("ranks", "/ranks", &[("topic", params.topic)])
        .await;
    Ok(Json(normalize::unwrap(result)?))
}

/// `GET /ranks/topics` → upstream `/ranks/topics`.
pub async fn rank_topics(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let result = state.upstream.get("rank_topics", "/ranks/topics", &[]).await;
    Ok(Json(normalize::unwrap(result)?))
}

/// `GET /chains` → upstream `/supported_chains`.
pub async fn supported_chains(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let result = state
        .upstream
        .get("supported_chains", "/supported_chains", &[])
        .await;
    Ok(Json(normalize::unwrap(result)?))
}

/// `POST /tokens/price` → upstream `POST /tokens/price`.
pub async fn token_price(
    State(state): State<AppState>,
    Json(body): Json<PriceRequest>,
) -> Result<Json<Value>, ApiError> {
    let payload = json!({ "token_ids": body.token_ids });
    let result = state
        .upstream
        .post("token_price", "/tokens/price", &payload)
        .await;
    Ok(Json(normalize::unwrap(result)?))
}

/// `GET /tokens/{id}/summary` — composite of details, top holders, and
/// contract risk.
///
/// The three constituent calls are independent and run concurrently. A
/// failing constituent degrades to its empty fallback; the composite is
/// always a 200.
pub async fn token_summary(State(state): State<AppState>, Path(id): Path<String>) -> Json<Value> {
    let details_path = format!("/tokens/{id}");
    let holders_path = format!("/tokens/top100/{id}");
    let risk_path = format!("/contracts/{id}");

    let (details, holders, risk) = tokio::join!(
        state.upstream.get("token_summary.details", &details_path, &[]),
        state.upstream.get("token_summary.holders", &holders_path, &[]),
        state.upstream.get("token_summary.risk", &risk_path, &[]),
    );

    let merged = normalize::compose([
        ("token_info", details, Fallback::Object),
        ("top_holders", holders, Fallback::Array),
        ("risk_analysis", risk, Fallback::Object),
    ]);
    Json(Value::Object(merged))
}

/// `GET /tokens/{id}/info` — composite of details, top holders, and the
/// token kline chart.
pub async fn token_info(State(state): State<AppState>, Path(id): Path<String>) -> Json<Value> {
    let details_path = format!("/tokens/{id}");
    let holders_path = format!("/tokens/top100/{id}");
    let chart_path = format!("/klines/token/{id}");

    let (details, holders, chart) = tokio::join!(
        state.upstream.get("token_info.details", &details_path, &[]),
        state.upstream.get("token_info.holders", &holders_path, &[]),
        state.upstream.get("token_info.chart", &chart_path, &[]),
    );

    let merged = normalize::compose([
        ("token_info", details, Fallback::Object),
        ("top_holders", holders, Fallback::Array),
        ("price_chart", chart, Fallback::Array),
    ]);
    Json(Value::Object(merged))
}
