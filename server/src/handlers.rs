//! Request handlers. Success is `{"success": true, "data": ...}`; failures are
//! rejected with `ProxyError` and rendered by `routes::handle_rejection`.

use std::sync::Arc;

use gargan_core::device::{DeviceContextPatch, GeoOverride};
use gargan_core::utils::short_id;
use serde_json::{json, Value};
use tracing::info;
use warp::reply::Json;
use warp::Rejection;

use crate::constants::{SERVICE_NAME, SERVICE_VERSION};
use crate::error::Result;
use crate::params::{DetailQuery, FilterQuery, HomeQuery, PageQuery, PlayQuery, RankingQuery, SearchQuery};
use crate::service::MovieboxService;

pub type Service = Arc<MovieboxService>;

fn ok(data: Value) -> Json {
    warp::reply::json(&json!({ "success": true, "data": data }))
}

fn reply(result: Result<Value>) -> std::result::Result<Json, Rejection> {
    result.map(ok).map_err(warp::reject::custom)
}

fn serialized<T: serde::Serialize>(value: &T) -> std::result::Result<Json, Rejection> {
    reply(serde_json::to_value(value).map_err(Into::into))
}

// ## Info

pub async fn index() -> std::result::Result<Json, Rejection> {
    Ok(warp::reply::json(&json!({
        "name": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "endpoints": {
            "health": "GET /moviebox/health",
            "version": "GET /moviebox/version",
            "home": "GET /moviebox/home",
            "navigation": "GET /moviebox/navigation",
            "ranking": "GET /moviebox/ranking",
            "search": "GET /moviebox/search?keyword=...",
            "searchFilter": "GET /moviebox/search/filter",
            "searchAlbum": "GET /moviebox/search/album?keyword=...",
            "searchStar": "GET /moviebox/search/star?keyword=...",
            "detail": "GET /moviebox/detail/:contentId",
            "episodes": "GET /moviebox/episodes/:contentId",
            "play": "GET /moviebox/play/:contentId",
            "shorts": "GET /moviebox/shorts",
            "shortsDetail": "GET /moviebox/shorts/:shortsId",
            "channelPop": "GET /moviebox/channel/pop",
            "context": "GET|POST /moviebox/context",
        },
    })))
}

pub async fn health(svc: Service) -> std::result::Result<Json, Rejection> {
    let client = svc.client();
    let context = client.store().get();
    Ok(warp::reply::json(&json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "baseUrl": client.base_url().as_str().trim_end_matches('/'),
        "deviceId": context.device_id,
        "language": context.language,
    })))
}

pub async fn version(svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.version_info().await)
}

pub async fn channel_pop(svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.channel_pop().await)
}

// ## Home & discover

pub async fn home(q: HomeQuery, svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.home(&q).await)
}

pub async fn navigation(svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.navigation().await)
}

pub async fn ranking(q: RankingQuery, svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.ranking(&q).await)
}

// ## Search

pub async fn search(q: SearchQuery, svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.search(&q).await)
}

pub async fn search_filter(q: FilterQuery, svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.search_filter(&q).await)
}

pub async fn search_album(q: SearchQuery, svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.search_album(&q).await)
}

pub async fn search_star(q: SearchQuery, svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.search_star(&q).await)
}

// ## Details & playback

pub async fn detail(content_id: String, q: DetailQuery, svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.detail(&content_id, &q).await)
}

pub async fn episodes(content_id: String, q: PageQuery, svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.episodes(&content_id, &q).await)
}

pub async fn play(content_id: String, q: PlayQuery, svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.play_info(&content_id, &q).await)
}

// ## Shorts

pub async fn shorts(q: PageQuery, svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.shorts(&q).await)
}

pub async fn shorts_detail(shorts_id: String, svc: Service) -> std::result::Result<Json, Rejection> {
    reply(svc.shorts_detail(&shorts_id).await)
}

// ## Device context (admin)

pub async fn get_context(svc: Service) -> std::result::Result<Json, Rejection> {
    serialized(&svc.client().store().get())
}

pub async fn set_context(patch: DeviceContextPatch, svc: Service) -> std::result::Result<Json, Rejection> {
    let context = svc.client().store().set(patch);
    info!(device = short_id(&context.device_id), "device context patched");
    serialized(&context)
}

pub async fn reset_context(svc: Service) -> std::result::Result<Json, Rejection> {
    serialized(&svc.client().store().reset())
}

pub async fn set_geo(geo: GeoOverride, svc: Service) -> std::result::Result<Json, Rejection> {
    let context = svc.client().store().set_geo(geo);
    info!(iso = context.geo.as_ref().map(|g| g.iso_code.as_str()).unwrap_or(""), "geo override set");
    serialized(&context)
}

pub async fn clear_geo(svc: Service) -> std::result::Result<Json, Rejection> {
    serialized(&svc.client().store().clear_geo())
}
