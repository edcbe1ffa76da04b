//! warp filter tree for the proxy.
//!
//! Path filters come before method filters so an unknown path rejects as
//! "not found" rather than "method not allowed".

use std::convert::Infallible;
use std::sync::Arc;

use serde_json::json;
use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use gargan_core::device::{DeviceContextPatch, GeoOverride};

use crate::constants::ROUTE_PREFIX;
use crate::error::ProxyError;
use crate::handlers::{self, Service};
use crate::params::{DetailQuery, FilterQuery, HomeQuery, PageQuery, PlayQuery, RankingQuery, SearchQuery};
use crate::service::MovieboxService;

fn with_service(svc: Service) -> impl Filter<Extract = (Service,), Error = Infallible> + Clone {
    warp::any().map(move || svc.clone())
}

fn api(svc: Service) -> BoxedFilter<(warp::reply::Json,)> {
    let base = || warp::path(ROUTE_PREFIX);
    let svc = with_service(svc);

    let health = base()
        .and(warp::path!("health"))
        .and(warp::get())
        .and(svc.clone())
        .and_then(handlers::health);
    let version = base()
        .and(warp::path!("version"))
        .and(warp::get())
        .and(svc.clone())
        .and_then(handlers::version);
    let home = base()
        .and(warp::path!("home"))
        .and(warp::get())
        .and(warp::query::<HomeQuery>())
        .and(svc.clone())
        .and_then(handlers::home);
    let navigation = base()
        .and(warp::path!("navigation"))
        .and(warp::get())
        .and(svc.clone())
        .and_then(handlers::navigation);
    let ranking = base()
        .and(warp::path!("ranking"))
        .and(warp::get())
        .and(warp::query::<RankingQuery>())
        .and(svc.clone())
        .and_then(handlers::ranking);

    let discover = health.or(version).unify().or(home).unify().or(navigation).unify().or(ranking).unify().boxed();

    let search = base()
        .and(warp::path!("search"))
        .and(warp::get())
        .and(warp::query::<SearchQuery>())
        .and(svc.clone())
        .and_then(handlers::search);
    let search_filter = base()
        .and(warp::path!("search" / "filter"))
        .and(warp::get())
        .and(warp::query::<FilterQuery>())
        .and(svc.clone())
        .and_then(handlers::search_filter);
    let search_album = base()
        .and(warp::path!("search" / "album"))
        .and(warp::get())
        .and(warp::query::<SearchQuery>())
        .and(svc.clone())
        .and_then(handlers::search_album);
    let search_star = base()
        .and(warp::path!("search" / "star"))
        .and(warp::get())
        .and(warp::query::<SearchQuery>())
        .and(svc.clone())
        .and_then(handlers::search_star);

    let searching = search.or(search_filter).unify().or(search_album).unify().or(search_star).unify().boxed();

    let detail = base()
        .and(warp::path!("detail" / String))
        .and(warp::get())
        .and(warp::query::<DetailQuery>())
        .and(svc.clone())
        .and_then(handlers::detail);
    let episodes = base()
        .and(warp::path!("episodes" / String))
        .and(warp::get())
        .and(warp::query::<PageQuery>())
        .and(svc.clone())
        .and_then(handlers::episodes);
    let play = base()
        .and(warp::path!("play" / String))
        .and(warp::get())
        .and(warp::query::<PlayQuery>())
        .and(svc.clone())
        .and_then(handlers::play);
    let shorts = base()
        .and(warp::path!("shorts"))
        .and(warp::get())
        .and(warp::query::<PageQuery>())
        .and(svc.clone())
        .and_then(handlers::shorts);
    let shorts_detail = base()
        .and(warp::path!("shorts" / String))
        .and(warp::get())
        .and(svc.clone())
        .and_then(handlers::shorts_detail);
    let channel_pop = base()
        .and(warp::path!("channel" / "pop"))
        .and(warp::get())
        .and(svc.clone())
        .and_then(handlers::channel_pop);

    let content = detail
        .or(episodes)
        .unify()
        .or(play)
        .unify()
        .or(shorts)
        .unify()
        .or(shorts_detail)
        .unify()
        .or(channel_pop)
        .unify()
        .boxed();

    let context_get = base()
        .and(warp::path!("context"))
        .and(warp::get())
        .and(svc.clone())
        .and_then(handlers::get_context);
    let context_set = base()
        .and(warp::path!("context"))
        .and(warp::post())
        .and(warp::body::json::<DeviceContextPatch>())
        .and(svc.clone())
        .and_then(handlers::set_context);
    let context_reset = base()
        .and(warp::path!("context" / "reset"))
        .and(warp::post())
        .and(svc.clone())
        .and_then(handlers::reset_context);
    let geo_set = base()
        .and(warp::path!("context" / "geo"))
        .and(warp::post())
        .and(warp::body::json::<GeoOverride>())
        .and(svc.clone())
        .and_then(handlers::set_geo);
    let geo_clear = base()
        .and(warp::path!("context" / "geo"))
        .and(warp::delete())
        .and(svc)
        .and_then(handlers::clear_geo);

    let admin = context_get
        .or(context_set)
        .unify()
        .or(context_reset)
        .unify()
        .or(geo_set)
        .unify()
        .or(geo_clear)
        .unify()
        .boxed();

    let index = warp::path::end().and(warp::get()).and_then(handlers::index);

    index.or(discover).unify().or(searching).unify().or(content).unify().or(admin).unify().boxed()
}

/// Full application filter, rejections rendered as JSON.
pub fn routes(service: MovieboxService, enable_cors: bool) -> BoxedFilter<(Box<dyn Reply>,)> {
    let app = api(Arc::new(service))
        .with(warp::trace::request())
        .recover(handle_rejection)
        .map(|reply| Box::new(reply) as Box<dyn Reply>);

    if !enable_cors {
        return app.boxed();
    }

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type"]);
    app.with(cors)
        .map(|reply| Box::new(reply) as Box<dyn Reply>)
        .boxed()
}

/// Render every rejection as `{"success": false, "error": ...}`.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, body) = if let Some(e) = err.find::<ProxyError>() {
        (e.status_code(), e.to_body())
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, json!({ "success": false, "error": "Endpoint not found" }))
    } else if let Some(e) = err.find::<warp::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, json!({ "success": false, "error": e.to_string() }))
    } else if let Some(e) = err.find::<warp::reject::InvalidQuery>() {
        (StatusCode::BAD_REQUEST, json!({ "success": false, "error": e.to_string() }))
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, json!({ "success": false, "error": "Method not allowed" }))
    } else {
        tracing::error!(?err, "unhandled rejection");
        (StatusCode::INTERNAL_SERVER_ERROR, json!({ "success": false, "error": "Internal server error" }))
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}
