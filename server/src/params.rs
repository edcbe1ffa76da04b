//! Inbound query strings and the upstream parameter shapes built from them.
//!
//! Numeric query values are parsed leniently: leading integer digits win,
//! anything else (missing, garbage, zero) falls back to the route default.

use gargan_core::canonical::{ParamValue, QueryParams};
use serde::Deserialize;

use crate::constants::DEFAULT_SEARCH_CATEGORIES;

// -----------------------------------------------------------------------------
// Query strings
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeQuery {
    pub page: Option<String>,
    pub size: Option<String>,
    pub navigation_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingQuery {
    pub page: Option<String>,
    pub size: Option<String>,
    pub ranking_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayQuery {
    pub episode_id: Option<String>,
    pub category: Option<String>,
    pub definition: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    pub params: Option<String>,
    pub size: Option<String>,
    /// Comma-separated tag ids.
    pub cr_tag_ids: Option<String>,
}

/// Leading integer of `raw`, like a lenient `parseInt`.
pub fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Parsed integer, or `default` when absent, unparsable or zero.
pub fn int_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(leading_int)
        .filter(|v| *v != 0)
        .unwrap_or(default)
}

fn text_or<'a>(raw: Option<&'a str>, default: &'a str) -> &'a str {
    raw.filter(|s| !s.is_empty()).unwrap_or(default)
}

// -----------------------------------------------------------------------------
// Upstream shapes
// -----------------------------------------------------------------------------

pub fn home_params(q: &HomeQuery) -> QueryParams {
    QueryParams::new()
        .with("page", int_or(q.page.as_deref(), 1))
        .with("size", int_or(q.size.as_deref(), 10))
        .with("navigationId", int_or(q.navigation_id.as_deref(), 0))
}

pub fn ranking_body(q: &RankingQuery) -> ParamValue {
    ParamValue::map()
        .with("page", int_or(q.page.as_deref(), 1))
        .with("size", int_or(q.size.as_deref(), 20))
        .with("rankingType", text_or(q.ranking_type.as_deref(), "hot"))
}

/// Keyword search body. `keyword` is left out when absent.
pub fn search_body(q: &SearchQuery) -> ParamValue {
    let mut body = ParamValue::map();
    if let Some(keyword) = q.keyword.as_deref().filter(|k| !k.is_empty()) {
        body = body.with("keyword", keyword);
    }
    body.with("page", int_or(q.page.as_deref(), 1))
        .with("size", int_or(q.size.as_deref(), 20))
}

pub fn filter_body(q: &FilterQuery) -> ParamValue {
    let tags: Vec<ParamValue> = q
        .cr_tag_ids
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| match t.parse::<i64>() {
            Ok(n) => ParamValue::from(n),
            Err(_) => ParamValue::from(t),
        })
        .collect();

    ParamValue::map()
        .with("size", int_or(q.size.as_deref(), 18))
        .with("params", text_or(q.params.as_deref(), DEFAULT_SEARCH_CATEGORIES))
        .with("crTagIds", tags)
}

pub fn detail_params(content_id: &str, q: &DetailQuery) -> QueryParams {
    QueryParams::new()
        .with("contentId", content_id)
        .with("category", int_or(q.category.as_deref(), 2))
}

pub fn episodes_params(content_id: &str, q: &PageQuery) -> QueryParams {
    QueryParams::new()
        .with("contentId", content_id)
        .with("page", int_or(q.page.as_deref(), 1))
        .with("size", int_or(q.size.as_deref(), 50))
}

pub fn play_params(content_id: &str, q: &PlayQuery) -> QueryParams {
    let mut params = QueryParams::new().with("contentId", content_id);
    params.insert_opt("episodeId", q.episode_id.as_deref().and_then(leading_int));
    params
        .with("category", int_or(q.category.as_deref(), 2))
        .with("definition", text_or(q.definition.as_deref(), "HD"))
        .with("projection", false)
        .with("advanced", false)
        .with("reliableDef", 0)
}

pub fn shorts_body(q: &PageQuery) -> ParamValue {
    ParamValue::map()
        .with("page", int_or(q.page.as_deref(), 1))
        .with("size", int_or(q.size.as_deref(), 20))
}

pub fn shorts_detail_params(shorts_id: &str) -> QueryParams {
    QueryParams::new().with("shortsId", shorts_id)
}
