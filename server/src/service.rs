//! One function per upstream endpoint.
//!
//! Upstream JSON is returned untouched; shaping happens in `params`.

use gargan_core::canonical::{ParamValue, QueryParams};
use serde_json::Value;

use crate::client::GarganClient;
use crate::constants::endpoints as ep;
use crate::error::{ProxyError, Result};
use crate::params::{
    detail_params, episodes_params, filter_body, home_params, play_params, ranking_body,
    search_body, shorts_body, shorts_detail_params, DetailQuery, FilterQuery, HomeQuery,
    PageQuery, PlayQuery, RankingQuery, SearchQuery,
};

#[derive(Clone)]
pub struct MovieboxService {
    client: GarganClient,
}

impl MovieboxService {
    pub fn new(client: GarganClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GarganClient {
        &self.client
    }

    // ## Config

    pub async fn version_info(&self) -> Result<Value> {
        self.client.get(ep::VERSION_INFO, &QueryParams::new()).await
    }

    pub async fn channel_pop(&self) -> Result<Value> {
        self.client.post(ep::CHANNEL_POP, &ParamValue::map()).await
    }

    // ## Home & discover

    pub async fn home(&self, q: &HomeQuery) -> Result<Value> {
        self.client.get(ep::HOME, &home_params(q)).await
    }

    pub async fn navigation(&self) -> Result<Value> {
        self.client.get(ep::NAVIGATION, &QueryParams::new()).await
    }

    pub async fn ranking(&self, q: &RankingQuery) -> Result<Value> {
        self.client.post(ep::RANKING, &ranking_body(q)).await
    }

    // ## Search

    /// Keyword search. Often geo-restricted upstream (error `FDLSxl1000129`).
    pub async fn search(&self, q: &SearchQuery) -> Result<Value> {
        if q.keyword.as_deref().map_or(true, str::is_empty) {
            return Err(ProxyError::BadRequest("Keyword is required".into()));
        }
        self.client.post(ep::SEARCH, &search_body(q)).await
    }

    pub async fn search_filter(&self, q: &FilterQuery) -> Result<Value> {
        self.client.post(ep::SEARCH, &filter_body(q)).await
    }

    pub async fn search_album(&self, q: &SearchQuery) -> Result<Value> {
        self.client.post(ep::SEARCH_ALBUM, &search_body(q)).await
    }

    pub async fn search_star(&self, q: &SearchQuery) -> Result<Value> {
        self.client.post(ep::SEARCH_STAR, &search_body(q)).await
    }

    // ## Details & playback

    pub async fn detail(&self, content_id: &str, q: &DetailQuery) -> Result<Value> {
        require("Content ID", content_id)?;
        self.client.get(ep::DETAIL, &detail_params(content_id, q)).await
    }

    pub async fn episodes(&self, content_id: &str, q: &PageQuery) -> Result<Value> {
        require("Content ID", content_id)?;
        self.client.get(ep::EPISODES, &episodes_params(content_id, q)).await
    }

    pub async fn play_info(&self, content_id: &str, q: &PlayQuery) -> Result<Value> {
        require("Content ID", content_id)?;
        self.client.get(ep::PLAY_INFO, &play_params(content_id, q)).await
    }

    // ## Shorts

    pub async fn shorts(&self, q: &PageQuery) -> Result<Value> {
        self.client.post(ep::SHORTS, &shorts_body(q)).await
    }

    pub async fn shorts_detail(&self, shorts_id: &str) -> Result<Value> {
        require("Shorts ID", shorts_id)?;
        self.client.get(ep::SHORTS_DETAIL, &shorts_detail_params(shorts_id)).await
    }
}

fn require(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProxyError::BadRequest(format!("{} is required", what)));
    }
    Ok(())
}
