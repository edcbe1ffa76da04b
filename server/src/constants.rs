//! Server-side constants: upstream endpoints, service identity, defaults.

pub const SERVICE_NAME: &str = "MovieBox HD API";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Route prefix for every proxied endpoint.
pub const ROUTE_PREFIX: &str = "moviebox";

/// Production upstream.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.gargan.video";

/// Play URL key published by `config/version/info/get` (base64, 24 bytes decoded).
pub const DEFAULT_PLAY_URL_KEY: &str = "dlwsih6ut350l3j5ivee9ilvnupdhbjf";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Upstream paths, relative to the base URL.
pub mod endpoints {
    pub const VERSION_INFO: &str = "/gargan/config/version/info/get";
    pub const HOME: &str = "/gargan/homePage/getHome";
    pub const NAVIGATION: &str = "/gargan/homePage/navigationBar";
    pub const RANKING: &str = "/gargan/recommendRanking/more/v3";
    pub const SEARCH: &str = "/gargan/search/v1/search";
    pub const SEARCH_ALBUM: &str = "/aggregation/search/searchAlbum";
    pub const SEARCH_STAR: &str = "/aggregation/search/searchStar";
    pub const DETAIL: &str = "/gargan/movieDrama/getMovieDramaPartAttr";
    pub const EPISODES: &str = "/gargan/movieDrama/getEpisodeList";
    pub const PLAY_INFO: &str = "/gargan/media/playInfo";
    pub const SHORTS: &str = "/gargan/shorts/getShortsRecommendList";
    pub const SHORTS_DETAIL: &str = "/gargan/shorts/getShortsDetail";
    pub const CHANNEL_POP: &str = "/cms/app/channel/recommend/getPop";
}

/// Category filter the app sends from the search tab.
pub const DEFAULT_SEARCH_CATEGORIES: &str = "TV,SETI,VARIETY,TALK,COMIC,DOCUMENTARY";
