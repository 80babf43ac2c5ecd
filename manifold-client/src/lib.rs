//! HTTP client for the Manifold Markets v0 API.

pub mod types;

use anyhow::Context;
use anyhow::Result;
use mcp_servers_common::http::decode_json;
use mcp_servers_common::http::discard_body;
use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::header::AUTHORIZATION;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::types::AddCommentRequest;
use crate::types::AddLiquidityRequest;
use crate::types::Bet;
use crate::types::CloseMarketRequest;
use crate::types::Comment;
use crate::types::CommentsQuery;
use crate::types::ContractMetric;
use crate::types::CreateMarketRequest;
use crate::types::FullMarket;
use crate::types::ListBetsQuery;
use crate::types::LiteMarket;
use crate::types::PlaceBetRequest;
use crate::types::PositionsQuery;
use crate::types::ResolveMarketRequest;
use crate::types::SearchMarketsQuery;
use crate::types::SellSharesRequest;
use crate::types::SendManaRequest;
use crate::types::User;

pub const DEFAULT_BASE_URL: &str = "https://api.manifold.markets";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct ClientOptions {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ClientOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Clone, Debug)]
pub struct ManifoldClient {
    http: reqwest::Client,
    base_url: String,
}

impl ManifoldClient {
    pub fn new(opts: ClientOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Key {}", opts.api_key))
            .context("Manifold API key is not a valid header value")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        let http = reqwest::Client::builder()
            .timeout(opts.timeout)
            .default_headers(headers)
            .build()
            .context("building Manifold HTTP client")?;
        Ok(Self {
            http,
            base_url: opts.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn search_markets(&self, query: &SearchMarketsQuery) -> Result<Vec<LiteMarket>> {
        let req = self.request(Method::GET, "/v0/search-markets").query(query);
        let markets: Vec<LiteMarket> = send_json(req).await.context("searching markets")?;
        debug!(count = markets.len(), "searched markets");
        Ok(markets)
    }

    /// Accepts a market id or slug.
    pub async fn get_market(&self, market_id: &str) -> Result<FullMarket> {
        let req = self.request(Method::GET, &format!("/v0/market/{market_id}"));
        send_json(req)
            .await
            .with_context(|| format!("getting market {market_id}"))
    }

    pub async fn get_user(&self, username: &str) -> Result<User> {
        let req = self.request(Method::GET, &format!("/v0/user/{username}"));
        send_json(req)
            .await
            .with_context(|| format!("getting user {username}"))
    }

    pub async fn get_me(&self) -> Result<User> {
        let req = self.request(Method::GET, "/v0/me");
        send_json(req).await.context("getting authenticated user")
    }

    pub async fn list_bets(&self, query: &ListBetsQuery) -> Result<Vec<Bet>> {
        let req = self.request(Method::GET, "/v0/bets").query(query);
        send_json(req).await.context("listing bets")
    }

    pub async fn get_comments(&self, query: &CommentsQuery) -> Result<Vec<Comment>> {
        let req = self.request(Method::GET, "/v0/comments").query(query);
        send_json(req).await.context("getting comments")
    }

    pub async fn get_positions(
        &self,
        market_id: &str,
        query: &PositionsQuery,
    ) -> Result<Vec<ContractMetric>> {
        let req = self
            .request(Method::GET, &format!("/v0/market/{market_id}/positions"))
            .query(query);
        send_json(req)
            .await
            .with_context(|| format!("getting positions for market {market_id}"))
    }

    pub async fn place_bet(&self, body: &PlaceBetRequest) -> Result<Bet> {
        let req = self.request(Method::POST, "/v0/bet").json(body);
        send_json(req).await.context("placing bet")
    }

    pub async fn sell_shares(&self, market_id: &str, body: &SellSharesRequest) -> Result<Bet> {
        let req = self
            .request(Method::POST, &format!("/v0/market/{market_id}/sell"))
            .json(body);
        send_json(req)
            .await
            .with_context(|| format!("selling shares in market {market_id}"))
    }

    /// Cancels an unfilled limit order.
    pub async fn cancel_bet(&self, bet_id: &str) -> Result<()> {
        let req = self.request(Method::POST, &format!("/v0/bet/cancel/{bet_id}"));
        send_discard(req)
            .await
            .with_context(|| format!("canceling bet {bet_id}"))
    }

    pub async fn create_market(&self, body: &CreateMarketRequest) -> Result<LiteMarket> {
        let req = self.request(Method::POST, "/v0/market").json(body);
        send_json(req).await.context("creating market")
    }

    pub async fn resolve_market(&self, market_id: &str, body: &ResolveMarketRequest) -> Result<()> {
        let req = self
            .request(Method::POST, &format!("/v0/market/{market_id}/resolve"))
            .json(body);
        send_discard(req)
            .await
            .with_context(|| format!("resolving market {market_id}"))
    }

    pub async fn close_market(&self, market_id: &str, body: &CloseMarketRequest) -> Result<()> {
        let req = self
            .request(Method::POST, &format!("/v0/market/{market_id}/close"))
            .json(body);
        send_discard(req)
            .await
            .with_context(|| format!("closing market {market_id}"))
    }

    pub async fn add_comment(&self, body: &AddCommentRequest) -> Result<Comment> {
        let req = self.request(Method::POST, "/v0/comment").json(body);
        send_json(req).await.context("adding comment")
    }

    pub async fn add_liquidity(&self, market_id: &str, body: &AddLiquidityRequest) -> Result<()> {
        let req = self
            .request(Method::POST, &format!("/v0/market/{market_id}/add-liquidity"))
            .json(body);
        send_discard(req)
            .await
            .with_context(|| format!("adding liquidity to market {market_id}"))
    }

    pub async fn send_mana(&self, body: &SendManaRequest) -> Result<()> {
        let req = self.request(Method::POST, "/v0/managram").json(body);
        send_discard(req).await.context("sending mana")
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{path}", self.base_url))
    }
}

async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T> {
    let resp = req.send().await?;
    Ok(decode_json(resp).await?)
}

async fn send_discard(req: RequestBuilder) -> Result<()> {
    let resp = req.send().await?;
    Ok(discard_body(resp).await?)
}
