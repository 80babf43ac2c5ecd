use crate::args::non_empty;
use crate::args::positive;
use crate::args::positive_amount;
use crate::args::split_list;
use crate::args::whole;
use crate::config::Cli;
use crate::params::AddCommentParams;
use crate::params::AddLiquidityParams;
use crate::params::CancelBetParams;
use crate::params::CloseMarketParams;
use crate::params::CreateMarketParams;
use crate::params::GetCommentsParams;
use crate::params::GetPositionsParams;
use crate::params::GetUserParams;
use crate::params::ListBetsParams;
use crate::params::MarketIdParams;
use crate::params::PlaceBetParams;
use crate::params::ResolveMarketParams;
use crate::params::SearchMarketsParams;
use crate::params::SellSharesParams;
use crate::params::SendManaParams;
use anyhow::Context;
use manifold_client::ManifoldClient;
use manifold_client::types::AddCommentRequest;
use manifold_client::types::AddLiquidityRequest;
use manifold_client::types::CloseMarketRequest;
use manifold_client::types::CommentsQuery;
use manifold_client::types::CreateMarketRequest;
use manifold_client::types::ListBetsQuery;
use manifold_client::types::PlaceBetRequest;
use manifold_client::types::PositionsQuery;
use manifold_client::types::ResolveMarketRequest;
use manifold_client::types::SearchMarketsQuery;
use manifold_client::types::SellSharesRequest;
use manifold_client::types::SendManaRequest;
use mcp_servers_common::format::error_result;
use mcp_servers_common::format::json_result;
use mcp_servers_common::format::list_result;
use mcp_servers_common::format::text_result;
use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::ServiceExt;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use rmcp::model::Implementation;
use rmcp::model::ServerCapabilities;
use rmcp::model::ServerInfo;
use rmcp::tool;
use rmcp::tool_handler;
use rmcp::tool_router;
use tracing::debug;
use tracing::info;

const INSTRUCTIONS: &str = "Manifold Markets access. Use search_markets, get_market, \
get_positions, list_bets and get_comments to research markets; place_bet (dryRun=true to \
simulate), sell_shares and cancel_bet to trade; create_market, resolve_market, close_market, \
add_liquidity, add_comment and send_mana to manage. Amounts are in mana.";

const AMOUNT_REQUIRED: &str = "amount is required and must be positive";

#[derive(Clone)]
pub struct ManifoldMcp {
    client: ManifoldClient,
    tool_router: ToolRouter<Self>,
}

impl ManifoldMcp {
    pub fn new(client: ManifoldClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    pub fn from_config(cli: &Cli) -> anyhow::Result<Self> {
        let client = ManifoldClient::new(cli.client_options())?;
        info!(api_url = %cli.api_url, "configured manifold server");
        Ok(Self::new(client))
    }

    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        let service = self
            .serve((tokio::io::stdin(), tokio::io::stdout()))
            .await
            .context("starting MCP session")?;
        let reason = service.waiting().await?;
        info!(?reason, "MCP session ended");
        Ok(())
    }
}

#[tool_router]
impl ManifoldMcp {
    #[tool(
        description = "Search Manifold Markets by keyword and filters. Returns a list of markets matching the criteria."
    )]
    pub async fn search_markets(
        &self,
        Parameters(params): Parameters<SearchMarketsParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = SearchMarketsQuery {
            term: non_empty(params.term),
            sort: non_empty(params.sort),
            filter: non_empty(params.filter),
            contract_type: non_empty(params.contract_type),
            topic_slug: non_empty(params.topic_slug),
            limit: positive(params.limit),
        };
        debug!(?query, "search_markets");
        Ok(match self.client.search_markets(&query).await {
            Ok(markets) => list_result(&markets, "market", "No markets found."),
            Err(err) => error_result(format!("failed to search markets: {err:#}")),
        })
    }

    #[tool(
        description = "Get full details of a specific Manifold market including answers and description."
    )]
    pub async fn get_market(
        &self,
        Parameters(params): Parameters<MarketIdParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.market_id.is_empty() {
            return Ok(error_result("market_id is required"));
        }
        Ok(match self.client.get_market(&params.market_id).await {
            Ok(market) => json_result(&market, "market"),
            Err(err) => error_result(format!("failed to get market: {err:#}")),
        })
    }

    #[tool(description = "Get a Manifold user's profile by username.")]
    pub async fn get_user(
        &self,
        Parameters(params): Parameters<GetUserParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.username.is_empty() {
            return Ok(error_result("username is required"));
        }
        Ok(match self.client.get_user(&params.username).await {
            Ok(user) => json_result(&user, "user"),
            Err(err) => error_result(format!("failed to get user: {err:#}")),
        })
    }

    #[tool(description = "Get the authenticated user's own Manifold profile.")]
    pub async fn get_me(&self) -> Result<CallToolResult, McpError> {
        Ok(match self.client.get_me().await {
            Ok(user) => json_result(&user, "user"),
            Err(err) => error_result(format!("failed to get authenticated user: {err:#}")),
        })
    }

    #[tool(description = "List bets with optional filters.")]
    pub async fn list_bets(
        &self,
        Parameters(params): Parameters<ListBetsParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = ListBetsQuery {
            user_id: non_empty(params.user_id),
            contract_id: non_empty(params.contract_id),
            limit: positive(params.limit),
            before: non_empty(params.before),
            kinds: non_empty(params.kinds),
        };
        Ok(match self.client.list_bets(&query).await {
            Ok(bets) => list_result(&bets, "bet", "No bets found."),
            Err(err) => error_result(format!("failed to list bets: {err:#}")),
        })
    }

    #[tool(description = "Get comments on Manifold markets.")]
    pub async fn get_comments(
        &self,
        Parameters(params): Parameters<GetCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = CommentsQuery {
            contract_id: non_empty(params.contract_id),
            limit: positive(params.limit),
            user_id: non_empty(params.user_id),
        };
        Ok(match self.client.get_comments(&query).await {
            Ok(comments) => list_result(&comments, "comment", "No comments found."),
            Err(err) => error_result(format!("failed to get comments: {err:#}")),
        })
    }

    #[tool(description = "Get user positions (holdings) for a specific market.")]
    pub async fn get_positions(
        &self,
        Parameters(params): Parameters<GetPositionsParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.market_id.is_empty() {
            return Ok(error_result("market_id is required"));
        }
        let query = PositionsQuery {
            order: non_empty(params.order),
            top: positive(params.top),
            bottom: positive(params.bottom),
            user_id: non_empty(params.user_id),
        };
        Ok(
            match self.client.get_positions(&params.market_id, &query).await {
                Ok(positions) => list_result(&positions, "position", "No positions found."),
                Err(err) => error_result(format!("failed to get positions: {err:#}")),
            },
        )
    }

    #[tool(
        description = "Place a bet or limit order on a Manifold market. Use dryRun=true to simulate without executing."
    )]
    pub async fn place_bet(
        &self,
        Parameters(params): Parameters<PlaceBetParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(amount) = positive_amount(params.amount) else {
            return Ok(error_result(AMOUNT_REQUIRED));
        };
        if params.contract_id.is_empty() {
            return Ok(error_result("contractId is required"));
        }
        let body = PlaceBetRequest {
            amount,
            contract_id: params.contract_id,
            outcome: params.outcome.unwrap_or_default(),
            limit_prob: params.limit_prob,
            expires_at: whole(params.expires_at),
            dry_run: params.dry_run,
            answer_id: String::new(),
        };
        Ok(match self.client.place_bet(&body).await {
            Ok(bet) => json_result(&bet, "bet"),
            Err(err) => error_result(format!("failed to place bet: {err:#}")),
        })
    }

    #[tool(description = "Sell shares in a Manifold market.")]
    pub async fn sell_shares(
        &self,
        Parameters(params): Parameters<SellSharesParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.market_id.is_empty() {
            return Ok(error_result("market_id is required"));
        }
        let body = SellSharesRequest {
            outcome: params.outcome.unwrap_or_default(),
            shares: params.shares,
            answer_id: params.answer_id.unwrap_or_default(),
        };
        Ok(
            match self.client.sell_shares(&params.market_id, &body).await {
                Ok(bet) => json_result(&bet, "bet"),
                Err(err) => error_result(format!("failed to sell shares: {err:#}")),
            },
        )
    }

    #[tool(description = "Cancel a pending limit order.")]
    pub async fn cancel_bet(
        &self,
        Parameters(params): Parameters<CancelBetParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.bet_id.is_empty() {
            return Ok(error_result("bet_id is required"));
        }
        Ok(match self.client.cancel_bet(&params.bet_id).await {
            Ok(()) => text_result(format!("Cancelled bet {}", params.bet_id)),
            Err(err) => error_result(format!("failed to cancel bet: {err:#}")),
        })
    }

    #[tool(
        description = "Create a new Manifold market. For BINARY markets, set initialProb. For MULTIPLE_CHOICE, provide comma-separated answers. For PSEUDO_NUMERIC, set min, max, and optionally isLogScale."
    )]
    pub async fn create_market(
        &self,
        Parameters(params): Parameters<CreateMarketParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.outcome_type.is_empty() {
            return Ok(error_result("outcomeType is required"));
        }
        if params.question.is_empty() {
            return Ok(error_result("question is required"));
        }
        let body = CreateMarketRequest {
            outcome_type: params.outcome_type,
            question: params.question,
            description: params.description.unwrap_or_default(),
            close_time: whole(params.close_time),
            initial_prob: params.initial_prob,
            min: params.min,
            max: params.max,
            is_log_scale: params.is_log_scale,
            answers: non_empty(params.answers)
                .map(|answers| split_list(&answers))
                .unwrap_or_default(),
        };
        Ok(match self.client.create_market(&body).await {
            Ok(market) => json_result(&market, "market"),
            Err(err) => error_result(format!("failed to create market: {err:#}")),
        })
    }

    #[tool(description = "Resolve a Manifold market you created.")]
    pub async fn resolve_market(
        &self,
        Parameters(params): Parameters<ResolveMarketParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.market_id.is_empty() {
            return Ok(error_result("market_id is required"));
        }
        if params.outcome.is_empty() {
            return Ok(error_result("outcome is required"));
        }
        let body = ResolveMarketRequest {
            outcome: params.outcome,
            value: params.value,
            probability_int: whole(params.probability_int),
            answer_id: params.answer_id.unwrap_or_default(),
        };
        Ok(
            match self.client.resolve_market(&params.market_id, &body).await {
                Ok(()) => text_result(format!(
                    "Resolved market {} to {}",
                    params.market_id, body.outcome
                )),
                Err(err) => error_result(format!("failed to resolve market: {err:#}")),
            },
        )
    }

    #[tool(description = "Close a Manifold market (set or change its closing time).")]
    pub async fn close_market(
        &self,
        Parameters(params): Parameters<CloseMarketParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.market_id.is_empty() {
            return Ok(error_result("market_id is required"));
        }
        let body = CloseMarketRequest {
            close_time: whole(params.close_time),
        };
        Ok(
            match self.client.close_market(&params.market_id, &body).await {
                Ok(()) => text_result(format!("Closed market {}", params.market_id)),
                Err(err) => error_result(format!("failed to close market: {err:#}")),
            },
        )
    }

    #[tool(description = "Add a comment to a Manifold market.")]
    pub async fn add_comment(
        &self,
        Parameters(params): Parameters<AddCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.contract_id.is_empty() {
            return Ok(error_result("contractId is required"));
        }
        if params.markdown.is_empty() {
            return Ok(error_result("markdown is required"));
        }
        let body = AddCommentRequest {
            contract_id: params.contract_id,
            markdown: params.markdown,
        };
        Ok(match self.client.add_comment(&body).await {
            Ok(comment) => json_result(&comment, "comment"),
            Err(err) => error_result(format!("failed to add comment: {err:#}")),
        })
    }

    #[tool(description = "Add mana liquidity to a Manifold market's pool.")]
    pub async fn add_liquidity(
        &self,
        Parameters(params): Parameters<AddLiquidityParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.market_id.is_empty() {
            return Ok(error_result("market_id is required"));
        }
        let Some(amount) = positive_amount(params.amount) else {
            return Ok(error_result(AMOUNT_REQUIRED));
        };
        let body = AddLiquidityRequest { amount };
        Ok(
            match self.client.add_liquidity(&params.market_id, &body).await {
                Ok(()) => text_result(format!(
                    "Added {amount:.0} mana liquidity to market {}",
                    params.market_id
                )),
                Err(err) => error_result(format!("failed to add liquidity: {err:#}")),
            },
        )
    }

    #[tool(description = "Send mana to one or more Manifold users.")]
    pub async fn send_mana(
        &self,
        Parameters(params): Parameters<SendManaParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.to_ids.is_empty() {
            return Ok(error_result("toIds is required"));
        }
        let Some(amount) = positive_amount(params.amount) else {
            return Ok(error_result(AMOUNT_REQUIRED));
        };
        let body = SendManaRequest {
            to_ids: split_list(&params.to_ids),
            amount,
            message: params.message.unwrap_or_default(),
        };
        Ok(match self.client.send_mana(&body).await {
            Ok(()) => text_result(format!(
                "Sent {amount:.0} mana to {} user(s)",
                body.to_ids.len()
            )),
            Err(err) => error_result(format!("failed to send mana: {err:#}")),
        })
    }
}

#[tool_handler]
impl ServerHandler for ManifoldMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
