use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchMarketsParams {
    #[schemars(description = "Search query term to match in market questions")]
    pub term: Option<String>,

    #[schemars(
        description = "Sort order: score, newest, resolve-date, close-date, liquidity, last-updated, last-bet-time, last-comment-time, most-popular, daily-score"
    )]
    pub sort: Option<String>,

    #[schemars(description = "Filter by status: all, open, closed, resolved")]
    pub filter: Option<String>,

    #[schemars(
        description = "Filter by type: ALL, BINARY, MULTIPLE_CHOICE, FREE_RESPONSE, PSEUDO_NUMERIC, BOUNTY, POLL, NUMBER"
    )]
    pub contract_type: Option<String>,

    #[schemars(description = "Filter by topic/group slug")]
    pub topic_slug: Option<String>,

    #[schemars(description = "Maximum number of results (default: 100, max: 1000)")]
    pub limit: Option<f64>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct MarketIdParams {
    #[schemars(description = "The market ID or slug")]
    pub market_id: String,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct GetUserParams {
    #[schemars(description = "The username to look up")]
    pub username: String,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ListBetsParams {
    #[schemars(description = "Filter by user ID")]
    pub user_id: Option<String>,

    #[schemars(description = "Filter by market/contract ID")]
    pub contract_id: Option<String>,

    #[schemars(description = "Maximum number of bets to return (default: 1000)")]
    pub limit: Option<f64>,

    #[schemars(description = "Return bets before this bet ID (for pagination)")]
    pub before: Option<String>,

    #[schemars(description = "Comma-separated bet kinds to include")]
    pub kinds: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GetCommentsParams {
    #[schemars(description = "Filter by market/contract ID")]
    pub contract_id: Option<String>,

    #[schemars(description = "Maximum number of comments to return")]
    pub limit: Option<f64>,

    #[schemars(description = "Filter by user ID")]
    pub user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GetPositionsParams {
    #[serde(rename = "market_id")]
    #[schemars(description = "The market ID")]
    pub market_id: String,

    #[schemars(description = "Sort order: profit or shares")]
    pub order: Option<String>,

    #[schemars(description = "Number of top positions to return")]
    pub top: Option<f64>,

    #[schemars(description = "Number of bottom positions to return")]
    pub bottom: Option<f64>,

    #[schemars(description = "Filter to a specific user's position")]
    pub user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaceBetParams {
    #[schemars(description = "Amount of mana to bet")]
    pub amount: Option<f64>,

    #[schemars(description = "The market/contract ID to bet on")]
    pub contract_id: String,

    #[schemars(
        description = "Outcome to bet on: YES or NO (for binary markets), or answer ID (for multiple choice)"
    )]
    pub outcome: Option<String>,

    #[schemars(
        description = "Limit order probability (0.01-0.99). If set, creates a limit order instead of a market order"
    )]
    pub limit_prob: Option<f64>,

    #[schemars(description = "Unix timestamp in milliseconds when the limit order expires")]
    pub expires_at: Option<f64>,

    #[schemars(description = "If true, simulates the bet without executing it")]
    pub dry_run: Option<bool>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SellSharesParams {
    #[serde(rename = "market_id")]
    #[schemars(description = "The market ID to sell shares in")]
    pub market_id: String,

    #[schemars(description = "Which outcome's shares to sell: YES or NO")]
    pub outcome: Option<String>,

    #[schemars(description = "Number of shares to sell (omit to sell all)")]
    pub shares: Option<f64>,

    #[schemars(description = "Answer ID for multiple choice markets")]
    pub answer_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct CancelBetParams {
    #[schemars(description = "The bet/limit order ID to cancel")]
    pub bet_id: String,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateMarketParams {
    #[schemars(
        description = "Market type: BINARY, MULTIPLE_CHOICE, FREE_RESPONSE, PSEUDO_NUMERIC, BOUNTY, POLL, NUMBER"
    )]
    pub outcome_type: String,

    #[schemars(description = "The market question")]
    pub question: String,

    #[schemars(description = "Market description (markdown)")]
    pub description: Option<String>,

    #[schemars(description = "Unix timestamp in milliseconds when the market closes")]
    pub close_time: Option<f64>,

    #[schemars(description = "Initial probability for BINARY markets (1-99)")]
    pub initial_prob: Option<f64>,

    #[schemars(description = "Minimum value for PSEUDO_NUMERIC markets")]
    pub min: Option<f64>,

    #[schemars(description = "Maximum value for PSEUDO_NUMERIC markets")]
    pub max: Option<f64>,

    #[schemars(description = "Use logarithmic scale for PSEUDO_NUMERIC markets")]
    pub is_log_scale: Option<bool>,

    #[schemars(description = "Comma-separated list of answers for MULTIPLE_CHOICE markets")]
    pub answers: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolveMarketParams {
    #[serde(rename = "market_id")]
    #[schemars(description = "The market ID to resolve")]
    pub market_id: String,

    #[schemars(description = "Resolution: YES, NO, MKT, CANCEL, or answer ID for multiple choice")]
    pub outcome: String,

    #[schemars(description = "Resolution value for PSEUDO_NUMERIC markets")]
    pub value: Option<f64>,

    #[schemars(description = "Probability (0-100) for MKT resolution of BINARY markets")]
    pub probability_int: Option<f64>,

    #[schemars(description = "Answer ID for resolving MULTIPLE_CHOICE markets")]
    pub answer_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CloseMarketParams {
    #[serde(rename = "market_id")]
    #[schemars(description = "The market ID to close")]
    pub market_id: String,

    #[schemars(
        description = "New closing time as Unix timestamp in milliseconds (omit to close immediately)"
    )]
    pub close_time: Option<f64>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AddCommentParams {
    #[schemars(description = "The market/contract ID to comment on")]
    pub contract_id: String,

    #[schemars(description = "Comment content in markdown format")]
    pub markdown: String,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct AddLiquidityParams {
    #[schemars(description = "The market ID to add liquidity to")]
    pub market_id: String,

    #[schemars(description = "Amount of mana to add as liquidity")]
    pub amount: Option<f64>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SendManaParams {
    #[schemars(description = "Comma-separated list of user IDs to send mana to")]
    pub to_ids: String,

    #[schemars(description = "Amount of mana to send to each user")]
    pub amount: Option<f64>,

    #[schemars(description = "Optional message to include with the mana transfer")]
    pub message: Option<String>,
}
