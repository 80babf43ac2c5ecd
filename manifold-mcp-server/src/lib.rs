//! MCP tools for Manifold Markets: market discovery, trading and market
//! management.

mod args;
mod config;
mod params;
mod server;

pub use config::Cli;
pub use params::AddCommentParams;
pub use params::AddLiquidityParams;
pub use params::CancelBetParams;
pub use params::CloseMarketParams;
pub use params::CreateMarketParams;
pub use params::GetCommentsParams;
pub use params::GetPositionsParams;
pub use params::GetUserParams;
pub use params::ListBetsParams;
pub use params::MarketIdParams;
pub use params::PlaceBetParams;
pub use params::ResolveMarketParams;
pub use params::SearchMarketsParams;
pub use params::SellSharesParams;
pub use params::SendManaParams;
pub use server::ManifoldMcp;
