mod aggregation_service;
mod asset_store;
mod freshness_service;
mod infrastructure_service;

pub use aggregation_service::RowAggregator;
pub use asset_store::{AssetStore, PgAssetStore};
pub use freshness_service::format_last_updated;
pub use infrastructure_service::InfrastructureService;
