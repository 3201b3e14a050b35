pub mod catalog;
pub mod media;
pub mod providers;
pub mod revenue;
pub mod selection;

pub use catalog::Catalog;
pub use media::{MediaType, TrendingItem};
pub use providers::ProviderMap;
pub use revenue::RevenueRecord;
pub use selection::Selection;
