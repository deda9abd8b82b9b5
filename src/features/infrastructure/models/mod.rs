mod asset_row;
mod dataset;

pub use asset_row::AssetRow;
pub use dataset::{DatasetDescriptor, DatasetKind, StatusBucket};
