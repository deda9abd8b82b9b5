use sqlx::FromRow;

/// One located asset as read from the `bts` or `akses_internet` table.
///
/// `id`, `latitude` and `longitude` arrive as text so numeric coercion (and
/// its failure handling) happens in the aggregator rather than in the driver.
#[derive(Debug, Clone, Default, FromRow)]
pub struct AssetRow {
    pub id: Option<String>,
    pub name: Option<String>,
    pub province: Option<String>,
    pub regency: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub status: Option<String>,
    pub network_type: Option<String>,
    pub service_type: Option<String>,
}
