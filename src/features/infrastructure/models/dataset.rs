use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};

/// The two reporting views the dashboard can switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Bts,
    Internet,
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetKind::Bts => write!(f, "bts"),
            DatasetKind::Internet => write!(f, "internet"),
        }
    }
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 2] = [DatasetKind::Bts, DatasetKind::Internet];

    /// Resolve the raw `type` request parameter. Matching is exact and case-sensitive.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "bts" => Ok(DatasetKind::Bts),
            "internet" => Ok(DatasetKind::Internet),
            other => Err(AppError::InvalidDatasetKind(other.to_string())),
        }
    }

    pub fn descriptor(self) -> &'static DatasetDescriptor {
        match self {
            DatasetKind::Bts => &BTS_DATASET,
            DatasetKind::Internet => &INTERNET_DATASET,
        }
    }
}

/// Canonical bucket a raw status string falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    OnAir,
    UnderConstruction,
    /// Any status the dataset does not name; counted in totals only
    Other,
}

/// Exact raw-status labels for the two named buckets of one dataset
#[derive(Debug)]
pub struct StatusMapping {
    pub on_air: &'static str,
    pub under_construction: &'static str,
}

impl StatusMapping {
    pub fn resolve(&self, raw: Option<&str>) -> StatusBucket {
        match raw {
            Some(s) if s == self.on_air => StatusBucket::OnAir,
            Some(s) if s == self.under_construction => StatusBucket::UnderConstruction,
            _ => StatusBucket::Other,
        }
    }
}

/// Everything that differs between the two datasets. The aggregation itself
/// is shared and only reads this descriptor.
#[derive(Debug)]
pub struct DatasetDescriptor {
    pub kind: DatasetKind,
    pub table: &'static str,
    pub row_query: &'static str,
    pub freshness_query: &'static str,
    pub status_mapping: StatusMapping,
    pub has_network_type: bool,
}

static BTS_DATASET: DatasetDescriptor = DatasetDescriptor {
    kind: DatasetKind::Bts,
    table: "bts",
    row_query: r#"
        SELECT
            id::text AS id,
            nama_situs AS name,
            provinsi AS province,
            kabupaten AS regency,
            latitude::text AS latitude,
            longitude::text AS longitude,
            status,
            jaringan AS network_type,
            jenis_layanan AS service_type
        FROM bts
    "#,
    freshness_query: "SELECT MAX(last_updated)::timestamp AS last_updated FROM bts",
    status_mapping: StatusMapping {
        on_air: "On Air",
        under_construction: "Dalam Pembangunan",
    },
    has_network_type: true,
};

static INTERNET_DATASET: DatasetDescriptor = DatasetDescriptor {
    kind: DatasetKind::Internet,
    table: "akses_internet",
    row_query: r#"
        SELECT
            id::text AS id,
            nama_lokasi AS name,
            provinsi AS province,
            kabupaten AS regency,
            latitude::text AS latitude,
            longitude::text AS longitude,
            status,
            NULL::text AS network_type,
            jenis_layanan AS service_type
        FROM akses_internet
    "#,
    freshness_query: "SELECT MAX(last_updated)::timestamp AS last_updated FROM akses_internet",
    status_mapping: StatusMapping {
        on_air: "Aktif",
        under_construction: "Dalam Instalasi",
    },
    has_network_type: false,
};
