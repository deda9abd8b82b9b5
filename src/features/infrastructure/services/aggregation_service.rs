use indexmap::IndexMap;
use std::collections::BTreeSet;

use crate::features::infrastructure::dtos::{FilterSetDto, PointFeatureDto, ProvinceAggregate};
use crate::features::infrastructure::models::{AssetRow, DatasetDescriptor};

/// Output of one aggregation pass over a dataset
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub point_data: Vec<PointFeatureDto>,
    pub province_data: IndexMap<String, ProvinceAggregate>,
    pub filters: FilterSetDto,
}

/// Single-pass accumulator turning asset rows into map points, the
/// province → regency rollup and the filter vocabulary.
///
/// Rows are pushed one at a time so the store can stream them straight in
/// without materialising the whole result set first.
pub struct RowAggregator {
    dataset: &'static DatasetDescriptor,
    point_data: Vec<PointFeatureDto>,
    province_data: IndexMap<String, ProvinceAggregate>,
    network_types: BTreeSet<String>,
    service_types: BTreeSet<String>,
    anomalies: usize,
}

impl RowAggregator {
    pub fn new(dataset: &'static DatasetDescriptor) -> Self {
        Self {
            dataset,
            point_data: Vec::new(),
            province_data: IndexMap::new(),
            network_types: BTreeSet::new(),
            service_types: BTreeSet::new(),
            anomalies: 0,
        }
    }

    pub fn push(&mut self, row: AssetRow) {
        let point = self.project(row);

        if self.dataset.has_network_type {
            insert_distinct(&mut self.network_types, point.network_type.as_deref());
        }
        insert_distinct(&mut self.service_types, point.service_type.as_deref());

        let bucket = self
            .dataset
            .status_mapping
            .resolve(point.status.as_deref());

        // Missing names group under the empty key; present names are used verbatim
        let province = entry_mut(
            &mut self.province_data,
            point.province.as_deref().unwrap_or(""),
        );
        province.tally.record(bucket);
        entry_mut(
            &mut province.regencies,
            point.regency.as_deref().unwrap_or(""),
        )
        .record(bucket);

        self.point_data.push(point);
    }

    /// Number of rows whose numeric fields could not be coerced so far
    pub fn anomalies(&self) -> usize {
        self.anomalies
    }

    pub fn finish(self) -> Aggregation {
        tracing::debug!(
            "Aggregated {} dataset: points={}, provinces={}, anomalies={}",
            self.dataset.kind,
            self.point_data.len(),
            self.province_data.len(),
            self.anomalies
        );

        let network_types: Option<Vec<String>> = self
            .dataset
            .has_network_type
            .then(|| self.network_types.into_iter().collect());

        Aggregation {
            point_data: self.point_data,
            province_data: self.province_data,
            filters: FilterSetDto {
                network_types,
                service_types: self.service_types.into_iter().collect(),
            },
        }
    }

    fn project(&mut self, row: AssetRow) -> PointFeatureDto {
        let id = row.id.as_deref().and_then(|raw| raw.trim().parse::<i64>().ok());
        let lat = parse_coordinate(row.latitude.as_deref());
        let lon = parse_coordinate(row.longitude.as_deref());

        if id.is_none() || lat.is_nan() || lon.is_nan() {
            self.anomalies += 1;
            tracing::warn!(
                "Row in {} has non-numeric fields (id={:?}, latitude={:?}, longitude={:?})",
                self.dataset.table,
                row.id,
                row.latitude,
                row.longitude
            );
        }

        PointFeatureDto {
            id,
            name: row.name,
            province: row.province,
            regency: row.regency,
            lat,
            lon,
            status: row.status,
            network_type: if self.dataset.has_network_type {
                row.network_type
            } else {
                None
            },
            service_type: row.service_type,
        }
    }
}

fn parse_coordinate(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

fn insert_distinct(set: &mut BTreeSet<String>, value: Option<&str>) {
    match value {
        Some(v) if !v.is_empty() && !set.contains(v) => {
            set.insert(v.to_owned());
        }
        _ => {}
    }
}

/// Get the value for `key`, inserting a zeroed one on first sight
fn entry_mut<'m, V: Default>(map: &'m mut IndexMap<String, V>, key: &str) -> &'m mut V {
    let index = match map.get_index_of(key) {
        Some(index) => index,
        None => map.insert_full(key.to_owned(), V::default()).0,
    };
    &mut map[index]
}
