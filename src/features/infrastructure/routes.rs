use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::infrastructure::handlers;
use crate::features::infrastructure::services::InfrastructureService;

/// Create public infrastructure map routes
pub fn routes(service: Arc<InfrastructureService>) -> Router {
    Router::new()
        .route("/api/data", get(handlers::get_dataset))
        // Path served by the PHP deployment; kept for existing front-ends
        .route("/api.php", get(handlers::get_dataset))
        .route("/api/datasets", get(handlers::list_datasets))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::middleware::cors_layer;
    use crate::features::infrastructure::models::DatasetKind;
    use crate::shared::test_helpers::{asset_row, InMemoryAssetStore};
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    fn sample_store() -> InMemoryAssetStore {
        let mut tower = asset_row(10, "Aceh", "Simeulue", "On Air");
        tower.network_type = Some("4G".to_string());
        tower.service_type = Some("Telkomsel".to_string());
        let mut building = asset_row(11, "Aceh", "Simeulue", "Dalam Pembangunan");
        building.network_type = Some("2G".to_string());
        building.service_type = Some("Indosat".to_string());

        let mut school = asset_row(20, "Bali", "Badung", "Aktif");
        school.service_type = Some("VSAT".to_string());

        InMemoryAssetStore::new()
            .with_rows(DatasetKind::Bts, vec![tower, building])
            .with_rows(DatasetKind::Internet, vec![school])
            .with_latest_update(
                DatasetKind::Bts,
                NaiveDate::from_ymd_opt(2024, 3, 3)
                    .unwrap()
                    .and_hms_opt(23, 59, 0)
                    .unwrap(),
            )
    }

    fn server(store: Arc<InMemoryAssetStore>) -> TestServer {
        let service = Arc::new(InfrastructureService::new(store));
        TestServer::new(routes(service).layer(cors_layer(vec!["*".to_string()]))).unwrap()
    }

    #[tokio::test]
    async fn test_defaults_to_bts() {
        let server = server(Arc::new(sample_store()));

        let response = server.get("/api/data").await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["pointData"].as_array().unwrap().len(), 2);
        assert_eq!(body["lastUpdated"], "3 Maret 2024");
        assert_eq!(
            body["filters"],
            json!({"jaringan": ["2G", "4G"], "jenis_layanan": ["Indosat", "Telkomsel"]})
        );
        assert_eq!(
            body["provinceData"]["Aceh"],
            json!({
                "total": 2, "onAir": 1, "dalamPembangunan": 1,
                "regencies": {"Simeulue": {"total": 2, "onAir": 1, "dalamPembangunan": 1}}
            })
        );
    }

    #[tokio::test]
    async fn test_point_feature_shape() {
        let server = server(Arc::new(sample_store()));

        let response = server.get("/api/data").add_query_param("type", "bts").await;

        let body = response.json::<Value>();
        assert_eq!(
            body["pointData"][0],
            json!({
                "id": 10,
                "nama_situs": "Site 10",
                "provinsi": "Aceh",
                "kabupaten": "Simeulue",
                "lat": -2.5489,
                "lon": 118.0149,
                "status": "On Air",
                "jaringan": "4G",
                "jenis_layanan": "Telkomsel"
            })
        );
    }

    #[tokio::test]
    async fn test_internet_dataset() {
        let server = server(Arc::new(sample_store()));

        let response = server
            .get("/api/data")
            .add_query_param("type", "internet")
            .await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["pointData"][0]["jaringan"], Value::Null);
        assert_eq!(body["filters"], json!({"jenis_layanan": ["VSAT"]}));
        assert_eq!(body["lastUpdated"], Value::Null);
        assert_eq!(body["provinceData"]["Bali"]["onAir"], 1);
    }

    #[tokio::test]
    async fn test_invalid_type_issues_no_query() {
        let store = Arc::new(sample_store());
        let server = server(store.clone());

        let response = server.get("/api/data").add_query_param("type", "xyz").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({"error": "Tipe data tidak valid."}));
        assert_eq!(store.queries(), 0);
    }

    #[tokio::test]
    async fn test_empty_type_is_invalid() {
        let server = server(Arc::new(sample_store()));

        let response = server.get("/api/data").add_query_param("type", "").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_repeated_type_is_invalid() {
        let store = Arc::new(sample_store());
        let server = server(store.clone());

        let response = server.get("/api/data?type=bts&type=internet").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({"error": "Tipe data tidak valid."}));
        assert_eq!(store.queries(), 0);
    }

    #[tokio::test]
    async fn test_valid_type_issues_two_queries() {
        let store = Arc::new(sample_store());
        let server = server(store.clone());

        server.get("/api.php").add_query_param("type", "bts").await.assert_status_ok();

        assert_eq!(store.queries(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_is_server_error() {
        let server = server(Arc::new(sample_store().failing()));

        let response = server.get("/api/data").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<Value>();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Koneksi database gagal: "));
    }

    #[tokio::test]
    async fn test_any_origin_allowed() {
        let server = server(Arc::new(sample_store()));

        let response = server
            .get("/api/data")
            .add_header(header::ORIGIN, HeaderValue::from_static("https://peta.example"))
            .await;

        assert_eq!(
            response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            HeaderValue::from_static("*")
        );
    }

    #[tokio::test]
    async fn test_list_datasets() {
        let server = server(Arc::new(sample_store()));

        let response = server.get("/api/datasets").await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"][1]["kind"], "internet");
        assert_eq!(body["data"][1]["underConstructionLabel"], "Dalam Instalasi");
    }
}
