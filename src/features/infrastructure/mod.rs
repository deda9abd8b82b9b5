//! Infrastructure map data (sebaran BTS dan akses internet).
//!
//! Serves the two dashboard views from the `bts` and `akses_internet`
//! tables. One descriptor per dataset selects the queries and status
//! labels; a single aggregation pass builds the map points, the
//! province → regency rollup and the filter vocabulary.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/data?type=bts\|internet` | Map payload for one dataset (default `bts`) |
//! | GET | `/api.php?type=bts\|internet` | Same payload at the legacy path |
//! | GET | `/api/datasets` | Dataset kinds and their status labels |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{InfrastructureService, PgAssetStore};
