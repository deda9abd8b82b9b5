use utoipa::{Modify, OpenApi};

use crate::features::infrastructure::{
    dtos as infrastructure_dtos, handlers as infrastructure_handlers,
    models as infrastructure_models,
};
use crate::shared::types::{ApiResponse, ErrorResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Infrastructure (public)
        infrastructure_handlers::infrastructure_handler::get_dataset,
        infrastructure_handlers::infrastructure_handler::list_datasets,
    ),
    components(
        schemas(
            // Shared
            Meta,
            ErrorResponse,
            // Infrastructure
            infrastructure_models::DatasetKind,
            infrastructure_dtos::PointFeatureDto,
            infrastructure_dtos::StatusTally,
            infrastructure_dtos::ProvinceAggregate,
            infrastructure_dtos::FilterSetDto,
            infrastructure_dtos::DatasetResponseDto,
            infrastructure_dtos::DatasetInfoDto,
            ApiResponse<Vec<infrastructure_dtos::DatasetInfoDto>>,
        )
    ),
    tags(
        (name = "Infrastructure", description = "BTS and internet access point map data (public)"),
    ),
    info(
        title = "Infra Map API",
        version = "0.1.0",
        description = "Sebaran BTS dan akses internet per provinsi dan kabupaten",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
