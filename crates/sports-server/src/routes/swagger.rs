//! OpenAPI Documentation

use utoipa::OpenApi;

use crate::models::{SportRequest, SportResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::sport::create_sport,
        super::sport::get_sport,
        super::sport::list_sports,
        super::sport::update_sport,
        super::sport::delete_sport,
    ),
    info(
        title = "Sports API",
        version = "0.1.0",
        description = "API pour la gestion des sports",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Sports", description = "API pour la gestion des sports"),
    ),
    components(schemas(SportRequest, SportResponse)),
)]
pub struct SportsApiDoc;
