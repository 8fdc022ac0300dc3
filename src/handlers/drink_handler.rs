//! Coffee shop handlers. Everything except the public menu needs a permission.

use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, info};

use crate::constants::{
    PERM_DELETE_DRINKS, PERM_GET_DRINKS_DETAIL, PERM_PATCH_DRINKS, PERM_POST_DRINKS,
};
use crate::errors::ApiError;
use crate::middleware::require_permission;
use crate::models::{CreateDrinkRequest, UpdateDrinkRequest};
use crate::services::DrinkService;
use crate::validators::validate_body;

/// Public menu, recipes without ingredient names
#[utoipa::path(
    get,
    path = "/api/coffee/drinks",
    tag = "Coffee",
    responses(
        (status = 200, description = "Short drink representations", body = crate::models::DrinksShortResponse)
    )
)]
pub async fn get_drinks(drink_service: web::Data<DrinkService>) -> Result<HttpResponse, ApiError> {
    let response = drink_service.menu().await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Menu with full recipes
#[utoipa::path(
    get,
    path = "/api/coffee/drinks-detail",
    tag = "Coffee",
    responses(
        (status = 200, description = "Long drink representations", body = crate::models::DrinksLongResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 403, description = "Missing get:drinks-detail", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_drinks_detail(
    drink_service: web::Data<DrinkService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_permission(&req, PERM_GET_DRINKS_DETAIL)?;
    debug!("Serving detailed menu to {}", claims.sub);
    let response = drink_service.menu_detail().await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Add a drink to the menu
#[utoipa::path(
    post,
    path = "/api/coffee/drinks",
    tag = "Coffee",
    request_body = CreateDrinkRequest,
    responses(
        (status = 200, description = "Drink created", body = crate::models::DrinksLongResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 403, description = "Missing post:drinks", body = crate::models::ErrorResponse),
        (status = 422, description = "Invalid body or duplicate title", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_drink(
    drink_service: web::Data<DrinkService>,
    body: web::Json<CreateDrinkRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_permission(&req, PERM_POST_DRINKS)?;
    validate_body(&*body, "create drink")?;
    let response = drink_service.create(body.into_inner()).await?;
    info!("Drink created by {}", claims.sub);
    Ok(HttpResponse::Ok().json(response))
}

/// Edit a drink's title and/or recipe
#[utoipa::path(
    patch,
    path = "/api/coffee/drinks/{id}",
    tag = "Coffee",
    params(
        ("id" = i64, Path, description = "Drink ID")
    ),
    request_body = UpdateDrinkRequest,
    responses(
        (status = 200, description = "Drink updated", body = crate::models::DrinksLongResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 403, description = "Missing patch:drinks", body = crate::models::ErrorResponse),
        (status = 404, description = "Drink not found", body = crate::models::ErrorResponse),
        (status = 422, description = "Invalid body or duplicate title", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_drink(
    drink_service: web::Data<DrinkService>,
    path: web::Path<i64>,
    body: web::Json<UpdateDrinkRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    require_permission(&req, PERM_PATCH_DRINKS)?;
    validate_body(&*body, "update drink")?;
    let response = drink_service
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Remove a drink from the menu
#[utoipa::path(
    delete,
    path = "/api/coffee/drinks/{id}",
    tag = "Coffee",
    params(
        ("id" = i64, Path, description = "Drink ID")
    ),
    responses(
        (status = 200, description = "Drink deleted", body = crate::models::DrinkDeletedResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 403, description = "Missing delete:drinks", body = crate::models::ErrorResponse),
        (status = 404, description = "Drink not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_drink(
    drink_service: web::Data<DrinkService>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    require_permission(&req, PERM_DELETE_DRINKS)?;
    let response = drink_service.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    use crate::services::Services;
    use crate::testing::{bearer, bearer_signed_with, test_app};

    const BARISTA: &[&str] = &["get:drinks-detail"];
    const MANAGER: &[&str] = &[
        "get:drinks-detail",
        "post:drinks",
        "patch:drinks",
        "delete:drinks",
    ];

    fn matcha() -> Value {
        json!({
            "title": "matcha shake",
            "recipe": [
                {"name": "milk", "color": "grey", "parts": 1},
                {"name": "matcha", "color": "green", "parts": 3}
            ]
        })
    }

    #[actix_web::test]
    async fn test_public_menu_needs_no_token() {
        let services = Services::in_memory();
        let app = test_app!(services);

        let req = test::TestRequest::post()
            .uri("/api/coffee/drinks")
            .insert_header(("Authorization", bearer(MANAGER)))
            .set_json(matcha())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/coffee/drinks").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["drinks"][0]["recipe"],
            json!([{"color": "grey", "parts": 1}, {"color": "green", "parts": 3}])
        );
    }

    #[actix_web::test]
    async fn test_detail_requires_token_and_permission() {
        let services = Services::in_memory();
        let app = test_app!(services);

        let req = test::TestRequest::get()
            .uri("/api/coffee/drinks-detail")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/coffee/drinks-detail")
            .insert_header(("Authorization", bearer(&[])))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/api/coffee/drinks-detail")
            .insert_header(("Authorization", bearer(BARISTA)))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"success": true, "drinks": []}));
    }

    #[actix_web::test]
    async fn test_barista_cannot_create() {
        let services = Services::in_memory();
        let app = test_app!(services);

        let req = test::TestRequest::post()
            .uri("/api/coffee/drinks")
            .insert_header(("Authorization", bearer(BARISTA)))
            .set_json(matcha())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "forbidden");
    }

    #[actix_web::test]
    async fn test_invalid_tokens_are_unauthorized() {
        let services = Services::in_memory();
        let app = test_app!(services);

        for header in [
            "Token abc".to_string(),
            "Bearer not-a-jwt".to_string(),
            bearer_signed_with(MANAGER, "some-other-secret"),
        ] {
            let req = test::TestRequest::get()
                .uri("/api/coffee/drinks-detail")
                .insert_header(("Authorization", header.clone()))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{header}");
            assert!(resp.headers().contains_key("access-control-allow-methods"));
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], "INVALID_TOKEN");
        }
    }

    #[actix_web::test]
    async fn test_manager_lifecycle() {
        let services = Services::in_memory();
        let app = test_app!(services);

        let req = test::TestRequest::post()
            .uri("/api/coffee/drinks")
            .insert_header(("Authorization", bearer(MANAGER)))
            .set_json(matcha())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["drinks"][0]["id"], 1);
        assert_eq!(body["drinks"][0]["recipe"][1]["name"], "matcha");

        let req = test::TestRequest::post()
            .uri("/api/coffee/drinks")
            .insert_header(("Authorization", bearer(MANAGER)))
            .set_json(matcha())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::patch()
            .uri("/api/coffee/drinks/1")
            .insert_header(("Authorization", bearer(MANAGER)))
            .set_json(json!({"title": "iced matcha"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["drinks"][0]["title"], "iced matcha");
        assert_eq!(body["drinks"][0]["recipe"].as_array().unwrap().len(), 2);

        let req = test::TestRequest::delete()
            .uri("/api/coffee/drinks/1")
            .insert_header(("Authorization", bearer(MANAGER)))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"success": true, "delete": 1}));

        let req = test::TestRequest::delete()
            .uri("/api/coffee/drinks/1")
            .insert_header(("Authorization", bearer(MANAGER)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_without_recipe_is_unprocessable() {
        let services = Services::in_memory();
        let app = test_app!(services);

        let req = test::TestRequest::post()
            .uri("/api/coffee/drinks")
            .insert_header(("Authorization", bearer(MANAGER)))
            .set_json(json!({"title": "nothing"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
