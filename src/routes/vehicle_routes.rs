use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub const INVALID_JSON: &str = "Invalid JSON format";

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/vehicle", get(list_vehicles).post(create_vehicle))
        .route(
            "/vehicle/:vin",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

/// Cuerpo JSON de la petición
///
/// Sin `Content-Type: application/json`, o con el cuerpo vacío, se trata como
/// un objeto vacío y lo rechaza la validación. En el nivel superior solo se
/// aceptan objetos y arrays; cualquier otra cosa, o un JSON ilegible, es un 400.
fn json_body(headers: &HeaderMap, body: &Bytes) -> Result<Value, AppError> {
    let empty = || Value::Object(Default::default());

    if !is_json_content_type(headers) || body.is_empty() {
        return Ok(empty());
    }

    match body.iter().copied().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') | Some(b'[') => {}
        _ => return Err(bad_request_error(INVALID_JSON)),
    }

    serde_json::from_slice(body).map_err(|_| bad_request_error(INVALID_JSON))
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.get_by_vin(&vin).await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Bytes,
) -> Result<(StatusCode, Json<Vec<VehicleResponse>>), AppError> {
    let body = json_body(&headers, &payload)?;
    let controller = VehicleController::new(state.store.clone());
    let response = controller.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
    headers: HeaderMap,
    payload: Bytes,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let body = json_body(&headers, &payload)?;
    let controller = VehicleController::new(state.store.clone());
    let response = controller.update(&vin, &body).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleController::new(state.store.clone());
    controller.delete(&vin).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn json_headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    fn parse(content_type: &'static str, body: &'static str) -> Result<Value, AppError> {
        json_body(&json_headers(content_type), &Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        assert_eq!(parse("application/json", "").unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_content_type_with_charset() {
        let body = parse("application/json; charset=utf-8", " {\"a\": 1}").unwrap();
        assert_eq!(body["a"], 1);
    }

    #[test]
    fn test_non_json_content_type_is_ignored() {
        assert_eq!(parse("text/plain", "{\"a\": 1}").unwrap(), serde_json::json!({}));
        let none = json_body(&HeaderMap::new(), &Bytes::from_static(b"garbage")).unwrap();
        assert_eq!(none, serde_json::json!({}));
    }

    #[test]
    fn test_top_level_scalars_are_rejected() {
        for body in ["5", "\"x\"", "null", "true", "   "] {
            assert!(
                matches!(parse("application/json", body), Err(AppError::BadRequest(_))),
                "body {:?}",
                body
            );
        }
    }

    #[test]
    fn test_truncated_json_is_rejected() {
        assert!(matches!(
            parse("application/json", "{\"manufacturer_name\": \"Ford\","),
            Err(AppError::BadRequest(_))
        ));
    }
}
