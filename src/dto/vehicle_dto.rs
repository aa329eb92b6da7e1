use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{as_whole_i32, is_truthy, validate_positive};

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const MALFORMED_ATTRIBUTES: &str = "Malformed attributes";
pub const MODEL_YEAR_RANGE: &str = "model_year must be between 1886 and 2024";
pub const PURCHASE_PRICE_POSITIVE: &str = "purchase_price must be a positive number";

const REQUIRED_FIELDS: [&str; 7] = [
    "manufacturer_name",
    "description",
    "horse_power",
    "model_name",
    "model_year",
    "purchase_price",
    "fuel_type",
];

fn field<'a>(body: &'a Value, name: &str) -> &'a Value {
    body.get(name).unwrap_or(&Value::Null)
}

// Request para crear o reemplazar un vehículo (siempre los siete campos)
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct VehicleRequest {
    pub manufacturer_name: String,
    pub description: String,
    pub horse_power: i32,
    pub model_name: String,
    #[validate(range(min = 1886, max = 2024, message = "model_year must be between 1886 and 2024"))]
    pub model_year: i32,
    pub purchase_price: Decimal,
    pub fuel_type: String,
}

impl VehicleRequest {
    /// Validar un cuerpo JSON arbitrario y convertirlo en un request tipado
    ///
    /// Orden de comprobación: presencia, tipos, rango de `model_year`,
    /// `purchase_price` positivo. Gana el primer fallo.
    ///
    /// El precio se comprueba ya convertido a `Decimal` (28 decimales), que es
    /// el valor que se almacena: un precio que redondea a cero no es positivo.
    pub fn from_json(body: &Value) -> AppResult<Self> {
        if !REQUIRED_FIELDS.iter().all(|name| is_truthy(field(body, name))) {
            return Err(validation_error(MISSING_FIELDS));
        }

        let request =
            Self::from_present_fields(body).ok_or_else(|| validation_error(MALFORMED_ATTRIBUTES))?;

        if let Err(errors) = request.validate() {
            let message = errors
                .field_errors()
                .get("model_year")
                .and_then(|errs| errs.first())
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| MODEL_YEAR_RANGE.to_string());
            return Err(validation_error(message));
        }

        validate_positive(request.purchase_price)
            .map_err(|_| validation_error(PURCHASE_PRICE_POSITIVE))?;

        Ok(request)
    }

    fn from_present_fields(body: &Value) -> Option<Self> {
        // Fuera del rango de Decimal (|x| > Decimal::MAX) no cabe en la columna
        let purchase_price = Decimal::from_f64(field(body, "purchase_price").as_f64()?)?;

        Some(Self {
            manufacturer_name: field(body, "manufacturer_name").as_str()?.to_string(),
            description: match field(body, "description") {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
            horse_power: as_whole_i32(field(body, "horse_power"))?,
            model_name: field(body, "model_name").as_str()?.to_string(),
            model_year: as_whole_i32(field(body, "model_year"))?,
            purchase_price,
            fuel_type: field(body, "fuel_type").as_str()?.to_string(),
        })
    }
}

// Response de vehículo: enteros para horse_power/model_year, flotante para purchase_price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleResponse {
    pub vin: String,
    pub manufacturer_name: String,
    pub description: String,
    pub horse_power: i32,
    pub model_name: String,
    pub model_year: i32,
    pub purchase_price: f64,
    pub fuel_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use serde_json::json;

    fn ford() -> Value {
        json!({
            "manufacturer_name": "Ford",
            "description": "Reliable and efficient",
            "horse_power": 1000,
            "model_name": "retro",
            "model_year": 2020,
            "purchase_price": 200000,
            "fuel_type": "Gasoline"
        })
    }

    fn message(result: AppResult<VehicleRequest>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_body() {
        let request = VehicleRequest::from_json(&ford()).unwrap();
        assert_eq!(request.manufacturer_name, "Ford");
        assert_eq!(request.horse_power, 1000);
        assert_eq!(request.model_year, 2020);
        assert_eq!(request.purchase_price, Decimal::from(200000));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(message(VehicleRequest::from_json(&json!({}))), MISSING_FIELDS);
        assert_eq!(message(VehicleRequest::from_json(&json!([]))), MISSING_FIELDS);

        let mut body = ford();
        body["description"] = json!("");
        assert_eq!(message(VehicleRequest::from_json(&body)), MISSING_FIELDS);

        let mut body = ford();
        body["horse_power"] = json!(0);
        assert_eq!(message(VehicleRequest::from_json(&body)), MISSING_FIELDS);
    }

    #[test]
    fn test_missing_wins_over_malformed() {
        let body = json!({
            "manufacturer_name": "Test",
            "horse_power": "InvalidHorsePower",
            "model_year": 1800,
            "purchase_price": -500,
            "fuel_type": "Gasoline"
        });
        assert_eq!(message(VehicleRequest::from_json(&body)), MISSING_FIELDS);
    }

    #[test]
    fn test_malformed_attributes() {
        let mut body = ford();
        body["horse_power"] = json!("InvalidHorsePower");
        assert_eq!(message(VehicleRequest::from_json(&body)), MALFORMED_ATTRIBUTES);

        let mut body = ford();
        body["model_name"] = json!(42);
        assert_eq!(message(VehicleRequest::from_json(&body)), MALFORMED_ATTRIBUTES);

        let mut body = ford();
        body["model_year"] = json!(2020.5);
        assert_eq!(message(VehicleRequest::from_json(&body)), MALFORMED_ATTRIBUTES);
    }

    #[test]
    fn test_malformed_wins_over_range() {
        let mut body = ford();
        body["horse_power"] = json!("InvalidHorsePower");
        body["model_year"] = json!(1800);
        assert_eq!(message(VehicleRequest::from_json(&body)), MALFORMED_ATTRIBUTES);
    }

    #[test]
    fn test_description_accepts_non_string() {
        let mut body = ford();
        body["description"] = json!(12);
        let request = VehicleRequest::from_json(&body).unwrap();
        assert_eq!(request.description, "12");
    }

    #[test]
    fn test_model_year_bounds() {
        for year in [1886, 2024] {
            let mut body = ford();
            body["model_year"] = json!(year);
            assert!(VehicleRequest::from_json(&body).is_ok());
        }
        for year in [1800, 1885, 2025] {
            let mut body = ford();
            body["model_year"] = json!(year);
            assert_eq!(message(VehicleRequest::from_json(&body)), MODEL_YEAR_RANGE);
        }
    }

    #[test]
    fn test_model_year_checked_before_price() {
        let mut body = ford();
        body["model_year"] = json!(1800);
        body["purchase_price"] = json!(-500);
        assert_eq!(message(VehicleRequest::from_json(&body)), MODEL_YEAR_RANGE);
    }

    #[test]
    fn test_negative_purchase_price() {
        let mut body = ford();
        body["purchase_price"] = json!(-500);
        assert_eq!(message(VehicleRequest::from_json(&body)), PURCHASE_PRICE_POSITIVE);
    }

    #[test]
    fn test_price_rounding_to_zero_is_not_positive() {
        let mut body = ford();
        body["purchase_price"] = json!(1e-30);
        assert_eq!(message(VehicleRequest::from_json(&body)), PURCHASE_PRICE_POSITIVE);
    }

    #[test]
    fn test_smallest_storable_price() {
        let mut body = ford();
        body["purchase_price"] = json!(0.01);
        let request = VehicleRequest::from_json(&body).unwrap();
        assert!(request.purchase_price > Decimal::ZERO);
    }

    #[test]
    fn test_price_beyond_decimal_range() {
        let mut body = ford();
        body["purchase_price"] = json!(1e29);
        assert_eq!(message(VehicleRequest::from_json(&body)), MALFORMED_ATTRIBUTES);
    }
}
