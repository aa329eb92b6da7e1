//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de valores JSON a tipos de Rust.

use num_traits::Zero;
use serde::Serialize;
use serde_json::Value;
use validator::ValidationError;

/// Indica si un valor JSON cuenta como "presente"
///
/// `null`, `false`, `0` y la cadena vacía se consideran ausentes;
/// cualquier objeto o array cuenta como presente aunque esté vacío.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Convertir un número JSON sin parte fraccionaria a `i32`
///
/// Acepta tanto `150` como `150.0`; rechaza `150.5` y valores fuera de rango.
pub fn as_whole_i32(value: &Value) -> Option<i32> {
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).ok();
    }
    let f = value.as_f64()?;
    if f.fract() != 0.0 || f < i32::MIN as f64 || f > i32::MAX as f64 {
        return None;
    }
    Some(f as i32)
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}
