use anyhow::{anyhow, Result};
use colored::*;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};

/// Ejecuta el escenario completo contra un servidor en marcha:
/// crear, listar, obtener, actualizar, eliminar y las validaciones.
#[tokio::main]
async fn main() -> Result<()> {
    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("VEHICLE_API_URL").ok())
        .unwrap_or_else(|| "http://localhost:3000".to_string());

    println!("{}", "🚗 Vehicle Service Testing Tool".bright_blue().bold());
    println!("{}", "===============================".bright_blue());
    println!("🌐 {}", base_url);
    println!();

    let tool = SmokeTest {
        client: Client::new(),
        base_url: base_url.trim_end_matches('/').to_string(),
        failures: 0,
    };

    let failures = tool.run().await?;
    println!();
    if failures == 0 {
        println!("{}", "✅ Todas las comprobaciones pasaron".bright_green().bold());
        Ok(())
    } else {
        Err(anyhow!("❌ {} comprobaciones fallaron", failures))
    }
}

fn test_vehicle() -> Value {
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

fn updated_vehicle() -> Value {
    json!({
        "manufacturer_name": "Honda",
        "description": "Updated description",
        "horse_power": 150,
        "model_name": "Civic",
        "model_year": 2021,
        "purchase_price": 22000,
        "fuel_type": "Gasoline"
    })
}

/// Cada campo enviado aparece en la respuesta (números comparados como f64)
fn matches(actual: &Value, expected: &Value) -> bool {
    expected
        .as_object()
        .map(|fields| {
            fields.iter().all(|(key, value)| match value {
                Value::Number(n) => actual[key].as_f64() == n.as_f64(),
                other => &actual[key] == other,
            })
        })
        .unwrap_or(false)
}

struct SmokeTest {
    client: Client,
    base_url: String,
    failures: usize,
}

impl SmokeTest {
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
        let mut request = self.client.request(method, format!("{}{}", self.base_url, path));
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        Ok((status, body))
    }

    fn check(&mut self, name: &str, ok: bool, detail: &Value) {
        if ok {
            println!("{} {}", "✅".green(), name);
        } else {
            self.failures += 1;
            println!("{} {}", "❌".red(), name.bright_red());
            println!("   {}", detail.to_string().bright_yellow());
        }
    }

    async fn run(mut self) -> Result<usize> {
        let (status, body) = self.send(Method::POST, "/vehicle", Some(test_vehicle())).await?;
        let vin = body[0]["vin"].as_str().unwrap_or_default().to_string();
        self.check(
            "POST /vehicle crea un vehículo (201)",
            status == StatusCode::CREATED && !vin.is_empty() && matches(&body[0], &test_vehicle()),
            &body,
        );
        let path = format!("/vehicle/{}", vin);

        let (status, body) = self.send(Method::GET, "/vehicle", None).await?;
        let listed = body
            .as_array()
            .map(|rows| rows.iter().any(|row| row["vin"] == vin.as_str()))
            .unwrap_or(false);
        self.check("GET /vehicle incluye el vehículo creado (200)", status == StatusCode::OK && listed, &body);

        let (status, body) = self.send(Method::GET, &path, None).await?;
        self.check(
            "GET /vehicle/:vin devuelve el vehículo (200)",
            status == StatusCode::OK && matches(&body[0], &test_vehicle()),
            &body,
        );

        let (status, body) = self.send(Method::PUT, &path, Some(updated_vehicle())).await?;
        self.check(
            "PUT /vehicle/:vin reemplaza el vehículo (200)",
            status == StatusCode::OK && matches(&body[0], &updated_vehicle()),
            &body,
        );

        let invalid = json!({
            "manufacturer_name": "Test",
            "horse_power": "InvalidHorsePower",
            "model_year": 1800,
            "purchase_price": -500,
            "fuel_type": "Gasoline"
        });
        let (status, body) = self.send(Method::POST, "/vehicle", Some(invalid)).await?;
        self.check(
            "POST /vehicle rechaza datos inválidos (422)",
            status == StatusCode::UNPROCESSABLE_ENTITY && body.get("error").is_some(),
            &body,
        );

        let (status, body) = self.send(Method::PUT, &path, Some(json!({}))).await?;
        self.check(
            "PUT /vehicle/:vin con cuerpo vacío (422)",
            status == StatusCode::UNPROCESSABLE_ENTITY && body.get("error").is_some(),
            &body,
        );

        let (status, body) = self.send(Method::DELETE, &path, None).await?;
        self.check("DELETE /vehicle/:vin elimina el vehículo (204)", status == StatusCode::NO_CONTENT, &body);

        let (status, body) = self.send(Method::GET, &path, None).await?;
        self.check("GET /vehicle/:vin tras eliminar (404)", status == StatusCode::NOT_FOUND, &body);

        Ok(self.failures)
    }
}
