//! Shared helpers for API integration tests
//!
//! Levanta el estado real del servidor sobre una base de datos embebida
//! en un directorio temporal y lanza peticiones contra el router con
//! `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cafe_server::api;
use cafe_server::auth::ADMIN_ROLE;
use cafe_server::core::{Config, ServerState};

pub struct TestApp {
    pub state: ServerState,
    // el directorio temporal vive mientras viva la app
    _tmp: tempfile::TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let tmp = tempfile::tempdir().expect("tempdir");
        let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
        let state = ServerState::initialize(&config)
            .await
            .expect("server state");

        Self { state, _tmp: tmp }
    }

    pub fn router(&self) -> Router {
        api::router(self.state.clone())
    }

    /// Token firmado con el secreto del servidor de pruebas
    pub fn token_for(&self, user_id: &str, nombre: &str, role: &str) -> String {
        self.state
            .jwt_service
            .generate_token(user_id, nombre, role)
            .expect("token")
    }

    pub fn admin_token(&self, user_id: &str, nombre: &str) -> String {
        self.token_for(user_id, nombre, ADMIN_ROLE)
    }

    pub fn user_token(&self, user_id: &str, nombre: &str) -> String {
        self.token_for(user_id, nombre, "USER_ROLE")
    }

    /// Crea un registro `usuario` para que las expansiones tengan destino
    pub async fn seed_usuario(&self, id: &str, nombre: &str, email: &str) {
        self.state
            .db
            .query("CREATE type::thing('usuario', $id) SET nombre = $nombre, email = $email")
            .bind(("id", id.to_string()))
            .bind(("nombre", nombre.to_string()))
            .bind(("email", email.to_string()))
            .await
            .expect("seed usuario");
    }

    pub async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self.router().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };

        (status, json)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request("GET", path, token, None).await
    }

    pub async fn post(&self, path: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request("POST", path, token, Some(body)).await
    }

    pub async fn put(&self, path: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request("PUT", path, token, Some(body)).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request("DELETE", path, token, None).await
    }
}
