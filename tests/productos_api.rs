//! Integration tests for the productos endpoints
//! Run: cargo test --test productos_api

mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::{Value, json};

/// Crea una categoría y devuelve su id completo ("categoria:...")
async fn seed_categoria(app: &TestApp, token: &str, descripcion: &str) -> String {
    let (status, body) = app
        .post("/categoria", Some(token), json!({"descripcion": descripcion}))
        .await;
    assert_eq!(status, StatusCode::OK);
    body["categoria"]["id"].as_str().unwrap().to_string()
}

async fn seed_producto(
    app: &TestApp,
    token: &str,
    categoria: &str,
    nombre: &str,
    precio: f64,
    disponible: bool,
) -> Value {
    let (status, body) = app
        .post(
            "/productos",
            Some(token),
            json!({
                "nombre": nombre,
                "precio": precio,
                "descripcion": "de la casa",
                "disponible": disponible,
                "categoria": categoria,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    body["producto"].clone()
}

#[tokio::test]
async fn create_renames_precio_and_assigns_owner() {
    let app = TestApp::spawn().await;
    app.seed_usuario("u1", "Juan", "juan@cafe.test").await;
    let token = app.user_token("u1", "Juan");
    let categoria = seed_categoria(&app, &token, "Bebidas").await;

    let (status, body) = app
        .post(
            "/productos",
            Some(&token),
            json!({
                "nombre": "Cafe americano",
                "precio": 12.5,
                "descripcion": "taza grande",
                "categoria": categoria,
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    let producto = &body["producto"];
    assert_eq!(producto["nombre"], json!("Cafe americano"));
    // el campo del cuerpo se llama precio; se almacena como precioUni
    assert_eq!(producto["precioUni"], json!(12.5));
    assert_eq!(producto["usuario"], json!("usuario:u1"));
    assert_eq!(producto["categoria"], json!(categoria));
    // disponible ausente equivale a true
    assert_eq!(producto["disponible"], json!(true));
}

#[tokio::test]
async fn create_requires_token() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post(
            "/productos",
            None,
            json!({"nombre": "X", "precio": 1.0, "categoria": "c"}),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["ok"], json!(false));
}

#[tokio::test]
async fn list_paginates_only_available_products() {
    let app = TestApp::spawn().await;
    app.seed_usuario("u1", "Juan", "juan@cafe.test").await;
    let token = app.user_token("u1", "Juan");
    let categoria = seed_categoria(&app, &token, "Bebidas").await;

    for i in 0..8 {
        seed_producto(&app, &token, &categoria, &format!("Prod {i}"), 1.0, true).await;
    }
    seed_producto(&app, &token, &categoria, "Oculto", 1.0, false).await;

    // por defecto: primeros 5 disponibles
    let (status, body) = app.get("/productos", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let primera_pagina: Vec<String> = body["productos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(primera_pagina.len(), 5);

    // desde=5&limite=2 salta los cinco primeros del mismo orden natural
    let (status, body) = app.get("/productos?desde=5&limite=2", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let segunda_pagina: Vec<String> = body["productos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(segunda_pagina.len(), 2);
    for id in &segunda_pagina {
        assert!(!primera_pagina.contains(id));
    }

    // el conjunto completo de disponibles son 8: el no disponible nunca sale
    let (_, body) = app.get("/productos?limite=100", Some(&token)).await;
    let todos = body["productos"].as_array().unwrap();
    assert_eq!(todos.len(), 8);
    for p in todos {
        assert_eq!(p["disponible"], json!(true));
    }
}

#[tokio::test]
async fn list_falls_back_on_non_numeric_params() {
    let app = TestApp::spawn().await;
    app.seed_usuario("u1", "Juan", "juan@cafe.test").await;
    let token = app.user_token("u1", "Juan");
    let categoria = seed_categoria(&app, &token, "Bebidas").await;

    for i in 0..7 {
        seed_producto(&app, &token, &categoria, &format!("Prod {i}"), 1.0, true).await;
    }

    // desde no numérico -> 0, limite ausente -> 5
    let (status, body) = app.get("/productos?desde=abc", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["productos"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn list_expands_owner_and_category() {
    let app = TestApp::spawn().await;
    app.seed_usuario("u1", "Juan", "juan@cafe.test").await;
    let token = app.user_token("u1", "Juan");
    let categoria = seed_categoria(&app, &token, "Bebidas").await;
    seed_producto(&app, &token, &categoria, "Cafe", 2.0, true).await;

    let (_, body) = app.get("/productos", Some(&token)).await;
    let producto = &body["productos"][0];

    assert_eq!(producto["usuario"]["nombre"], json!("Juan"));
    assert_eq!(producto["usuario"]["email"], json!("juan@cafe.test"));
    assert_eq!(producto["categoria"]["descripcion"], json!("Bebidas"));
}

#[tokio::test]
async fn get_by_id_expands_references() {
    let app = TestApp::spawn().await;
    app.seed_usuario("u1", "Juan", "juan@cafe.test").await;
    let token = app.user_token("u1", "Juan");
    let categoria = seed_categoria(&app, &token, "Postres").await;
    let creado = seed_producto(&app, &token, &categoria, "Flan", 4.0, true).await;
    let id = creado["id"].as_str().unwrap();

    let (status, body) = app.get(&format!("/productos/{id}"), Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let producto = &body["producto"];
    assert_eq!(producto["nombre"], json!("Flan"));
    assert_eq!(producto["precioUni"], json!(4.0));
    assert_eq!(producto["categoria"]["descripcion"], json!("Postres"));
    assert_eq!(producto["usuario"]["email"], json!("juan@cafe.test"));
}

#[tokio::test]
async fn get_by_id_missing_maps_to_400() {
    let app = TestApp::spawn().await;
    app.seed_usuario("u1", "Juan", "juan@cafe.test").await;
    let token = app.user_token("u1", "Juan");

    let (status, body) = app.get("/productos/noexiste", Some(&token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["err"]["message"],
        json!("No se encuentra el ID del producto")
    );
}

#[tokio::test]
async fn search_is_case_insensitive_but_not_accent_insensitive() {
    let app = TestApp::spawn().await;
    app.seed_usuario("u1", "Juan", "juan@cafe.test").await;
    let token = app.user_token("u1", "Juan");
    let categoria = seed_categoria(&app, &token, "Bebidas").await;

    seed_producto(&app, &token, &categoria, "CAFE molido", 3.0, true).await;
    seed_producto(&app, &token, &categoria, "Café especial", 5.0, true).await;
    seed_producto(&app, &token, &categoria, "Torta", 6.0, true).await;
    // los no disponibles también aparecen en la búsqueda
    seed_producto(&app, &token, &categoria, "cafetera rota", 9.0, false).await;

    let (status, body) = app.get("/productos/buscar/cafe", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let nombres: Vec<&str> = body["productos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["nombre"].as_str().unwrap())
        .collect();

    assert!(nombres.contains(&"CAFE molido"));
    assert!(nombres.contains(&"cafetera rota"));
    // insensible a mayúsculas pero no a acentos: "Café" no coincide con "cafe"
    assert!(!nombres.contains(&"Café especial"));
    assert!(!nombres.contains(&"Torta"));

    // la categoría viene expandida
    assert_eq!(
        body["productos"][0]["categoria"]["descripcion"],
        json!("Bebidas")
    );
}

#[tokio::test]
async fn search_treats_term_as_literal_text() {
    let app = TestApp::spawn().await;
    app.seed_usuario("u1", "Juan", "juan@cafe.test").await;
    let token = app.user_token("u1", "Juan");
    let categoria = seed_categoria(&app, &token, "Bebidas").await;
    seed_producto(&app, &token, &categoria, "CAFE molido", 3.0, true).await;

    // los metacaracteres no actúan como patrón
    let (status, body) = app.get("/productos/buscar/c.fe", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["productos"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn update_overwrites_all_five_fields() {
    let app = TestApp::spawn().await;
    app.seed_usuario("u1", "Juan", "juan@cafe.test").await;
    let token = app.user_token("u1", "Juan");
    let bebidas = seed_categoria(&app, &token, "Bebidas").await;
    let postres = seed_categoria(&app, &token, "Postres").await;
    let creado = seed_producto(&app, &token, &bebidas, "Flan", 4.0, false).await;
    let id = creado["id"].as_str().unwrap();

    let (status, body) = app
        .put(
            &format!("/productos/{id}"),
            Some(&token),
            json!({
                "nombre": "Flan casero",
                "precio": 6.5,
                "descripcion": "con dulce de leche",
                "disponible": true,
                "categoria": postres,
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let producto = &body["producto"];
    assert_eq!(producto["nombre"], json!("Flan casero"));
    assert_eq!(producto["precioUni"], json!(6.5));
    assert_eq!(producto["descripcion"], json!("con dulce de leche"));
    // PUT es el único camino de false -> true
    assert_eq!(producto["disponible"], json!(true));
    assert_eq!(producto["categoria"], json!(postres));

    // vuelve a aparecer en el listado de disponibles
    let (_, body) = app.get("/productos", Some(&token)).await;
    assert_eq!(body["productos"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn update_missing_maps_to_400() {
    let app = TestApp::spawn().await;
    app.seed_usuario("u1", "Juan", "juan@cafe.test").await;
    let token = app.user_token("u1", "Juan");

    let (status, body) = app
        .put(
            "/productos/noexiste",
            Some(&token),
            json!({
                "nombre": "X",
                "precio": 1.0,
                "disponible": true,
                "categoria": "c",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["err"]["message"], json!("El ID no existe"));
}

#[tokio::test]
async fn delete_is_soft_and_idempotent() {
    let app = TestApp::spawn().await;
    app.seed_usuario("u1", "Juan", "juan@cafe.test").await;
    let token = app.user_token("u1", "Juan");
    let categoria = seed_categoria(&app, &token, "Bebidas").await;
    let creado = seed_producto(&app, &token, &categoria, "Cafe", 2.0, true).await;
    let id = creado["id"].as_str().unwrap();

    // la ruta de borrado no lleva token
    let (status, body) = app.delete(&format!("/productos/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["productoBorrado"]["disponible"], json!(false));

    // repetir la baja no es un error
    let (status, body) = app.delete(&format!("/productos/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["productoBorrado"]["disponible"], json!(false));

    // el registro sigue existiendo pero ya no se lista
    let (status, _) = app.get(&format!("/productos/{id}"), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.get("/productos", Some(&token)).await;
    assert_eq!(body["productos"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_missing_maps_to_400() {
    let app = TestApp::spawn().await;

    let (status, body) = app.delete("/productos/noexiste", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["err"]["message"], json!("ID de producto no encontrado"));
}

#[tokio::test]
async fn health_is_public() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}
