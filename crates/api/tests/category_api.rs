//! HTTP-level integration tests for the category endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_category_without_icon(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = app
        .post_form(
            "/api/v1/categories",
            &[("name", "Electronics"), ("description", "Gadgets")],
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Electronics");
    assert_eq!(json["description"], "Gadgets");
    assert!(json["icon"].is_null());
    // Both timestamps come from the same insert.
    assert_eq!(json["created_at"], json["updated_at"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_duplicate_category_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = app
        .post_form("/api/v1/categories", &[("name", "Books")], None)
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .post_form("/api/v1/categories", &[("name", "Books")], None)
        .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");

    // Record count unchanged.
    let list = app.get("/api/v1/categories").await;
    let json = body_json(list).await;
    assert_eq!(json["total_elements"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_category_with_icon_stores_asset(pool: PgPool) {
    let app = common::build_test_app(pool);
    let icon_bytes: &[u8] = b"\x89PNG-fake-icon-content";

    let response = app
        .post_form(
            "/api/v1/categories",
            &[("name", "Electronics")],
            Some(("icon", "my photo.PNG", icon_bytes)),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;

    // A generated name, never the client's filename.
    let stored = json["icon"].as_str().unwrap();
    assert_ne!(stored, "my photo.PNG");
    assert!(stored.ends_with(".png"));

    // The asset round-trips through the serving route.
    let served = app.get(&format!("/uploads/{stored}")).await;
    assert_eq!(served.status(), StatusCode::OK);
    assert_eq!(
        served.headers()["content-type"].to_str().unwrap(),
        "image/png"
    );
    assert_eq!(body_bytes(served).await, icon_bytes);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_category_rejects_invalid_name(pool: PgPool) {
    let app = common::build_test_app(pool);

    let blank = app
        .post_form("/api/v1/categories", &[("name", "   ")], None)
        .await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

    let long_name = "x".repeat(101);
    let long = app
        .post_form("/api/v1/categories", &[("name", &long_name)], None)
        .await;
    assert_eq!(long.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Get / update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = app.get("/api/v1/categories/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_category_replaces_icon_reference(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = app
        .post_form(
            "/api/v1/categories",
            &[("name", "Books")],
            Some(("icon", "old.png", b"old-bytes".as_slice())),
        )
        .await;
    let created = body_json(created).await;
    let id = created["id"].as_i64().unwrap();
    let old_icon = created["icon"].as_str().unwrap().to_string();

    let updated = app
        .put_form(
            &format!("/api/v1/categories/{id}"),
            &[("description", "Paper and ink")],
            Some(("icon", "new.jpg", b"new-bytes".as_slice())),
        )
        .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = body_json(updated).await;

    let new_icon = updated["icon"].as_str().unwrap();
    assert_ne!(new_icon, old_icon);
    assert!(new_icon.ends_with(".jpg"));
    assert_eq!(updated["description"], "Paper and ink");

    // The replaced asset is left in storage, not deleted.
    let old_served = app.get(&format!("/uploads/{old_icon}")).await;
    assert_eq!(old_served.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_nonexistent_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = app
        .put_form("/api/v1/categories/999999", &[("name", "Ghost")], None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_category_cascades_to_products(pool: PgPool) {
    let app = common::build_test_app(pool);

    let cat = app
        .post_form("/api/v1/categories", &[("name", "Electronics")], None)
        .await;
    let cat_id = body_json(cat).await["id"].as_i64().unwrap();
    let cat_id_str = cat_id.to_string();

    let product = app
        .post_form(
            "/api/v1/products",
            &[
                ("name", "Phone"),
                ("unit_price", "500.0"),
                ("category_id", &cat_id_str),
            ],
            None,
        )
        .await;
    let product_id = body_json(product).await["id"].as_i64().unwrap();

    let deleted = app.delete(&format!("/api/v1/categories/{cat_id}")).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    // The owned product went with it.
    let response = app.get(&format!("/api/v1/products/{product_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_nonexistent_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = app.delete("/api/v1/categories/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Listing + search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_carries_pagination_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);

    for i in 0..7 {
        app.post_form("/api/v1/categories", &[("name", &format!("Cat {i}"))], None)
            .await;
    }

    let response = app.get("/api/v1/categories?page=1&size=3").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["items"].as_array().unwrap().len(), 3);
    assert_eq!(json["total_elements"], 7);
    assert_eq!(json["total_pages"], 3);
    assert_eq!(json["page"], 1);
    assert_eq!(json["page_size"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_keyword_is_equivalent_to_list(pool: PgPool) {
    let app = common::build_test_app(pool);

    for name in ["Electronics", "Books", "Clothing"] {
        app.post_form("/api/v1/categories", &[("name", name)], None)
            .await;
    }

    let listed = body_json(app.get("/api/v1/categories?page=0&size=2").await).await;
    let searched = body_json(app.get("/api/v1/categories?keyword=&page=0&size=2").await).await;
    let blank = body_json(
        app.get("/api/v1/categories?keyword=%20%20&page=0&size=2")
            .await,
    )
    .await;

    assert_eq!(listed, searched);
    assert_eq!(listed, blank);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_matches_name_or_description(pool: PgPool) {
    let app = common::build_test_app(pool);

    app.post_form(
        "/api/v1/categories",
        &[("name", "Electronics"), ("description", "Gadgets")],
        None,
    )
    .await;
    app.post_form(
        "/api/v1/categories",
        &[("name", "Books"), ("description", "gadget manuals")],
        None,
    )
    .await;
    app.post_form("/api/v1/categories", &[("name", "Clothing")], None)
        .await;

    let json = body_json(app.get("/api/v1/categories?keyword=gadget").await).await;
    assert_eq!(json["total_elements"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn out_of_range_page_params_are_clamped(pool: PgPool) {
    let app = common::build_test_app(pool);

    app.post_form("/api/v1/categories", &[("name", "Solo")], None)
        .await;

    let json = body_json(app.get("/api/v1/categories?page=-5&size=0").await).await;
    assert_eq!(json["page"], 0);
    assert_eq!(json["page_size"], 1);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn maximum_page_index_returns_empty_page(pool: PgPool) {
    let app = common::build_test_app(pool);

    app.post_form("/api/v1/categories", &[("name", "Solo")], None)
        .await;

    // The largest representable page index must not panic or error in the
    // offset arithmetic.
    let response = app
        .get("/api/v1/categories?page=9223372036854775807&size=100")
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["items"].as_array().unwrap().is_empty());
    assert_eq!(json["total_elements"], 1);
}
