use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use object_store::ObjectStore;
use serde_json::json;
use test_utils::factory;

use super::{multipart_body, TestApp};

/// Tests the full lifecycle of a catalog record through the HTTP surface.
///
/// Expected: 201 → 200 list/show/update → 200 delete → 404 on second delete
#[tokio::test]
async fn business_unit_lifecycle() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send_json(
            "POST",
            "/api/business-units",
            json!({ "name": "  Norte ", "slug": "NORTE", "active": "1" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["type"], "success");
    assert_eq!(body["title"], "Éxito");
    assert_eq!(body["data"]["name"], "Norte");
    assert_eq!(body["data"]["slug"], "norte");
    assert_eq!(body["data"]["active"], true);
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app.get("/api/business-units?page=1&limit=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["meta"]["total"], 1);
    assert_eq!(body["data"]["meta"]["per_page"], 5);
    assert_eq!(body["data"]["meta"]["last_page"], 1);
    assert_eq!(body["data"]["data"][0]["id"], id);

    let (status, body) = app
        .send_json(
            "PUT",
            &format!("/api/business-units/{}", id),
            json!({ "name": "Norte Industrial" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Norte Industrial");
    assert_eq!(body["data"]["slug"], "norte");

    let (status, _) = app.delete(&format!("/api/business-units/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get(&format!("/api/business-units/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["type"], "warning");

    let (status, _) = app.delete(&format!("/api/business-units/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests that duplicates answer 409 with the localized conflict message.
#[tokio::test]
async fn reports_conflict_in_requested_language() {
    let app = TestApp::new().await;
    let payload = json!({ "name": "Norte", "slug": "norte" });

    let (status, _) = app
        .send_json("POST", "/api/business-units", payload.clone())
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/api/business-units")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["type"], "warning");
    assert_eq!(body["title"], "Warning");
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

/// Tests the status codes of malformed requests.
///
/// Expected: 422 for a failing field rule, 400 for bad JSON or a bad id
#[tokio::test]
async fn rejects_malformed_requests() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send_json("POST", "/api/business-units", json!({ "name": "", "slug": "norte" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["data"], json!({}));

    let (status, _) = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/api/business-units")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.get("/api/business-units/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "warning");
}

/// Tests that the actor behind a bearer token is resolved and an unknown token
/// is refused.
#[tokio::test]
async fn resolves_bearer_token() {
    let app = TestApp::new().await;
    factory::user::UserFactory::new(app.db())
        .api_token("valid-token")
        .build()
        .await
        .unwrap();

    let request = |token: &str| {
        Request::builder()
            .method("POST")
            .uri("/api/banks")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::from(json!({ "name": "Banorte", "code": "072" }).to_string()))
            .unwrap()
    };

    let (status, _) = app.send(request("valid-token")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.send(request("stolen-token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Tests the shift change endpoints: a swap returns both rows and deleting one
/// side removes the other.
#[tokio::test]
async fn shift_change_pair_endpoints() {
    let app = TestApp::new().await;
    let db = app.db();

    let (unit, first) = factory::helpers::create_employee_with_dependencies(db)
        .await
        .unwrap();
    let second = factory::create_employee(db, unit.id).await.unwrap();
    let morning = factory::create_shift(db).await.unwrap();
    let night = factory::create_shift(db).await.unwrap();

    let (status, body) = app
        .send_json(
            "POST",
            "/api/employee-shift-changes",
            json!({
                "employee_id_from": first.id,
                "shift_id_from": morning.id,
                "date_from": "2024-01-10T00:00:00.000Z",
                "employee_id_to": second.id,
                "shift_id_to": night.id,
                "date_to": "2024-01-11",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["employee_id_from"], second.id);

    let (_, body) = app.get("/api/employee-shift-changes").await;
    assert_eq!(body["data"]["meta"]["total"], 2);

    let side = rows[0]["id"].as_i64().unwrap();
    let (status, _) = app
        .send_json(
            "PUT",
            &format!("/api/employee-shift-changes/{}", side),
            json!({ "note": "Autorizado por supervisor" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .delete(&format!("/api/employee-shift-changes/{}", side))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = app.get("/api/employee-shift-changes").await;
    assert_eq!(body["data"]["meta"]["total"], 0);
}

/// Tests multipart submission of proceeding files.
#[tokio::test]
async fn proceeding_file_multipart() {
    let app = TestApp::new().await;
    let (_, employee) = factory::helpers::create_employee_with_dependencies(app.db())
        .await
        .unwrap();
    let employee_id = employee.id.to_string();

    let submit = |fields: Vec<(&str, &str)>, file: Option<(&str, &[u8])>| {
        let (content_type, body) = multipart_body(&fields, file);
        Request::builder()
            .method("POST")
            .uri("/api/proceeding-files")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    };

    let (status, body) = app
        .send(submit(
            vec![
                ("employee_id", employee_id.as_str()),
                ("name", "Contrato"),
                ("description", "Pendiente de firma"),
            ],
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["file_url"].is_null());

    let (status, _) = app
        .send(submit(
            vec![("employee_id", employee_id.as_str()), ("name", "Contrato")],
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .send(submit(
            vec![
                ("employee_id", employee_id.as_str()),
                ("name", "Acta"),
                ("expiration_at", "2030-01-31"),
            ],
            Some(("acta.pdf", b"%PDF-1.4".as_slice())),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["expiration_at"], "2030-01-31");
    let url = body["data"]["file_url"].as_str().unwrap();
    assert!(app.store.head(&TestApp::key_of(url)).await.is_ok());
}

/// Tests the manual trigger of the birthday reminder batch.
#[tokio::test]
async fn runs_birthday_reminders_on_demand() {
    let app = TestApp::new().await;
    let db = app.db();

    let unit = factory::business_unit::BusinessUnitFactory::new(db)
        .slug("norte")
        .build()
        .await
        .unwrap();
    factory::employee::EmployeeFactory::new(db, unit.id)
        .birthday(chrono::NaiveDate::from_ymd_opt(1992, 3, 4))
        .build()
        .await
        .unwrap();
    factory::create_user(db).await.unwrap();

    let (status, body) = app
        .send_json(
            "POST",
            "/api/notifications/birthdays/run",
            json!({ "date": "2025-03-04" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "employees": 1, "sent": 1, "failed": 0 }));
    assert_eq!(app.mailer.sent().len(), 1);
}
