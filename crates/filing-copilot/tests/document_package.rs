use std::collections::BTreeSet;
use std::io::{Cursor, Read};
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use chrono::NaiveDate;
use filing_copilot::classification::ClassTable;
use filing_copilot::documents::{documents_router, DocumentAssembler};
use filing_copilot::intake::TrademarkIntake;
use serde_json::json;
use tower::ServiceExt;
use zip::ZipArchive;

fn intake_json() -> serde_json::Value {
    json!({
        "mark_text": "Karoo Roast",
        "nice_classes": [30, 43],
        "slogan": "Slow roasted in the Karoo",
        "applicant": {
            "full_name": "Thandi Nkosi",
            "address_line_1": "12 Long Street",
            "address_line_2": "Unit 4",
            "city": "Cape Town",
            "province": "Western Cape",
            "postal_code": "8001",
            "email": "thandi@example.co.za",
            "phone_number": "+27 21 555 0100"
        }
    })
}

fn intake() -> TrademarkIntake {
    serde_json::from_value(intake_json()).expect("intake parses")
}

fn assembler(dir: &std::path::Path) -> DocumentAssembler {
    DocumentAssembler::new(dir, Arc::new(ClassTable::standard()))
}

fn entries(bytes: &[u8]) -> Vec<(String, u64)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).expect("valid zip");
    (0..archive.len())
        .map(|index| {
            let mut entry = archive.by_index(index).expect("entry readable");
            let mut contents = Vec::new();
            entry.read_to_end(&mut contents).expect("entry inflates");
            assert!(contents.starts_with(b"%PDF-"), "{} is a PDF", entry.name());
            (entry.name().to_string(), contents.len() as u64)
        })
        .collect()
}

#[test]
fn package_contains_three_distinct_non_empty_pdfs() {
    let dir = tempfile::tempdir().expect("temp dir");
    let at = NaiveDate::from_ymd_opt(2025, 3, 14)
        .and_then(|date| date.and_hms_opt(9, 26, 53))
        .expect("valid timestamp");

    let package = assembler(dir.path())
        .assemble_at(&intake(), at)
        .expect("package builds");

    assert_eq!(package.file_name, "Trademark_Package_20250314_092653.zip");
    assert_eq!(package.path, dir.path().join(&package.file_name));
    assert_eq!(std::fs::read(&package.path).expect("written"), package.bytes);

    let listed = entries(&package.bytes);
    assert_eq!(listed.len(), 3);
    assert!(listed.iter().all(|(_, size)| *size > 0));
    let names: BTreeSet<&str> = listed.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        BTreeSet::from([
            "Filing_Guide_Karoo_Roast.pdf",
            "Power_of_Attorney_Karoo_Roast.pdf",
            "TM1_Application_Karoo_Roast.pdf",
        ])
    );
    assert_eq!(package.documents.len(), 3);
}

#[test]
fn missing_output_directory_is_created() {
    let dir = tempfile::tempdir().expect("temp dir");
    let nested = dir.path().join("generated").join("packages");

    let package = assembler(&nested).assemble(&intake()).expect("package builds");

    assert!(nested.is_dir());
    assert!(package.path.starts_with(&nested));
    assert!(package.file_name.starts_with("Trademark_Package_"));
    assert!(package.file_name.ends_with(".zip"));
}

#[test]
fn unwritable_output_directory_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let blocker = dir.path().join("occupied");
    std::fs::write(&blocker, b"not a directory").expect("file written");

    let result = assembler(&blocker).assemble(&intake());
    assert!(result.is_err());
}

#[tokio::test]
async fn generate_route_streams_the_zip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let router = documents_router(Arc::new(assembler(dir.path())));

    let response = router
        .oneshot(
            Request::post("/api/documents/generate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "intake": intake_json() })).expect("encodes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/zip"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .expect("ascii header")
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"Trademark_Package_"));

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    assert_eq!(entries(&bytes).len(), 3);
}

#[tokio::test]
async fn generate_route_rejects_invalid_email() {
    let dir = tempfile::tempdir().expect("temp dir");
    let router = documents_router(Arc::new(assembler(dir.path())));
    let mut payload = intake_json();
    payload["applicant"]["email"] = json!("thandi-at-example");

    let response = router
        .oneshot(
            Request::post("/api/documents/generate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "intake": payload })).expect("encodes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let message = String::from_utf8_lossy(&bytes);
    assert!(message.contains("invalid email address"), "{message}");
    assert_eq!(std::fs::read_dir(dir.path()).expect("dir readable").count(), 0);
}
