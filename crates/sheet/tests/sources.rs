use cohortboard_sheet::{
    CsvFileSource, GoogleAuth, GoogleSheetsSource, SheetError, SheetSource, StaticSource,
    UpdateColumns, STARTUP_COLUMN,
};
use std::io::Write;
use tempfile::NamedTempFile;
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ===== Google Sheets =====

#[tokio::test]
async fn test_google_first_worksheet_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spreadsheets/abc"))
        .and(query_param("fields", "sheets.properties.title"))
        .and(query_param("key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sheets": [
                {"properties": {"title": "Responses"}},
                {"properties": {"title": "Archive"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/spreadsheets/abc/values/Responses"))
        .and(query_param("key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "range": "Responses!A1:Z1000",
            "majorDimension": "ROWS",
            "values": [
                [" Startup Name ", "Week #"],
                ["Acme", "1"],
                ["Globex"]
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source = GoogleSheetsSource::new("updates", "abc", GoogleAuth::ApiKey("secret".into()))
        .unwrap()
        .with_base_url(server.uri());
    let snapshot = source.fetch().await.expect("fetch sheet");

    assert_eq!(snapshot.name(), "updates");
    assert_eq!(snapshot.headers(), &[STARTUP_COLUMN, "Week #"]);
    assert_eq!(snapshot.row_count(), 2);
    assert_eq!(snapshot.rows()[1], vec!["Globex", ""]);
}

#[tokio::test]
async fn test_google_explicit_range_with_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spreadsheets/abc/values/Sheet1"))
        .and(bearer_token("token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "values": [["A"], ["1"]]
        })))
        .mount(&server)
        .await;

    let source = GoogleSheetsSource::new("s", "abc", GoogleAuth::BearerToken("token-123".into()))
        .unwrap()
        .with_base_url(server.uri())
        .with_range("Sheet1");
    let snapshot = source.fetch().await.expect("fetch sheet");
    assert_eq!(snapshot.column("A"), Some(vec!["1"]));
}

#[tokio::test]
async fn test_google_empty_sheet_has_no_values_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spreadsheets/abc/values/Sheet1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "range": "Sheet1!A1:Z1000",
            "majorDimension": "ROWS"
        })))
        .mount(&server)
        .await;

    let source = GoogleSheetsSource::new("s", "abc", GoogleAuth::Anonymous)
        .unwrap()
        .with_base_url(server.uri())
        .with_range("Sheet1");
    let snapshot = source.fetch().await.expect("fetch sheet");
    assert!(snapshot.headers().is_empty());
    assert_eq!(snapshot.row_count(), 0);
}

#[tokio::test]
async fn test_google_api_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spreadsheets/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": {"code": 404, "message": "Requested entity was not found.", "status": "NOT_FOUND"}
        })))
        .mount(&server)
        .await;

    let source = GoogleSheetsSource::new("s", "missing", GoogleAuth::Anonymous)
        .unwrap()
        .with_base_url(server.uri());
    let err = source.fetch().await.unwrap_err();

    match err {
        SheetError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Requested entity was not found.");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_google_spreadsheet_without_worksheets() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spreadsheets/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let source = GoogleSheetsSource::new("s", "abc", GoogleAuth::Anonymous)
        .unwrap()
        .with_base_url(server.uri());
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, SheetError::NoWorksheets { .. }));
}

// ===== CSV files =====

#[tokio::test]
async fn test_csv_file_source() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Startup Name,Week #,Revenue generated?").unwrap();
    writeln!(file, "Acme,1,100").unwrap();
    writeln!(file, "Acme,2,250").unwrap();

    let source = CsvFileSource::new("updates", file.path());
    let snapshot = source.fetch().await.expect("read csv");

    assert_eq!(source.label(), "updates");
    assert_eq!(snapshot.row_count(), 2);
    assert_eq!(snapshot.column("Revenue generated?"), Some(vec!["100", "250"]));
}

#[tokio::test]
async fn test_csv_file_missing() {
    let source = CsvFileSource::new("updates", "/nonexistent/updates.csv");
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, SheetError::Io(_)));
}

// ===== Schema mapping =====

#[tokio::test]
async fn test_static_source_fails_fast_on_schema() {
    let source = StaticSource::from_rows("updates", &[&["Startup Name", "Week #"], &["Acme", "1"]]);
    let snapshot = source.fetch().await.unwrap();
    let err = UpdateColumns::default().map(&snapshot).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Column 'Revenue generated?' not found in sheet 'updates'"
    );
}
