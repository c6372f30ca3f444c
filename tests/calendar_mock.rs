use economic_calendar::components::economic_calendar::{
    blocking, CalendarClient, CalendarOutput, DateTimeFields, ReturnType, TimeWindow, TimeWindowInput,
};
use economic_calendar::error::Error;
use mockito::{Matcher, Server};
use serde_json::json;

const SAMPLE_BODY: &str = r#"{"status":"ok","result":[{"title":"CPI"}]}"#;

fn client_for(server: &Server) -> CalendarClient {
    CalendarClient::with_endpoint(&format!("{}/events", server.url())).expect("mock server url is valid")
}

fn july_22() -> TimeWindowInput {
    TimeWindowInput::from_fields(
        DateTimeFields { year: 2023, month: 7, day: 22, hour: 0, min: 0, sec: 0, offset: 0 },
        DateTimeFields { year: 2023, month: 7, day: 22, hour: 23, min: 59, sec: 59, offset: 0 },
    )
}

/// The request carries the formatted window and the given countries
#[tokio::test]
async fn test_query_parameters_from_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/events")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "2023-07-22T00:00:00.000Z".into()),
            Matcher::UrlEncoded("to".into(), "2023-07-22T23:59:59.000Z".into()),
            Matcher::UrlEncoded("countries".into(), "US,JP".into()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(SAMPLE_BODY)
        .create_async()
        .await;

    let countries = vec!["US".to_string(), "JP".to_string()];
    let output = client_for(&server)
        .get_calendar(&july_22(), Some(countries.as_slice()), &ReturnType::Records)
        .await
        .unwrap();

    assert_eq!(output, Some(CalendarOutput::Records(json!([{"title": "CPI"}]))));
    mock.assert_async().await;
}

/// No countries and no window fall back to the defaults
#[tokio::test]
async fn test_default_query_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/events")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded(
                "countries".into(),
                "US,EU,IT,NZ,CH,AU,FR,JP,ZA,TR,CA,DE,MX,ES,GB".into(),
            ),
            Matcher::Regex(r"from=\d{4}-\d{2}-\d{2}T00%3A00%3A00\.000Z".into()),
            Matcher::Regex(r"to=\d{4}-\d{2}-\d{2}T23%3A59%3A59\.000Z".into()),
        ]))
        .with_body(SAMPLE_BODY)
        .create_async()
        .await;

    let output = client_for(&server)
        .get_calendar(&TimeWindowInput::default(), None, &ReturnType::Status)
        .await
        .unwrap();

    assert_eq!(output, Some(CalendarOutput::Status(json!("ok"))));
    mock.assert_async().await;
}

/// Every return type against the same mocked response
#[tokio::test]
async fn test_return_types() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/events")
        .match_query(Matcher::Any)
        .with_body(SAMPLE_BODY)
        .expect(5)
        .create_async()
        .await;
    let client = client_for(&server);
    let window = july_22();

    let raw = client.get_calendar(&window, None, &ReturnType::Raw).await.unwrap();
    assert_eq!(
        raw,
        Some(CalendarOutput::Raw(json!({"status": "ok", "result": [{"title": "CPI"}]})))
    );

    let records = client.get_calendar(&window, None, &"records".parse().unwrap()).await.unwrap();
    assert_eq!(records, Some(CalendarOutput::Records(json!([{"title": "CPI"}]))));

    let status = client.get_calendar(&window, None, &"status".parse().unwrap()).await.unwrap();
    assert_eq!(status, Some(CalendarOutput::Status(json!("ok"))));

    let table = client.get_calendar(&window, None, &"pandas".parse().unwrap()).await.unwrap();
    match table {
        Some(CalendarOutput::Table(table)) => {
            assert_eq!(table.len(), 1);
            assert_eq!(table.get(0, "title"), Some(&json!("CPI")));
        }
        other => panic!("expected a table, got {:?}", other),
    }

    let bogus = client.get_calendar(&window, None, &"bogus".parse().unwrap()).await.unwrap();
    assert_eq!(bogus, None);

    mock.assert_async().await;
}

/// A response without `result` shapes to nothing for records and tables
#[tokio::test]
async fn test_missing_result() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/events")
        .match_query(Matcher::Any)
        .with_body(r#"{"status":"error"}"#)
        .create_async()
        .await;
    let client = client_for(&server);

    let records = client.get_calendar(&july_22(), None, &ReturnType::Records).await.unwrap();
    assert_eq!(records, None);

    let table = client.get_calendar(&july_22(), None, &ReturnType::Table).await.unwrap();
    assert_eq!(table, None);
}

/// A null `result` is an empty table, not an error
#[tokio::test]
async fn test_null_result_table() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/events")
        .match_query(Matcher::Any)
        .with_body(r#"{"status":"ok","result":null}"#)
        .create_async()
        .await;

    let output = client_for(&server)
        .get_calendar(&july_22(), None, &ReturnType::Table)
        .await
        .unwrap();

    match output {
        Some(CalendarOutput::Table(table)) => assert!(table.is_empty()),
        other => panic!("expected an empty table, got {:?}", other),
    }
}

/// The HTTP status is not inspected when the body is JSON
#[tokio::test]
async fn test_error_status_with_json_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/events")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"status":"error","message":"upstream down"}"#)
        .create_async()
        .await;

    let window = TimeWindow {
        from: "2023-07-22T00:00:00.000Z".to_string(),
        to: "2023-07-22T23:59:59.000Z".to_string(),
    };
    let data = client_for(&server).fetch_raw(&window, &["US".to_string()]).await.unwrap();

    assert_eq!(data, json!({"status": "error", "message": "upstream down"}));
}

/// A body that is not JSON is a parse failure
#[tokio::test]
async fn test_non_json_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/events")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let result = client_for(&server)
        .get_calendar(&july_22(), None, &ReturnType::Records)
        .await;

    assert!(matches!(result, Err(Error::Json(_))));
}

/// Connection failures reach the caller as transport errors
#[tokio::test]
async fn test_transport_failure() {
    let client = CalendarClient::with_endpoint("http://127.0.0.1:1/events").unwrap();
    let result = client
        .get_calendar(&july_22(), None, &ReturnType::Raw)
        .await;

    assert!(matches!(result, Err(Error::Http(_))));
}

/// The blocking client sends the same request on the calling thread
#[test]
fn test_blocking_get_calendar() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/events")
        .match_query(Matcher::UrlEncoded("countries".into(), "GB".into()))
        .with_body(SAMPLE_BODY)
        .create();

    let countries = vec!["GB".to_string()];
    let client = blocking::CalendarClient::with_endpoint(&format!("{}/events", server.url())).unwrap();
    let output = client
        .get_calendar(&july_22(), Some(countries.as_slice()), &ReturnType::Status)
        .unwrap();

    assert_eq!(output, Some(CalendarOutput::Status(json!("ok"))));
    mock.assert();
}

#[test]
fn test_blocking_fetch_raw() {
    let mut server = Server::new();
    server
        .mock("GET", "/events")
        .match_query(Matcher::Any)
        .with_body(SAMPLE_BODY)
        .create();

    let window = TimeWindow {
        from: "2023-07-21T00:00:00.000Z".to_string(),
        to: "2023-08-20T00:00:00.000Z".to_string(),
    };
    let client = blocking::CalendarClient::with_endpoint(&format!("{}/events", server.url())).unwrap();
    let data = client.fetch_raw(&window, &["US".to_string()]).unwrap();

    assert_eq!(data["result"][0]["title"], "CPI");
}
