// payslip-client/tests/api_client.rs
// Gateway and facade behavior against a mock payroll server.

use httpmock::prelude::*;
use payslip_client::{ClientConfig, ClientError, PayrollApi, PayrollFilter};
use serde_json::json;

fn config_for(server: &MockServer) -> ClientConfig {
    init_tracing();
    ClientConfig::new(server.base_url())
}

/// Make the boundary logging visible when running with RUST_LOG set.
fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn employee_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "employee_no": format!("EMP{id:03}"),
        "department": "技术部",
        "position": "工程师",
        "email": format!("user{id}@example.com"),
        "phone": "13800000000",
        "status": "active",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

fn payroll_json(id: &str, employee_id: i64, period: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": employee_id,
        "period": period,
        "template_id": 1,
        "payroll_data": "{\"basic_salary\":5000,\"tax\":400}",
        "total_gross": 5000.0,
        "total_net": 4600.0,
        "status": status,
        "created_at": "2024-08-01T00:00:00Z",
        "updated_at": "2024-08-01T00:00:00Z"
    })
}

#[tokio::test]
async fn bearer_header_is_sent_when_token_is_set() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/templates")
            .header("authorization", "Bearer abc");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"data": []}));
    });

    let api = PayrollApi::new(&config_for(&server).with_token("abc")).unwrap();
    let templates = api.get_templates().await.unwrap();
    assert!(templates.is_empty());
    mock.assert();
}

#[tokio::test]
async fn no_authorization_header_without_token() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/templates")
            .header_missing("authorization");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"data": []}));
    });

    let api = PayrollApi::new(&config_for(&server)).unwrap();
    api.get_templates().await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn server_error_message_is_surfaced_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees/99");
        then.status(404)
            .header("content-type", "application/json")
            .json_body(json!({"error": "not found"}));
    });

    let api = PayrollApi::new(&config_for(&server)).unwrap();
    let err = api.get_employee(99).await.unwrap_err();
    assert_eq!(err.to_string(), "not found");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn missing_error_field_falls_back_to_generic_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees/99");
        then.status(500)
            .header("content-type", "application/json")
            .json_body(json!({}));
    });

    let api = PayrollApi::new(&config_for(&server)).unwrap();
    let err = api.get_employee(99).await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed");
}

#[tokio::test]
async fn malformed_success_body_is_a_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/templates");
        then.status(200)
            .header("content-type", "application/json")
            .body("not json");
    });

    let api = PayrollApi::new(&config_for(&server)).unwrap();
    let err = api.get_templates().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn missing_data_field_is_an_invalid_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/templates");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"message": "ok"}));
    });

    let api = PayrollApi::new(&config_for(&server)).unwrap();
    let err = api.get_templates().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn employee_list_filter_goes_out_as_query_param() {
    let server = MockServer::start();
    let filtered = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/employees")
            .query_param("status", "active");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"data": [employee_json(1, "张三")]}));
    });

    let api = PayrollApi::new(&config_for(&server)).unwrap();
    let employees = api
        .get_employees(Some(payslip_client::EmployeeStatus::Active))
        .await
        .unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].name, "张三");
    filtered.assert();
}

#[tokio::test]
async fn unfiltered_payroll_list_sends_no_query_string() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/payrolls")
            .query_param_missing("status")
            .query_param_missing("period")
            .query_param_missing("employee_id");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"data": [payroll_json("u1", 1, "2024-08", "draft")]}));
    });

    let api = PayrollApi::new(&config_for(&server)).unwrap();
    let payrolls = api.get_payrolls(&PayrollFilter::default()).await.unwrap();
    assert_eq!(payrolls.len(), 1);
    assert_eq!(payrolls[0].period, "2024-08");
    mock.assert();
}

#[tokio::test]
async fn create_employee_posts_payload_unchanged() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/employees").json_body(json!({
            "name": "李四",
            "employee_no": "EMP002",
            "department": "人事部",
            "position": "专员",
            "email": "lisi@example.com",
            "phone": "13900000000",
            "join_date": "2024-03-01"
        }));
        then.status(201)
            .header("content-type", "application/json")
            .json_body(json!({"data": employee_json(2, "李四")}));
    });

    let api = PayrollApi::new(&config_for(&server)).unwrap();
    let created = api
        .create_employee(&payslip_client::EmployeeCreate {
            name: "李四".into(),
            employee_no: "EMP002".into(),
            department: "人事部".into(),
            position: "专员".into(),
            email: "lisi@example.com".into(),
            phone: "13900000000".into(),
            join_date: Some("2024-03-01".into()),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 2);
    mock.assert();
}

#[tokio::test]
async fn publish_posts_one_batch_request_and_returns_summary() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/payrolls/publish")
            .json_body(json!({
                "payroll_ids": ["u1", "u2"],
                "notify_employees": false
            }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "message": "Successfully published 2 payrolls",
                "data": ["u1", "u2"]
            }));
    });

    let api = PayrollApi::new(&config_for(&server)).unwrap();
    let outcome = api
        .publish_payrolls(&["u1".to_string(), "u2".to_string()], false)
        .await
        .unwrap();
    assert_eq!(outcome.message, "Successfully published 2 payrolls");
    assert_eq!(outcome.ids, vec!["u1", "u2"]);
    mock.assert();
}

#[tokio::test]
async fn employee_payroll_period_filter_is_appended_only_when_given() {
    let server = MockServer::start();
    let unfiltered = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/payrolls/employee/7")
            .query_param_missing("period");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"data": [
                payroll_json("u1", 7, "2024-08", "published"),
                payroll_json("u2", 7, "2024-07", "signed")
            ]}));
    });
    let filtered = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/payrolls/employee/7")
            .query_param("period", "2024-08");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"data": [payroll_json("u1", 7, "2024-08", "published")]}));
    });

    let api = PayrollApi::new(&config_for(&server)).unwrap();
    let all = api.get_employee_payrolls(7, None).await.unwrap();
    assert_eq!(all.len(), 2);
    let august = api.get_employee_payrolls(7, Some("2024-08")).await.unwrap();
    assert_eq!(august.len(), 1);
    unfiltered.assert();
    filtered.assert();
}

#[tokio::test]
async fn delete_returns_the_server_summary_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/payrolls/u1");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"message": "Payroll deleted successfully"}));
    });

    let api = PayrollApi::new(&config_for(&server)).unwrap();
    let message = api.delete_payroll("u1").await.unwrap();
    assert_eq!(message, "Payroll deleted successfully");
}

#[tokio::test]
async fn login_stores_token_and_logout_clears_it() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/login").json_body(json!({
            "username": "admin",
            "password": "secret",
            "remember": false
        }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "token": "tok-123",
                "expires_at": "2026-09-01T00:00:00Z",
                "username": "admin"
            }));
    });
    let authed = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/templates")
            .header("authorization", "Bearer tok-123");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"data": []}));
    });
    let anonymous = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/notifications")
            .header_missing("authorization");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"data": []}));
    });

    let mut api = PayrollApi::new(&config_for(&server)).unwrap();
    assert!(api.token().is_none());

    let login = api.login("admin", "secret", false).await.unwrap();
    assert_eq!(login.username, "admin");
    assert_eq!(api.token(), Some("tok-123"));

    api.get_templates().await.unwrap();
    authed.assert();

    api.logout();
    assert!(api.token().is_none());
    api.get_notifications(None).await.unwrap();
    anonymous.assert();
}

#[tokio::test]
async fn resend_notification_posts_the_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/notifications/resend")
            .json_body(json!({"notification_id": 42}));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"message": "Notification resent successfully"}));
    });

    let api = PayrollApi::new(&config_for(&server)).unwrap();
    let message = api.resend_notification(42).await.unwrap();
    assert_eq!(message, "Notification resent successfully");
    mock.assert();
}
