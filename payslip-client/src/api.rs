//! Domain operations facade
//!
//! One method per resource operation: a thin binding of HTTP verb, endpoint
//! path and request/response shape onto the gateway. No local validation;
//! malformed payloads and unknown ids are the server's call.

use crate::{ClientConfig, ClientError, ClientResult, HttpClient};
use shared::models::{
    Employee, EmployeeCreate, EmployeeStatus, EmployeeUpdate, Notification, NotificationStatus,
    Payroll, PayrollCreate, PayrollFilter, PublishOutcome, PublishRequest, ResendRequest,
    SignatureRecord, SignatureRequest, Template, TemplateCreate, TemplateUpdate,
};
use shared::{ApiResponse, LoginRequest, LoginResponse, TokenVerification};

/// Typed operations over the payroll admin API
#[derive(Debug, Clone)]
pub struct PayrollApi {
    http: HttpClient,
}

impl PayrollApi {
    /// Create a facade from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a facade over an existing gateway
    pub fn from_gateway(http: HttpClient) -> Self {
        Self { http }
    }

    /// Access the underlying gateway
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    /// Unwrap the `data` field of a success envelope
    fn data<T>(resp: ApiResponse<T>, what: &str) -> ClientResult<T> {
        resp.data
            .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {what}")))
    }

    /// Return the server's summary message for message-only operations
    fn message(resp: ApiResponse<serde_json::Value>) -> String {
        resp.message.unwrap_or_default()
    }

    // ========== Auth API ==========

    /// Login and store the returned token on the gateway.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        remember: bool,
    ) -> ClientResult<LoginResponse> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            remember,
        };
        // Login is the one endpoint that answers without the data envelope
        let resp: LoginResponse = self.http.post("api/v1/auth/login", &req).await?;
        self.http.set_token(resp.token.clone());
        Ok(resp)
    }

    /// Verify the stored token against the server.
    pub async fn verify_token(&self) -> ClientResult<TokenVerification> {
        self.http.post_empty("api/v1/auth/verify").await
    }

    /// Drop the stored token. The server keeps no session state, so logout
    /// is purely client-side.
    pub fn logout(&mut self) {
        self.http.clear_token();
    }

    // ========== Employee API ==========

    pub async fn get_employees(
        &self,
        status: Option<EmployeeStatus>,
    ) -> ClientResult<Vec<Employee>> {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }
        let resp: ApiResponse<Vec<Employee>> =
            self.http.get_query("api/v1/employees", &query).await?;
        Self::data(resp, "employee list")
    }

    pub async fn create_employee(&self, employee: &EmployeeCreate) -> ClientResult<Employee> {
        let resp: ApiResponse<Employee> = self.http.post("api/v1/employees", employee).await?;
        Self::data(resp, "employee data")
    }

    pub async fn get_employee(&self, employee_id: i64) -> ClientResult<Employee> {
        let resp: ApiResponse<Employee> = self
            .http
            .get(&format!("api/v1/employees/{employee_id}"))
            .await?;
        Self::data(resp, "employee data")
    }

    pub async fn update_employee(
        &self,
        employee_id: i64,
        employee: &EmployeeUpdate,
    ) -> ClientResult<Employee> {
        let resp: ApiResponse<Employee> = self
            .http
            .put(&format!("api/v1/employees/{employee_id}"), employee)
            .await?;
        Self::data(resp, "employee data")
    }

    /// Delete an employee. The server soft-deletes and answers with a
    /// summary of what it did.
    pub async fn delete_employee(&self, employee_id: i64) -> ClientResult<String> {
        let resp = self
            .http
            .delete(&format!("api/v1/employees/{employee_id}"))
            .await?;
        Ok(Self::message(resp))
    }

    // ========== Template API ==========

    pub async fn get_templates(&self) -> ClientResult<Vec<Template>> {
        let resp: ApiResponse<Vec<Template>> = self.http.get("api/v1/templates").await?;
        Self::data(resp, "template list")
    }

    pub async fn create_template(&self, template: &TemplateCreate) -> ClientResult<Template> {
        let resp: ApiResponse<Template> = self.http.post("api/v1/templates", template).await?;
        Self::data(resp, "template data")
    }

    pub async fn update_template(
        &self,
        template_id: i64,
        template: &TemplateUpdate,
    ) -> ClientResult<Template> {
        let resp: ApiResponse<Template> = self
            .http
            .put(&format!("api/v1/templates/{template_id}"), template)
            .await?;
        Self::data(resp, "template data")
    }

    /// Delete a template. Templates still referenced by payrolls are
    /// disabled instead; the message says which happened.
    pub async fn delete_template(&self, template_id: i64) -> ClientResult<String> {
        let resp = self
            .http
            .delete(&format!("api/v1/templates/{template_id}"))
            .await?;
        Ok(Self::message(resp))
    }

    // ========== Payroll API ==========

    pub async fn get_payrolls(&self, filter: &PayrollFilter) -> ClientResult<Vec<Payroll>> {
        let resp: ApiResponse<Vec<Payroll>> = self
            .http
            .get_query("api/v1/payrolls", &filter.to_query())
            .await?;
        Self::data(resp, "payroll list")
    }

    pub async fn create_payroll(&self, payroll: &PayrollCreate) -> ClientResult<Payroll> {
        let resp: ApiResponse<Payroll> = self.http.post("api/v1/payrolls", payroll).await?;
        Self::data(resp, "payroll data")
    }

    pub async fn get_payroll(&self, payroll_id: &str) -> ClientResult<Payroll> {
        let resp: ApiResponse<Payroll> = self
            .http
            .get(&format!("api/v1/payrolls/{payroll_id}"))
            .await?;
        Self::data(resp, "payroll data")
    }

    pub async fn update_payroll(
        &self,
        payroll_id: &str,
        payroll: &PayrollCreate,
    ) -> ClientResult<Payroll> {
        let resp: ApiResponse<Payroll> = self
            .http
            .put(&format!("api/v1/payrolls/{payroll_id}"), payroll)
            .await?;
        Self::data(resp, "payroll data")
    }

    pub async fn delete_payroll(&self, payroll_id: &str) -> ClientResult<String> {
        let resp = self
            .http
            .delete(&format!("api/v1/payrolls/{payroll_id}"))
            .await?;
        Ok(Self::message(resp))
    }

    /// Publish a batch of draft payrolls in one request. The id list is not
    /// validated locally; an empty or stale list is rejected server-side.
    pub async fn publish_payrolls(
        &self,
        payroll_ids: &[String],
        notify_employees: bool,
    ) -> ClientResult<PublishOutcome> {
        let req = PublishRequest {
            payroll_ids: payroll_ids.to_vec(),
            notify_employees,
        };
        let resp: ApiResponse<Vec<String>> =
            self.http.post("api/v1/payrolls/publish", &req).await?;
        Ok(PublishOutcome {
            message: resp.message.unwrap_or_default(),
            ids: resp.data.unwrap_or_default(),
        })
    }

    /// Published and signed payrolls for one employee, newest period first.
    pub async fn get_employee_payrolls(
        &self,
        employee_id: i64,
        period: Option<&str>,
    ) -> ClientResult<Vec<Payroll>> {
        let mut query = Vec::new();
        if let Some(period) = period {
            query.push(("period", period.to_string()));
        }
        let resp: ApiResponse<Vec<Payroll>> = self
            .http
            .get_query(&format!("api/v1/payrolls/employee/{employee_id}"), &query)
            .await?;
        Self::data(resp, "payroll list")
    }

    pub async fn sign_payroll(
        &self,
        signature: &SignatureRequest,
    ) -> ClientResult<SignatureRecord> {
        let resp: ApiResponse<SignatureRecord> =
            self.http.post("api/v1/payrolls/sign", signature).await?;
        Self::data(resp, "signature data")
    }

    pub async fn get_payroll_signature(&self, payroll_id: &str) -> ClientResult<SignatureRecord> {
        let resp: ApiResponse<SignatureRecord> = self
            .http
            .get(&format!("api/v1/payrolls/{payroll_id}/signature"))
            .await?;
        Self::data(resp, "signature data")
    }

    // ========== Notification API ==========

    pub async fn get_notifications(
        &self,
        status: Option<NotificationStatus>,
    ) -> ClientResult<Vec<Notification>> {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }
        let resp: ApiResponse<Vec<Notification>> =
            self.http.get_query("api/v1/notifications", &query).await?;
        Self::data(resp, "notification list")
    }

    /// Ask the server to resend one notification. Each call is a new send
    /// attempt; nothing is deduplicated here.
    pub async fn resend_notification(&self, notification_id: i64) -> ClientResult<String> {
        let req = ResendRequest { notification_id };
        let resp = self.http.post("api/v1/notifications/resend", &req).await?;
        Ok(Self::message(resp))
    }
}
