//! Payroll workflow manager
//!
//! Orchestrates multi-call sequences on top of the facade, gathering local
//! context (signature encoding, public IP, device classification) before
//! submitting. I/O failures are logged here and re-raised; only the IP
//! lookup degrades instead of failing.

use crate::ip::{IpLookup, IpifyLookup, UNKNOWN_IP};
use crate::{ClientConfig, ClientResult, PayrollApi, SignatureImage};
use shared::DeviceKind;
use shared::models::{Payroll, PayrollCreate, PublishOutcome, SignatureRecord, SignatureRequest};

/// High-level payroll workflows
pub struct PayrollManager {
    api: PayrollApi,
    ip_lookup: Box<dyn IpLookup>,
    user_agent: String,
}

impl PayrollManager {
    /// Create a manager from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            api: PayrollApi::new(config)?,
            ip_lookup: Box::new(IpifyLookup::new(config)?),
            user_agent: config.user_agent.clone(),
        })
    }

    /// Substitute the IP lookup collaborator
    pub fn with_ip_lookup(mut self, ip_lookup: Box<dyn IpLookup>) -> Self {
        self.ip_lookup = ip_lookup;
        self
    }

    /// Access the facade
    pub fn api(&self) -> &PayrollApi {
        &self.api
    }

    /// Mutable facade access (login/logout)
    pub fn api_mut(&mut self) -> &mut PayrollApi {
        &mut self.api
    }

    /// Create a draft payroll slip.
    pub async fn create_new_payroll(&self, payroll: &PayrollCreate) -> ClientResult<Payroll> {
        match self.api.create_payroll(payroll).await {
            Ok(created) => {
                tracing::info!(payroll_id = %created.id, period = %created.period, "payroll created");
                Ok(created)
            }
            Err(err) => {
                tracing::error!(error = %err, "payroll creation failed");
                Err(err)
            }
        }
    }

    /// Publish a batch of draft slips, optionally notifying employees.
    pub async fn publish_payrolls_batch(
        &self,
        payroll_ids: &[String],
        notify_employees: bool,
    ) -> ClientResult<PublishOutcome> {
        match self.api.publish_payrolls(payroll_ids, notify_employees).await {
            Ok(outcome) => {
                tracing::info!(message = %outcome.message, "payrolls published");
                Ok(outcome)
            }
            Err(err) => {
                tracing::error!(error = %err, "payroll publish failed");
                Err(err)
            }
        }
    }

    /// Sign a published payroll: encode the captured image, gather capture
    /// metadata and submit. IP lookup failure degrades to [`UNKNOWN_IP`];
    /// a failed submit is fatal.
    pub async fn handle_payroll_signature(
        &self,
        payroll_id: &str,
        signature: &SignatureImage,
    ) -> ClientResult<SignatureRecord> {
        let request = SignatureRequest {
            payroll_id: payroll_id.to_string(),
            signature_data: signature.to_data_url(),
            ip_address: self.client_ip().await,
            user_agent: self.user_agent.clone(),
            device_info: DeviceKind::from_user_agent(&self.user_agent)
                .label()
                .to_string(),
        };

        match self.api.sign_payroll(&request).await {
            Ok(record) => {
                tracing::info!(payroll_id = %payroll_id, "payroll signed");
                Ok(record)
            }
            Err(err) => {
                tracing::error!(payroll_id = %payroll_id, error = %err, "payroll signing failed");
                Err(err)
            }
        }
    }

    /// Published/signed slips for one employee.
    pub async fn get_employee_payroll_history(
        &self,
        employee_id: i64,
    ) -> ClientResult<Vec<Payroll>> {
        self.api
            .get_employee_payrolls(employee_id, None)
            .await
            .inspect_err(|err| {
                tracing::error!(employee_id, error = %err, "payroll history fetch failed");
            })
    }

    async fn client_ip(&self) -> String {
        match self.ip_lookup.client_ip().await {
            Ok(ip) => ip,
            Err(err) => {
                tracing::warn!(error = %err, "ip lookup failed, recording sentinel");
                UNKNOWN_IP.to_string()
            }
        }
    }
}
