use std::future::Future;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use roster_domain::employee::{EmployeeDraft, UniqueField};

/// Client-side failures talking to the employees service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure, or a success body that could not be decoded.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        body: serde_json::Value,
    },
}

/// Remote operations the form depends on.
pub trait EmployeesApi: Send + Sync {
    /// Submit a complete record. Returns the generated id.
    fn submit(
        &self,
        draft: &EmployeeDraft,
    ) -> impl Future<Output = Result<i64, ClientError>> + Send;

    fn duplicate_exists(
        &self,
        field: UniqueField,
        value: &str,
    ) -> impl Future<Output = Result<bool, ClientError>> + Send;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitResponse {
    employee_id: i64,
}

#[derive(Serialize)]
struct CheckDuplicateRequest<'a> {
    name: UniqueField,
    value: &'a str,
}

#[derive(Deserialize)]
struct CheckDuplicateResponse {
    exists: bool,
}

/// [`EmployeesApi`] over HTTP with `reqwest`. No timeouts and no retries.
#[derive(Clone)]
pub struct HttpEmployeesApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEmployeesApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.json().await?)
    }
}

impl EmployeesApi for HttpEmployeesApi {
    async fn submit(&self, draft: &EmployeeDraft) -> Result<i64, ClientError> {
        let resp: SubmitResponse = self.post("/api/employees", draft).await?;
        Ok(resp.employee_id)
    }

    async fn duplicate_exists(&self, field: UniqueField, value: &str) -> Result<bool, ClientError> {
        let resp: CheckDuplicateResponse = self
            .post(
                "/api/checkDuplicates",
                &CheckDuplicateRequest { name: field, value },
            )
            .await?;
        Ok(resp.exists)
    }
}
