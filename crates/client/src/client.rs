//! Typed HTTP access to the ledger server.

use api_types::{
    Message,
    expense::{ExpenseCreated, ExpenseListResponse, ExpenseNew, ExpenseUpdate, ExpenseView},
    stats::ChartData,
    user::{Credentials, UserSession},
};
use reqwest::{RequestBuilder, Url};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::error::{AppError, Result};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::Input(format!("invalid base_url: {err}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Server(format!("invalid base_url: {err}")))
    }

    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> std::result::Result<UserSession, ClientError> {
        let request = self.http.post(self.endpoint("register")?).json(&Credentials {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        });
        send(request).await
    }

    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> std::result::Result<UserSession, ClientError> {
        let request = self.http.post(self.endpoint("login")?).json(&Credentials {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        });
        send(request).await
    }

    pub async fn add_expense(
        &self,
        payload: &ExpenseNew,
    ) -> std::result::Result<ExpenseCreated, ClientError> {
        let request = self.http.post(self.endpoint("expenses")?).json(payload);
        send(request).await
    }

    pub async fn expenses(&self, user_id: i32) -> std::result::Result<Vec<ExpenseView>, ClientError> {
        let request = self.http.get(self.endpoint(&format!("expenses/{user_id}"))?);
        let response: ExpenseListResponse = send(request).await?;
        Ok(response.expenses)
    }

    pub async fn update_expense(
        &self,
        expense_id: i32,
        payload: &ExpenseUpdate,
    ) -> std::result::Result<Message, ClientError> {
        let request = self
            .http
            .put(self.endpoint(&format!("expenses/{expense_id}"))?)
            .json(payload);
        send(request).await
    }

    pub async fn delete_expense(&self, expense_id: i32) -> std::result::Result<Message, ClientError> {
        let request = self
            .http
            .delete(self.endpoint(&format!("expenses/{expense_id}"))?);
        send(request).await
    }

    pub async fn chart_data(&self, user_id: i32) -> std::result::Result<ChartData, ClientError> {
        let request = self.http.get(self.endpoint(&format!("visualize/{user_id}"))?);
        send(request).await
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> std::result::Result<T, ClientError> {
    let res = request.send().await?;
    let status = res.status();
    tracing::debug!(%status, url = %res.url(), "response received");

    if status.is_success() {
        return Ok(res.json::<T>().await?);
    }

    let body = res
        .json::<ErrorResponse>()
        .await
        .map(|err| err.error)
        .unwrap_or_else(|_| "unknown error".to_string());

    let err = match status.as_u16() {
        400 => ClientError::BadRequest(body),
        401 => ClientError::Unauthorized(body),
        404 => ClientError::NotFound(body),
        409 => ClientError::Conflict(body),
        422 => ClientError::Validation(body),
        _ => ClientError::Server(body),
    };
    Err(err)
}
