//! HTTP client for the `/rpc` procedure catalog.
//!
//! Queries are sent as `GET` with query-string input, mutations as `POST`
//! with a JSON body. Every success body is a `{ "data": ... }` envelope and
//! every failure body is `{ "error", "code" }`.

use realty_core::contact::{Client, CreateClient, UpdateClient};
use realty_core::interest::{ClientInterest, CreateClientInterest, UpdateClientInterest};
use realty_core::listing::{CreateProperty, Property, UpdateProperty};
use realty_core::types::{DbId, DeleteOutcome, IdInput, Timestamp};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Output of the `healthcheck` procedure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Healthcheck {
    pub status: String,
    pub timestamp: Timestamp,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
}

/// HTTP client for one back-office server.
#[derive(Debug, Clone)]
pub struct RealtyClient {
    client: reqwest::Client,
    base_url: String,
}

impl RealtyClient {
    /// Create a client for a server, e.g. `http://localhost:2022`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- properties ----

    pub async fn create_property(&self, input: &CreateProperty) -> Result<Property, ClientError> {
        self.mutate("createProperty", input).await
    }

    pub async fn get_properties(&self) -> Result<Vec<Property>, ClientError> {
        self.query("getProperties", None).await
    }

    pub async fn get_property_by_id(&self, id: DbId) -> Result<Property, ClientError> {
        self.query("getPropertyById", Some(IdInput { id })).await
    }

    pub async fn update_property(&self, input: &UpdateProperty) -> Result<Property, ClientError> {
        self.mutate("updateProperty", input).await
    }

    /// Returns whether the server actually removed a row.
    pub async fn delete_property(&self, id: DbId) -> Result<bool, ClientError> {
        let outcome: DeleteOutcome = self.mutate("deleteProperty", &IdInput { id }).await?;
        Ok(outcome.success)
    }

    // ---- clients ----

    pub async fn create_client(&self, input: &CreateClient) -> Result<Client, ClientError> {
        self.mutate("createClient", input).await
    }

    pub async fn get_clients(&self) -> Result<Vec<Client>, ClientError> {
        self.query("getClients", None).await
    }

    pub async fn get_client_by_id(&self, id: DbId) -> Result<Client, ClientError> {
        self.query("getClientById", Some(IdInput { id })).await
    }

    pub async fn update_client(&self, input: &UpdateClient) -> Result<Client, ClientError> {
        self.mutate("updateClient", input).await
    }

    pub async fn delete_client(&self, id: DbId) -> Result<bool, ClientError> {
        let outcome: DeleteOutcome = self.mutate("deleteClient", &IdInput { id }).await?;
        Ok(outcome.success)
    }

    // ---- client interests ----

    pub async fn create_client_interest(
        &self,
        input: &CreateClientInterest,
    ) -> Result<ClientInterest, ClientError> {
        self.mutate("createClientInterest", input).await
    }

    pub async fn get_client_interests(&self) -> Result<Vec<ClientInterest>, ClientError> {
        self.query("getClientInterests", None).await
    }

    pub async fn update_client_interest(
        &self,
        input: &UpdateClientInterest,
    ) -> Result<ClientInterest, ClientError> {
        self.mutate("updateClientInterest", input).await
    }

    pub async fn delete_client_interest(&self, id: DbId) -> Result<bool, ClientError> {
        let outcome: DeleteOutcome = self.mutate("deleteClientInterest", &IdInput { id }).await?;
        Ok(outcome.success)
    }

    // ---- health ----

    pub async fn healthcheck(&self) -> Result<Healthcheck, ClientError> {
        self.query("healthcheck", None).await
    }

    // ---- private helpers ----

    fn procedure_url(&self, procedure: &str) -> String {
        format!("{}/rpc/{procedure}", self.base_url)
    }

    async fn query<T: DeserializeOwned>(
        &self,
        procedure: &str,
        input: Option<IdInput>,
    ) -> Result<T, ClientError> {
        let mut request = self.client.get(self.procedure_url(procedure));
        if let Some(input) = input {
            request = request.query(&input);
        }
        let response = request.send().await?;
        Self::parse_response(procedure, response).await
    }

    async fn mutate<I, T>(&self, procedure: &str, input: &I) -> Result<T, ClientError>
    where
        I: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.procedure_url(procedure))
            .json(input)
            .send()
            .await?;
        Self::parse_response(procedure, response).await
    }

    /// Unwrap the `data` envelope, or turn an error body into
    /// [`ClientError::Api`].
    async fn parse_response<T: DeserializeOwned>(
        procedure: &str,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_slice::<ErrorBody>(&bytes) {
                Ok(body) => (body.code, body.error),
                Err(_) => (
                    "HTTP_ERROR".to_string(),
                    String::from_utf8_lossy(&bytes).into_owned(),
                ),
            };
            tracing::debug!(procedure, status = status.as_u16(), %code, "Procedure failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;
        Ok(envelope.data)
    }
}
