//! A [`Workspace`] kept in step with the server through a [`RealtyClient`].

use realty_core::contact::{Client, CreateClient, UpdateClient};
use realty_core::interest::{ClientInterest, CreateClientInterest, UpdateClientInterest};
use realty_core::listing::{CreateProperty, Property, UpdateProperty};
use realty_core::types::DbId;

use crate::api::RealtyClient;
use crate::error::ClientError;
use crate::workspace::Workspace;

/// Issues mutations and applies their results to the local copies.
///
/// A failed call leaves the local copies untouched.
#[derive(Debug, Clone)]
pub struct BackOffice {
    api: RealtyClient,
    workspace: Workspace,
}

impl BackOffice {
    pub fn new(api: RealtyClient) -> Self {
        Self {
            api,
            workspace: Workspace::default(),
        }
    }

    pub fn api(&self) -> &RealtyClient {
        &self.api
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Fetch all three lists, replacing the local copies.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let properties = self.api.get_properties().await?;
        let clients = self.api.get_clients().await?;
        let interests = self.api.get_client_interests().await?;
        tracing::debug!(
            properties = properties.len(),
            clients = clients.len(),
            interests = interests.len(),
            "Loaded back office lists"
        );
        self.workspace.replace_all(properties, clients, interests);
        Ok(())
    }

    // ---- properties ----

    pub async fn create_property(&mut self, input: &CreateProperty) -> Result<Property, ClientError> {
        let property = self.api.create_property(input).await?;
        self.workspace.property_created(property.clone());
        Ok(property)
    }

    pub async fn update_property(&mut self, input: &UpdateProperty) -> Result<Property, ClientError> {
        let property = self.api.update_property(input).await?;
        self.workspace.property_updated(property.clone());
        Ok(property)
    }

    /// Removes the local copy only when the server reports a deletion.
    pub async fn delete_property(&mut self, id: DbId) -> Result<bool, ClientError> {
        let deleted = self.api.delete_property(id).await?;
        if deleted {
            self.workspace.property_deleted(id);
        }
        Ok(deleted)
    }

    // ---- clients ----

    pub async fn create_client(&mut self, input: &CreateClient) -> Result<Client, ClientError> {
        let client = self.api.create_client(input).await?;
        self.workspace.client_created(client.clone());
        Ok(client)
    }

    pub async fn update_client(&mut self, input: &UpdateClient) -> Result<Client, ClientError> {
        let client = self.api.update_client(input).await?;
        self.workspace.client_updated(client.clone());
        Ok(client)
    }

    pub async fn delete_client(&mut self, id: DbId) -> Result<bool, ClientError> {
        let deleted = self.api.delete_client(id).await?;
        if deleted {
            self.workspace.client_deleted(id);
        }
        Ok(deleted)
    }

    // ---- client interests ----

    pub async fn create_client_interest(
        &mut self,
        input: &CreateClientInterest,
    ) -> Result<ClientInterest, ClientError> {
        let interest = self.api.create_client_interest(input).await?;
        self.workspace.interest_created(interest.clone());
        Ok(interest)
    }

    pub async fn update_client_interest(
        &mut self,
        input: &UpdateClientInterest,
    ) -> Result<ClientInterest, ClientError> {
        let interest = self.api.update_client_interest(input).await?;
        self.workspace.interest_updated(interest.clone());
        Ok(interest)
    }

    pub async fn delete_client_interest(&mut self, id: DbId) -> Result<bool, ClientError> {
        let deleted = self.api.delete_client_interest(id).await?;
        if deleted {
            self.workspace.interest_deleted(id);
        }
        Ok(deleted)
    }
}
