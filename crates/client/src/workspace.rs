//! Local copies of the three lists, as the UI keeps them between fetches.
//!
//! Mutation results are applied in place: creates append, updates replace
//! the matching record, deletes remove it. Deleting a client or property
//! also drops the interests that reference it, mirroring the store's
//! cascade so the local copy never shows orphaned links.

use realty_core::contact::Client;
use realty_core::interest::ClientInterest;
use realty_core::listing::Property;
use realty_core::types::DbId;

pub const UNKNOWN_CLIENT: &str = "Unknown Client";
pub const UNKNOWN_PROPERTY: &str = "Unknown Property";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    properties: Vec<Property>,
    clients: Vec<Client>,
    interests: Vec<ClientInterest>,
}

impl Workspace {
    /// Replace every list with freshly fetched contents.
    pub fn replace_all(
        &mut self,
        properties: Vec<Property>,
        clients: Vec<Client>,
        interests: Vec<ClientInterest>,
    ) {
        self.properties = properties;
        self.clients = clients;
        self.interests = interests;
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn interests(&self) -> &[ClientInterest] {
        &self.interests
    }

    pub fn property(&self, id: DbId) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn client(&self, id: DbId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    // ---- properties ----

    pub fn property_created(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Replace the stored copy. A record not held locally is appended.
    pub fn property_updated(&mut self, property: Property) {
        upsert(&mut self.properties, property, |p| p.id);
    }

    pub fn property_deleted(&mut self, id: DbId) {
        self.properties.retain(|p| p.id != id);
        self.interests.retain(|i| i.property_id != id);
    }

    // ---- clients ----

    pub fn client_created(&mut self, client: Client) {
        self.clients.push(client);
    }

    pub fn client_updated(&mut self, client: Client) {
        upsert(&mut self.clients, client, |c| c.id);
    }

    pub fn client_deleted(&mut self, id: DbId) {
        self.clients.retain(|c| c.id != id);
        self.interests.retain(|i| i.client_id != id);
    }

    // ---- interests ----

    pub fn interest_created(&mut self, interest: ClientInterest) {
        self.interests.push(interest);
    }

    pub fn interest_updated(&mut self, interest: ClientInterest) {
        upsert(&mut self.interests, interest, |i| i.id);
    }

    pub fn interest_deleted(&mut self, id: DbId) {
        self.interests.retain(|i| i.id != id);
    }

    // ---- display ----

    /// "First Last", or [`UNKNOWN_CLIENT`] when the id is not held locally.
    pub fn client_name(&self, id: DbId) -> String {
        match self.client(id) {
            Some(client) => format!("{} {}", client.first_name, client.last_name),
            None => UNKNOWN_CLIENT.to_string(),
        }
    }

    /// The property's address, or [`UNKNOWN_PROPERTY`].
    pub fn property_address(&self, id: DbId) -> &str {
        self.property(id)
            .map(|p| p.address.as_str())
            .unwrap_or(UNKNOWN_PROPERTY)
    }
}

fn upsert<T>(items: &mut Vec<T>, item: T, id_of: impl Fn(&T) -> DbId) {
    let id = id_of(&item);
    match items.iter().position(|existing| id_of(existing) == id) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

#[cfg(test)]
mod tests {
    use realty_core::interest::InterestLevel;
    use realty_core::listing::{PropertyStatus, PropertyType};

    use super::*;

    fn property(id: DbId, address: &str) -> Property {
        Property {
            id,
            address: address.to_string(),
            price: 250_000.0,
            bedrooms: 3,
            bathrooms: 2,
            square_footage: 1500.0,
            property_type: PropertyType::House,
            status: PropertyStatus::Available,
            description: None,
            created_at: chrono::Utc::now(),
        }
    }

    fn client(id: DbId, first: &str, last: &str) -> Client {
        Client {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            phone: "555-0001".to_string(),
            budget: None,
            desired_property_type: None,
            created_at: chrono::Utc::now(),
        }
    }

    fn interest(id: DbId, client_id: DbId, property_id: DbId) -> ClientInterest {
        ClientInterest {
            id,
            client_id,
            property_id,
            interest_level: InterestLevel::Medium,
            created_at: chrono::Utc::now(),
        }
    }

    fn seeded() -> Workspace {
        let mut ws = Workspace::default();
        ws.replace_all(
            vec![property(1, "1 Elm St"), property(2, "2 Oak St")],
            vec![client(10, "John", "Doe"), client(11, "Jane", "Smith")],
            vec![interest(100, 10, 1), interest(101, 10, 2), interest(102, 11, 2)],
        );
        ws
    }

    #[test]
    fn create_appends_in_order() {
        let mut ws = seeded();
        ws.property_created(property(3, "3 Pine St"));
        let ids: Vec<_> = ws.properties().iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut ws = seeded();
        let mut renamed = client(10, "Johnny", "Doe");
        renamed.budget = Some(400_000.0);
        ws.client_updated(renamed);

        assert_eq!(ws.clients().len(), 2);
        assert_eq!(ws.clients()[0].first_name, "Johnny");
        assert_eq!(ws.clients()[0].budget, Some(400_000.0));
    }

    #[test]
    fn update_of_unknown_record_appends() {
        let mut ws = seeded();
        ws.interest_updated(interest(200, 11, 1));
        assert_eq!(ws.interests().len(), 4);
    }

    #[test]
    fn deleting_client_drops_its_interests() {
        let mut ws = seeded();
        ws.client_deleted(10);

        assert!(ws.client(10).is_none());
        let ids: Vec<_> = ws.interests().iter().map(|i| i.id).collect();
        assert_eq!(ids, [102]);
        assert_eq!(ws.properties().len(), 2);
    }

    #[test]
    fn deleting_property_drops_its_interests() {
        let mut ws = seeded();
        ws.property_deleted(2);

        let ids: Vec<_> = ws.interests().iter().map(|i| i.id).collect();
        assert_eq!(ids, [100]);
        assert_eq!(ws.clients().len(), 2);
    }

    #[test]
    fn deleting_interest_leaves_parents() {
        let mut ws = seeded();
        ws.interest_deleted(101);
        assert_eq!(ws.interests().len(), 2);
        assert_eq!(ws.properties().len(), 2);
        assert_eq!(ws.clients().len(), 2);
    }

    #[test]
    fn display_helpers_fall_back() {
        let ws = seeded();
        assert_eq!(ws.client_name(11), "Jane Smith");
        assert_eq!(ws.client_name(99), UNKNOWN_CLIENT);
        assert_eq!(ws.property_address(1), "1 Elm St");
        assert_eq!(ws.property_address(99), UNKNOWN_PROPERTY);
    }
}
