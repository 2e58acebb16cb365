//! [`ActorEntity`] implementation for [`Customer`].
//!
//! Customers have no custom actions and no dependencies; the hooks only validate
//! the name and email.

use super::error::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

fn validate_name(name: &str) -> Result<(), CustomerError> {
    if name.trim().is_empty() {
        return Err(CustomerError::ValidationError(
            "name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), CustomerError> {
    if !email.contains('@') {
        return Err(CustomerError::ValidationError(format!(
            "invalid email: {email}"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        validate_name(&params.name)?;
        validate_email(&params.email)?;
        Ok(Self::new(id, params.name, params.email))
    }

    /// Handles updates to the Customer entity.
    ///
    /// # Fields Updated
    /// - `name`: display name
    /// - `email`: contact address
    ///
    /// Both fields are validated before either is written.
    async fn on_update(
        &mut self,
        update: CustomerUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(email) = &update.email {
            validate_email(email)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Customer {
        Customer::new(CustomerId(1), "Alice", "alice@example.com")
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let params = CustomerCreate {
            name: "  ".to_string(),
            email: "a@example.com".to_string(),
        };
        assert!(matches!(
            Customer::from_create_params(CustomerId(1), params),
            Err(CustomerError::ValidationError(_))
        ));
    }

    #[test]
    fn test_create_rejects_email_without_at() {
        let params = CustomerCreate {
            name: "Alice".to_string(),
            email: "alice.example.com".to_string(),
        };
        assert!(matches!(
            Customer::from_create_params(CustomerId(1), params),
            Err(CustomerError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_update_is_all_or_nothing() {
        let mut customer = alice();
        let update = CustomerUpdate {
            name: Some("Alicia".to_string()),
            email: Some("nope".to_string()),
        };
        assert!(customer.on_update(update, &()).await.is_err());
        assert_eq!(customer, alice());

        let update = CustomerUpdate {
            name: Some("Alicia".to_string()),
            email: None,
        };
        customer.on_update(update, &()).await.unwrap();
        assert_eq!(customer.name, "Alicia");
        assert_eq!(customer.email, "alice@example.com");
    }
}
