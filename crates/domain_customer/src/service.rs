//! Customer domain service
//!
//! `CustomerService` orchestrates every business rule of the customer
//! registry on top of the [`CustomerPort`]. It never knows which adapter is
//! active.
//!
//! # Concurrency
//!
//! The email uniqueness checks are check-then-act sequences and therefore
//! best-effort under concurrent requests. The `UNIQUE` constraint on the
//! email column is the hard guarantee; a violation it catches surfaces as
//! `CustomerError::Storage` carrying a `PortError::Conflict`.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use core_kernel::CustomerId;

use crate::customer::{Customer, NewCustomer};
use crate::error::CustomerError;
use crate::ports::CustomerPort;
use crate::request::{CustomerRegistrationRequest, CustomerUpdateRequest};

/// Service for registering, reading, updating and removing customers
#[derive(Clone)]
pub struct CustomerService {
    port: Arc<dyn CustomerPort>,
}

impl CustomerService {
    /// Creates a new customer service over the given storage port
    pub fn new(port: Arc<dyn CustomerPort>) -> Self {
        Self { port }
    }

    /// Returns the storage port backing this service
    pub fn port(&self) -> &Arc<dyn CustomerPort> {
        &self.port
    }

    /// Lists every customer
    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, CustomerError> {
        Ok(self.port.list_all().await?)
    }

    /// Retrieves a customer by ID
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` if no customer has this ID
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.port
            .get_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound(id))
    }

    /// Registers a new customer
    ///
    /// # Returns
    ///
    /// The persisted customer with its store-assigned ID
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::DuplicateResource` if the email is already
    /// taken; nothing is inserted in that case.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn add_customer(
        &self,
        request: CustomerRegistrationRequest,
    ) -> Result<Customer, CustomerError> {
        if self.port.exists_by_email(&request.email).await? {
            warn!("Rejecting registration, email already taken");
            return Err(CustomerError::email_taken());
        }

        let customer = self.port.insert(NewCustomer::from(request)).await?;
        info!(customer_id = %customer.id, "Customer registered");
        Ok(customer)
    }

    /// Removes a customer
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` if no customer has this ID; the
    /// store's delete is not invoked in that case.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn delete_customer_by_id(&self, id: CustomerId) -> Result<(), CustomerError> {
        if !self.port.exists_by_id(id).await? {
            return Err(CustomerError::NotFound(id));
        }

        self.port.delete_by_id(id).await?;
        info!("Customer deleted");
        Ok(())
    }

    /// Applies a partial update to a customer
    ///
    /// This method:
    /// 1. Loads the current customer
    /// 2. Stages every provided field that differs from the stored value
    /// 3. Re-checks email uniqueness if the email is staged
    /// 4. Rejects the request if nothing is staged
    /// 5. Writes back the complete record
    ///
    /// The request is either applied as a whole or rejected as a whole.
    ///
    /// # Returns
    ///
    /// The customer as written to the store
    ///
    /// # Errors
    ///
    /// - `CustomerError::NotFound` if no customer has this ID
    /// - `CustomerError::DuplicateResource` if the new email belongs to another customer
    /// - `CustomerError::NoChanges` if every provided field equals the stored value
    #[instrument(skip(self, request), fields(customer_id = %id))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        request: CustomerUpdateRequest,
    ) -> Result<Customer, CustomerError> {
        let current = self.get_customer(id).await?;
        let reconciled = request.reconcile(&current);
        debug!(changed = ?reconciled.changed, "Update request diffed");

        if let Some(email) = reconciled.new_email() {
            if self.port.exists_by_email(email).await? {
                warn!("Rejecting update, email already taken");
                return Err(CustomerError::email_taken());
            }
        }

        if !reconciled.has_changes() {
            return Err(CustomerError::NoChanges);
        }

        self.port.update(&reconciled.customer).await?;
        info!(changed = ?reconciled.changed, "Customer updated");
        Ok(reconciled.customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::Gender;
    use crate::ports::mock::MockCustomerPort;
    use core_kernel::PortError;

    fn german() -> Customer {
        Customer {
            id: CustomerId::new(1),
            name: "German".to_string(),
            email: "ggranados@gmail.com".to_string(),
            age: 20,
            gender: Some(Gender::Male),
        }
    }

    fn alex() -> Customer {
        Customer {
            id: CustomerId::new(2),
            name: "Alex".to_string(),
            email: "alex@gmail.com".to_string(),
            age: 33,
            gender: None,
        }
    }

    async fn service_with(customers: Vec<Customer>) -> (CustomerService, Arc<MockCustomerPort>) {
        let port = Arc::new(MockCustomerPort::with_customers(customers).await);
        (CustomerService::new(port.clone()), port)
    }

    #[tokio::test]
    async fn test_get_all_customers() {
        let (service, _) = service_with(vec![german(), alex()]).await;

        let all = service.get_all_customers().await.unwrap();
        assert_eq!(all, vec![german(), alex()]);
    }

    #[tokio::test]
    async fn test_get_customer() {
        let (service, _) = service_with(vec![german()]).await;

        let actual = service.get_customer(CustomerId::new(1)).await.unwrap();
        assert_eq!(actual, german());
    }

    #[tokio::test]
    async fn test_get_customer_not_found() {
        let (service, _) = service_with(vec![]).await;

        let err = service.get_customer(CustomerId::new(1)).await.unwrap_err();
        assert!(matches!(err, CustomerError::NotFound(id) if id == CustomerId::new(1)));
        assert_eq!(err.to_string(), "customer with id [1] not found");
    }

    #[tokio::test]
    async fn test_add_customer() {
        let (service, port) = service_with(vec![]).await;
        let request = CustomerRegistrationRequest::new("German", "ggranados@gmail.com", 20);

        let created = service.add_customer(request.clone()).await.unwrap();

        assert_eq!(port.insert_count(), 1);
        assert_eq!(created.name, request.name);
        assert_eq!(created.email, request.email);
        assert_eq!(created.age, request.age);
        assert_eq!(created.gender, None);

        let fetched = service.get_customer(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_add_customer_duplicate_email() {
        let (service, port) = service_with(vec![german()]).await;
        let request = CustomerRegistrationRequest::new("Other", "ggranados@gmail.com", 50);

        let err = service.add_customer(request).await.unwrap_err();

        assert!(matches!(err, CustomerError::DuplicateResource(_)));
        assert_eq!(err.to_string(), "email already taken");
        assert_eq!(port.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_customer() {
        let (service, port) = service_with(vec![german()]).await;

        service.delete_customer_by_id(CustomerId::new(1)).await.unwrap();

        assert_eq!(port.delete_count(), 1);
        assert!(port.get_by_id(CustomerId::new(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_customer_not_found() {
        let (service, port) = service_with(vec![]).await;

        let err = service.delete_customer_by_id(CustomerId::new(1)).await.unwrap_err();

        assert!(matches!(err, CustomerError::NotFound(_)));
        assert_eq!(port.delete_count(), 0);
    }

    #[tokio::test]
    async fn test_update_all_properties() {
        let (service, port) = service_with(vec![german()]).await;
        let request = CustomerUpdateRequest::default()
            .name("Germani")
            .email("ggranadi@gmail.com")
            .age(25)
            .gender(Gender::Female);

        let updated = service.update_customer(CustomerId::new(1), request).await.unwrap();

        assert_eq!(port.update_count(), 1);
        assert_eq!(updated.id, CustomerId::new(1));
        assert_eq!(updated.name, "Germani");
        assert_eq!(updated.email, "ggranadi@gmail.com");
        assert_eq!(updated.age, 25);
        assert_eq!(updated.gender, Some(Gender::Female));
        assert_eq!(port.get_by_id(CustomerId::new(1)).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_only_age_keeps_other_fields() {
        let (service, port) = service_with(vec![german()]).await;

        service
            .update_customer(CustomerId::new(1), CustomerUpdateRequest::default().age(30))
            .await
            .unwrap();

        let stored = port.get_by_id(CustomerId::new(1)).await.unwrap().unwrap();
        assert_eq!(stored.age, 30);
        assert_eq!(stored.name, german().name);
        assert_eq!(stored.email, german().email);
        assert_eq!(stored.gender, german().gender);
    }

    #[tokio::test]
    async fn test_update_only_email_when_free() {
        let (service, port) = service_with(vec![german(), alex()]).await;

        let updated = service
            .update_customer(
                CustomerId::new(1),
                CustomerUpdateRequest::default().email("fresh@gmail.com"),
            )
            .await
            .unwrap();

        assert_eq!(updated.email, "fresh@gmail.com");
        assert_eq!(port.update_count(), 1);
    }

    #[tokio::test]
    async fn test_update_email_taken_leaves_record_unchanged() {
        let (service, port) = service_with(vec![german(), alex()]).await;
        let request = CustomerUpdateRequest::default()
            .name("Renamed")
            .email("alex@gmail.com")
            .age(99);

        let err = service.update_customer(CustomerId::new(1), request).await.unwrap_err();

        assert!(matches!(err, CustomerError::DuplicateResource(_)));
        assert_eq!(port.update_count(), 0);
        assert_eq!(port.get_by_id(CustomerId::new(1)).await.unwrap(), Some(german()));
    }

    #[tokio::test]
    async fn test_update_empty_request_is_no_change() {
        let (service, port) = service_with(vec![german()]).await;

        let err = service
            .update_customer(CustomerId::new(1), CustomerUpdateRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::NoChanges));
        assert_eq!(err.to_string(), "no data changes found");
        assert_eq!(port.update_count(), 0);
    }

    #[tokio::test]
    async fn test_update_same_name_is_no_change() {
        let (service, port) = service_with(vec![german()]).await;

        let err = service
            .update_customer(CustomerId::new(1), CustomerUpdateRequest::default().name("German"))
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::NoChanges));
        assert_eq!(port.update_count(), 0);
    }

    #[tokio::test]
    async fn test_update_same_email_skips_uniqueness_check() {
        // The customer's own email is "taken" by itself; an unchanged email
        // must not be reported as a duplicate.
        let (service, _) = service_with(vec![german()]).await;

        let err = service
            .update_customer(
                CustomerId::new(1),
                CustomerUpdateRequest::default().email("ggranados@gmail.com"),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::NoChanges));
    }

    #[tokio::test]
    async fn test_update_missing_customer() {
        let (service, port) = service_with(vec![]).await;

        let err = service
            .update_customer(CustomerId::new(5), CustomerUpdateRequest::default().age(1))
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::NotFound(_)));
        assert_eq!(port.update_count(), 0);
    }

    #[tokio::test]
    async fn test_register_then_update_scenario() {
        let (service, _) = service_with(vec![]).await;

        let created = service
            .add_customer(CustomerRegistrationRequest::new("German", "g@x.com", 20))
            .await
            .unwrap();

        let updated = service
            .update_customer(created.id, CustomerUpdateRequest::default().age(30))
            .await
            .unwrap();
        assert_eq!(updated.name, "German");
        assert_eq!(updated.email, "g@x.com");
        assert_eq!(updated.age, 30);

        let identical = CustomerUpdateRequest::default()
            .name("German")
            .email("g@x.com")
            .age(30);
        let err = service.update_customer(created.id, identical).await.unwrap_err();
        assert!(matches!(err, CustomerError::NoChanges));
    }

    proptest::proptest! {
        #[test]
        fn prop_echoed_update_is_rejected_without_write(
            send_name in proptest::bool::ANY,
            send_email in proptest::bool::ANY,
            send_age in proptest::bool::ANY,
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async {
                let (service, port) = service_with(vec![german()]).await;
                let current = german();
                let request = CustomerUpdateRequest {
                    name: send_name.then(|| current.name.clone()),
                    email: send_email.then(|| current.email.clone()),
                    age: send_age.then_some(current.age),
                    gender: None,
                };

                let err = service.update_customer(current.id, request).await.unwrap_err();
                assert!(matches!(err, CustomerError::NoChanges));
                assert_eq!(port.update_count(), 0);
            });
        }
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let (service, port) = service_with(vec![german()]).await;
        port.set_offline(true);

        let err = service.get_all_customers().await.unwrap_err();
        assert!(matches!(err, CustomerError::Storage(PortError::Connection { .. })));
    }
}
