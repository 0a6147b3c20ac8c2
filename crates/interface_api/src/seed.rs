//! Startup seed data

use fake::faker::name::en::{FirstName, LastName};
use fake::{Fake, Faker};
use tracing::{info, warn};

use domain_customer::{Customer, CustomerError, CustomerRegistrationRequest, CustomerService, Gender};

/// Domain of generated seed emails
pub const SEED_EMAIL_DOMAIN: &str = "customers.dev";

/// Builds a registration request filled with fake data
pub fn random_registration() -> CustomerRegistrationRequest {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();
    let gender = if Faker.fake::<bool>() {
        Gender::Male
    } else {
        Gender::Female
    };

    CustomerRegistrationRequest::new(
        format!("{} {}", first, last),
        format!("{}.{}@{}", first, last, SEED_EMAIL_DOMAIN).to_lowercase(),
        (16..99).fake::<i32>(),
    )
    .with_gender(gender)
}

/// Registers one random customer through the service
///
/// Returns `None` when the generated email was already taken; that is not
/// treated as a failure.
pub async fn seed_random_customer(service: &CustomerService) -> Result<Option<Customer>, CustomerError> {
    let request = random_registration();

    match service.add_customer(request).await {
        Ok(customer) => {
            info!(customer_id = %customer.id, email = %customer.email, "Seeded customer");
            Ok(Some(customer))
        }
        Err(CustomerError::DuplicateResource(reason)) => {
            warn!(%reason, "Skipping seed customer");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
