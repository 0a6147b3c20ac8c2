//! Customer DTOs

use serde::{Deserialize, Serialize};

use core_kernel::CustomerId;
use domain_customer::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest, Gender};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCustomerRequest {
    pub name: String,
    pub email: String,
    pub age: i32,
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl From<RegisterCustomerRequest> for CustomerRegistrationRequest {
    fn from(dto: RegisterCustomerRequest) -> Self {
        CustomerRegistrationRequest {
            name: dto.name,
            email: dto.email,
            age: dto.age,
            gender: dto.gender,
        }
    }
}

/// Partial update body; a missing key and an explicit `null` both leave the
/// field untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

impl From<UpdateCustomerRequest> for CustomerUpdateRequest {
    fn from(dto: UpdateCustomerRequest) -> Self {
        CustomerUpdateRequest {
            name: dto.name,
            email: dto.email,
            age: dto.age,
            gender: dto.gender,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: Option<Gender>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        CustomerResponse {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            age: customer.age,
            gender: customer.gender,
        }
    }
}
