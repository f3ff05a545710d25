//! Data transfer objects for the REST surface.
//!
//! Entities from the storage layer are mapped to response DTOs before
//! shaping; request DTOs carry caller-supplied attributes and validate
//! themselves before anything touches the store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use roster_store::{Company, Employee, NewCompany, NewEmployee};

use crate::shaping::{Field, FieldValue, Shapeable};

/// Response representation of a company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDto {
    /// Company identifier.
    pub id: Uuid,
    /// Company name.
    pub name: String,
    /// Address and country joined into one display value.
    pub full_address: String,
}

impl From<&Company> for CompanyDto {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id,
            name: company.name.clone(),
            full_address: format!("{} {}", company.address, company.country),
        }
    }
}

fn company_id(c: &CompanyDto) -> FieldValue {
    FieldValue::Uuid(c.id)
}
fn company_name(c: &CompanyDto) -> FieldValue {
    FieldValue::Text(c.name.clone())
}
fn company_full_address(c: &CompanyDto) -> FieldValue {
    FieldValue::Text(c.full_address.clone())
}

static COMPANY_SCHEMA: &[Field<CompanyDto>] = &[
    Field {
        name: "id",
        read: company_id,
    },
    Field {
        name: "name",
        read: company_name,
    },
    Field {
        name: "full_address",
        read: company_full_address,
    },
];

impl Shapeable for CompanyDto {
    const RESOURCE: &'static str = "company";

    fn schema() -> &'static [Field<Self>] {
        COMPANY_SCHEMA
    }

    fn identity(&self) -> Uuid {
        self.id
    }
}

/// Response representation of an employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeDto {
    /// Employee identifier.
    pub id: Uuid,
    /// Employee name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Job position.
    pub position: String,
}

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            age: employee.age,
            position: employee.position.clone(),
        }
    }
}

fn employee_id(e: &EmployeeDto) -> FieldValue {
    FieldValue::Uuid(e.id)
}
fn employee_name(e: &EmployeeDto) -> FieldValue {
    FieldValue::Text(e.name.clone())
}
fn employee_age(e: &EmployeeDto) -> FieldValue {
    FieldValue::from(e.age)
}
fn employee_position(e: &EmployeeDto) -> FieldValue {
    FieldValue::Text(e.position.clone())
}

static EMPLOYEE_SCHEMA: &[Field<EmployeeDto>] = &[
    Field {
        name: "id",
        read: employee_id,
    },
    Field {
        name: "name",
        read: employee_name,
    },
    Field {
        name: "age",
        read: employee_age,
    },
    Field {
        name: "position",
        read: employee_position,
    },
];

impl Shapeable for EmployeeDto {
    const RESOURCE: &'static str = "employee";

    fn schema() -> &'static [Field<Self>] {
        EMPLOYEE_SCHEMA
    }

    fn identity(&self) -> Uuid {
        self.id
    }
}

/// Request body for creating or replacing a company.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyForManipulation {
    /// Company name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Country.
    pub country: String,
}

impl CompanyForManipulation {
    /// Validates the attributes and returns per-field error messages.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("company name is required".to_string());
        }
        if self.name.chars().count() > 60 {
            errors.push("company name must not exceed 60 characters".to_string());
        }
        if self.address.trim().is_empty() {
            errors.push("company address is required".to_string());
        }
        if self.address.chars().count() > 60 {
            errors.push("company address must not exceed 60 characters".to_string());
        }
        if self.country.trim().is_empty() {
            errors.push("company country is required".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Converts into the storage layer's attribute bundle.
    pub fn into_new(self) -> NewCompany {
        NewCompany {
            name: self.name,
            address: self.address,
            country: self.country,
        }
    }
}

/// Request body for creating or replacing an employee.
///
/// Also serializes so that PATCH can round-trip the current state through
/// a JSON Patch document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeForManipulation {
    /// Employee name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Job position.
    pub position: String,
}

impl EmployeeForManipulation {
    /// Validates the attributes and returns per-field error messages.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("employee name is required".to_string());
        }
        if self.name.chars().count() > 30 {
            errors.push("employee name must not exceed 30 characters".to_string());
        }
        if self.position.trim().is_empty() {
            errors.push("employee position is required".to_string());
        }
        if self.position.chars().count() > 20 {
            errors.push("employee position must not exceed 20 characters".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Converts into the storage layer's attribute bundle.
    pub fn into_new(self) -> NewEmployee {
        NewEmployee {
            name: self.name,
            age: self.age,
            position: self.position,
        }
    }
}

impl From<&Employee> for EmployeeForManipulation {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            age: employee.age,
            position: employee.position.clone(),
        }
    }
}
