//! Entity types stored by the roster storage layer.
//!
//! Entities carry server-assigned identifiers and timestamps alongside the
//! caller-supplied attributes. The REST layer maps these to response DTOs;
//! the storage layer never exposes partial views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A company aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Company name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Country.
    pub country: String,
    /// When the company was created.
    pub created_at: DateTime<Utc>,
    /// When the company was last modified.
    pub updated_at: DateTime<Utc>,
}

/// An employee, always owned by exactly one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Owning company.
    pub company_id: Uuid,
    /// Employee name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Job position.
    pub position: String,
    /// When the employee was created.
    pub created_at: DateTime<Utc>,
    /// When the employee was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Attributes for creating a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCompany {
    /// Company name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Country.
    pub country: String,
}

/// Attributes for replacing a company's mutable state.
pub type CompanyUpdate = NewCompany;

/// Attributes for creating an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Employee name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Job position.
    pub position: String,
}

/// Attributes for replacing an employee's mutable state.
pub type EmployeeUpdate = NewEmployee;

impl Company {
    /// Creates a company from its attributes, assigning a fresh id and
    /// timestamps.
    pub fn from_new(new: NewCompany) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            address: new.address,
            country: new.country,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies an update, refreshing the modification timestamp.
    pub fn apply_update(&mut self, update: CompanyUpdate) {
        self.name = update.name;
        self.address = update.address;
        self.country = update.country;
        self.updated_at = Utc::now();
    }
}

impl Employee {
    /// Creates an employee from its attributes for the given company,
    /// assigning a fresh id and timestamps.
    pub fn from_new(company_id: Uuid, new: NewEmployee) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            company_id,
            name: new.name,
            age: new.age,
            position: new.position,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies an update, refreshing the modification timestamp.
    pub fn apply_update(&mut self, update: EmployeeUpdate) {
        self.name = update.name;
        self.age = update.age;
        self.position = update.position;
        self.updated_at = Utc::now();
    }
}
