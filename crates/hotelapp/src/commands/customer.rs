//! Customer records in `customers.json`, keyed by name.
//!
//! | Operation | Absent file | Miss reported on |
//! |-----------|-------------|------------------|
//! | `create` | starts empty | - |
//! | `delete` | error | log, info |
//! | `display_info` | error | log, info |
//! | `modify_info` | error | user |
//! | `load_all` | error | - |

use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::error::{HotelError, Result};
use crate::model::Customer;
use crate::store::backend::StorageBackend;
use crate::store::records::{load_records, save_records};
use crate::store::Collection;

pub fn create<B: StorageBackend>(
    backend: &B,
    name: &str,
    email: &str,
    phone: &str,
) -> Result<CmdResult> {
    let customer = Customer::new(name, email, phone);
    let mut customers: Vec<Customer> =
        load_records(backend, Collection::Customers)?.unwrap_or_default();
    customers.push(customer.clone());
    save_records(backend, Collection::Customers, &customers)?;

    Ok(CmdResult::new(Outcome::Created).with_customers(vec![customer]))
}

/// Remove every customer called `name`.
pub fn delete<B: StorageBackend>(backend: &B, name: &str) -> Result<CmdResult> {
    let customers = load_all(backend)?;
    let before = customers.len();
    let kept: Vec<Customer> = customers.into_iter().filter(|c| c.name != name).collect();

    if kept.len() < before {
        save_records(backend, Collection::Customers, &kept)?;
        Ok(CmdResult::new(Outcome::Removed(before - kept.len())).with_message(
            CmdMessage::success(format!("Customer {} deleted successfully.", name)),
        ))
    } else {
        Ok(not_found(name))
    }
}

pub fn display_info<B: StorageBackend>(backend: &B, name: &str) -> Result<CmdResult> {
    let customers = load_all(backend)?;
    let Some(customer) = customers.into_iter().find(|c| c.name == name) else {
        return Ok(not_found(name));
    };

    let mut result = CmdResult::new(Outcome::Found);
    result.add_message(CmdMessage::info(format!("Customer Name: {}", customer.name)));
    result.add_message(CmdMessage::info(format!("Email: {}", customer.email)));
    result.add_message(CmdMessage::info(format!("Phone: {}", customer.phone)));
    Ok(result.with_customers(vec![customer]))
}

/// Overwrite email and/or phone on the first customer called `name`.
///
/// Empty or missing values leave the field as is. The file is rewritten
/// whenever the customer exists, even if no field changed.
pub fn modify_info<B: StorageBackend>(
    backend: &B,
    name: &str,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<CmdResult> {
    let mut customers = load_all(backend)?;
    let Some(customer) = customers.iter_mut().find(|c| c.name == name) else {
        return Ok(CmdResult::new(Outcome::NotFound)
            .with_message(CmdMessage::info(format!("Customer {} not found.", name)).for_user()));
    };

    if let Some(email) = email.filter(|e| !e.is_empty()) {
        customer.email = email.to_string();
    }
    if let Some(phone) = phone.filter(|p| !p.is_empty()) {
        customer.phone = phone.to_string();
    }
    let updated = customer.clone();
    save_records(backend, Collection::Customers, &customers)?;

    Ok(CmdResult::new(Outcome::Modified)
        .with_customers(vec![updated])
        .with_message(
            CmdMessage::success(format!(
                "Customer {} information modified successfully.",
                name
            ))
            .for_user(),
        ))
}

/// All stored customers. Fails with [`HotelError::FileNotFound`] if
/// `customers.json` does not exist.
pub fn load_all<B: StorageBackend>(backend: &B) -> Result<Vec<Customer>> {
    load_records(backend, Collection::Customers)?
        .ok_or_else(|| HotelError::FileNotFound(backend.path(Collection::Customers)))
}

fn not_found(name: &str) -> CmdResult {
    CmdResult::new(Outcome::NotFound)
        .with_message(CmdMessage::info(format!("Customer {} not found.", name)))
}
