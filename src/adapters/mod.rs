//! Integrations with systems outside the domain core.
//!
//! - [`store`] - Storage boundary (trait-based) plus an in-memory implementation
//!
//! # Design Pattern
//!
//! Adapters isolate storage from the domain so entities never know how they are
//! persisted. Any backend implements [`store::EntityStore`]; the in-memory one
//! backs tests and the CLI.
//!
//! ```rust
//! use clinic_records::adapters::store::{EntityStore, InMemoryStore};
//! use clinic_records::domain::Customer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::<Customer>::new();
//! let customer = Customer::create("Clinica Sol", "billing@sol.example.com")?;
//! let id = customer.id();
//! store.insert(customer).await?;
//!
//! let renamed = store.update(id, |c| c.set_name("Clinica Lua")).await?;
//! assert_eq!(renamed.name(), "Clinica Lua");
//! # Ok(())
//! # }
//! ```

pub mod store;
