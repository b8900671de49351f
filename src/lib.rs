//! Data layer of the clinic dashboard: typed resources, validated forms,
//! list and dialog state machines, and the REST gateway that feeds them.

#[cfg(feature = "client")]
pub mod api;
#[cfg(feature = "data")]
pub mod calendar;
#[cfg(feature = "data")]
pub mod dialog;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod list;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;
#[cfg(feature = "data")]
pub mod session;
#[cfg(feature = "data")]
pub mod store;
