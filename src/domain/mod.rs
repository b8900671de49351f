//! Domain entities exchanged with the clinic backend.

pub mod appointment;
pub mod auth;
pub mod dashboard;
pub mod dentist;
pub mod notification;
pub mod patient;
pub mod support;
pub mod types;
