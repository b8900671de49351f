#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use clinic_dashboard::api::ApiClient;
use clinic_dashboard::repository::RestRepository;
use clinic_dashboard::session::{Session, StaticToken};
use clinic_dashboard::store::LocalStore;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// Repository pointed at `server`, sending a fixed bearer token.
pub fn repo_with_token(server: &MockServer) -> RestRepository {
    let api = ApiClient::new(
        &format!("{}/", server.uri()),
        Duration::from_secs(5),
        Arc::new(StaticToken(Some(TOKEN.to_string()))),
    )
    .expect("client");
    RestRepository::new(api)
}

/// Repository whose token comes from a fresh in-memory session.
pub fn repo_with_session(server: &MockServer) -> (RestRepository, Session) {
    let session = Session::new(Arc::new(LocalStore::in_memory()));
    let api = ApiClient::new(
        &server.uri(),
        Duration::from_secs(5),
        Arc::new(session.clone()),
    )
    .expect("client");
    (RestRepository::new(api), session)
}

pub fn patient_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "nome": name,
        "telefone": "(11) 99999-0000",
        "ativo": true,
        "criadoEm": "2025-01-10T12:00:00",
        "atualizadoEm": "2025-01-10T12:00:00"
    })
}

pub fn appointment_json(id: i64, status: &str, date: &str) -> Value {
    json!({
        "id": id,
        "patient_id": 1,
        "dentist_id": 1,
        "appointment_date": date,
        "duration_minutes": 30,
        "status": status
    })
}
