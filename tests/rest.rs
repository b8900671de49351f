#![cfg(feature = "client")]

use chrono::NaiveDate;
use clinic_dashboard::calendar::MonthView;
use clinic_dashboard::domain::appointment::AppointmentStatus;
use clinic_dashboard::domain::auth::UserProfile;
use clinic_dashboard::domain::notification::NotificationChannel;
use clinic_dashboard::domain::types::{AppointmentId, PatientId};
use clinic_dashboard::forms::appointment::AppointmentForm;
use clinic_dashboard::forms::auth::LoginForm;
use clinic_dashboard::pagination::ListResponse;
use clinic_dashboard::repository::ListParams;
use clinic_dashboard::repository::errors::RepositoryError;
use clinic_dashboard::services::settings::{self, SettingsSource};
use clinic_dashboard::services::{
    ServiceError, appointments, auth, dashboard, notifications, patients,
};
use clinic_dashboard::store::LocalStore;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

#[tokio::test]
async fn list_sends_paging_search_and_bearer() {
    let server = MockServer::start().await;
    let repo = common::repo_with_token(&server);

    Mock::given(method("GET"))
        .and(path("/api/patients/"))
        .and(query_param("skip", "10"))
        .and(query_param("limit", "10"))
        .and(query_param("search", "maria"))
        .and(query_param("is_active", "true"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            common::patient_json(11, "Maria Souza"),
            common::patient_json(12, "Maria Lima")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListParams::paginate(2, 10)
        .search("maria")
        .filter("is_active", "true");
    let response = patients::list_patients(&repo, &params).await.unwrap();

    match response {
        ListResponse::Bare(items) => {
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].name, "Maria Souza");
        }
        other => panic!("expected a bare array, got {other:?}"),
    }
}

#[tokio::test]
async fn list_reads_paged_object() {
    let server = MockServer::start().await;
    let repo = common::repo_with_token(&server);

    Mock::given(method("GET"))
        .and(path("/api/patients/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [common::patient_json(1, "Ana Costa")],
            "total": 47,
            "page": 1,
            "size": 15,
            "pages": 4
        })))
        .mount(&server)
        .await;

    let page = patients::list_patients(&repo, &ListParams::paginate(1, 15))
        .await
        .unwrap()
        .normalize();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 47);
    assert!(page.exact_total);
}

#[tokio::test]
async fn error_detail_and_status_mapping() {
    let server = MockServer::start().await;
    let repo = common::repo_with_token(&server);

    Mock::given(method("POST"))
        .and(path("/api/appointments/"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"detail": "Horário indisponível"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/patients/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
        .mount(&server)
        .await;

    let now = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let form = AppointmentForm {
        patient_id: "1".into(),
        dentist_id: "2".into(),
        appointment_date: "2025-01-10T09:00".into(),
        ..Default::default()
    };
    let err = appointments::create_appointment(&repo, &form, now)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Backend(RepositoryError::Api { status: 422, .. })
    ));
    assert_eq!(err.user_message("Erro ao criar consulta"), "Horário indisponível");

    let err = patients::get_patient(&repo, PatientId::new(99).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));

    let err = dashboard::load_dashboard(&repo).await.unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized(None)));
}

#[tokio::test]
async fn appointment_payload_carries_end_time() {
    let server = MockServer::start().await;
    let repo = common::repo_with_token(&server);

    Mock::given(method("POST"))
        .and(path("/api/appointments/"))
        .and(body_json(json!({
            "patient_id": 1,
            "dentist_id": 2,
            "appointment_date": "2025-01-10T09:00:00",
            "end_time": "2025-01-10T09:45:00",
            "duration_minutes": 45,
            "treatment_type": "Limpeza"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(common::appointment_json(
            5,
            "scheduled",
            "2025-01-10T09:00:00",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let now = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let form = AppointmentForm {
        patient_id: "1".into(),
        dentist_id: "2".into(),
        appointment_date: "2025-01-10T09:00".into(),
        duration_minutes: 45,
        treatment_type: "Limpeza".into(),
        ..Default::default()
    };
    let created = appointments::create_appointment(&repo, &form, now)
        .await
        .unwrap();
    assert_eq!(created.id, AppointmentId::new(5).unwrap());
    assert_eq!(created.status, AppointmentStatus::Scheduled);
}

#[tokio::test]
async fn status_change_and_cancel_with_reason() {
    let server = MockServer::start().await;
    let repo = common::repo_with_token(&server);

    Mock::given(method("PATCH"))
        .and(path("/api/appointments/5/status"))
        .and(body_json(json!({"status": "confirmed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::appointment_json(
            5,
            "confirmed",
            "2025-01-10T09:00:00",
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/appointments/5"))
        .and(body_json(json!({"reason": "Paciente viajou"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let id = AppointmentId::new(5).unwrap();
    let updated = appointments::change_status(&repo, id, AppointmentStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(updated.status, AppointmentStatus::Confirmed);

    appointments::cancel_appointment(&repo, id, Some("  Paciente viajou ".into()))
        .await
        .unwrap();
}

#[tokio::test]
async fn login_stores_token_for_later_requests() {
    let server = MockServer::start().await;
    let (repo, session) = common::repo_with_session(&server);

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ana@clinica.com", "senha": "segredo"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "fresh-token",
            "nome": "Ana",
            "perfil": "admin"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .and(header("Authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_patients": 3,
            "total_dentists": 1,
            "total_appointments": 9,
            "appointments_today": 2,
            "appointments_this_week": 4,
            "appointments_this_month": 9
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/recent-appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let form = LoginForm {
        email: "Ana@Clinica.com".into(),
        password: "segredo".into(),
    };
    let user = auth::login(&repo, &session, &form).await.unwrap();
    assert_eq!(user.perfil, UserProfile::Admin);
    assert!(session.is_authenticated());

    let page = dashboard::load_dashboard(&repo).await.unwrap();
    assert_eq!(page.stats.total_patients, 3);
    assert!(page.recent_appointments.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn rejected_login_is_not_an_expired_session() {
    let server = MockServer::start().await;
    let (repo, session) = common::repo_with_session(&server);

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ana@clinica.com", "senha": "errada"})))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Credenciais inválidas"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ana@clinica.com", "senha": "outra"})))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let form = LoginForm {
        email: "ana@clinica.com".into(),
        password: "errada".into(),
    };
    let err = auth::login(&repo, &session, &form).await.unwrap_err();
    assert_eq!(err.user_message("Erro ao entrar"), "Credenciais inválidas");

    let form = LoginForm {
        email: "ana@clinica.com".into(),
        password: "outra".into(),
    };
    let err = auth::login(&repo, &session, &form).await.unwrap_err();
    assert_eq!(err.user_message("Erro ao entrar"), "Usuário ou senha incorretos");
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn monthly_counts_send_year_and_month() {
    let server = MockServer::start().await;
    let repo = common::repo_with_token(&server);

    Mock::given(method("GET"))
        .and(path("/api/dashboard/monthly"))
        .and(query_param("year", "2025"))
        .and(query_param("month", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"date": "2025-12-05", "count": 3},
            {"date": "2025-12-06", "count": 1}
        ])))
        .mount(&server)
        .await;

    let view = MonthView::new(2025, 12).unwrap();
    let counts = dashboard::load_month_counts(&repo, view).await.unwrap();
    assert_eq!(counts.count(NaiveDate::from_ymd_opt(2025, 12, 5).unwrap()), 3);
    assert_eq!(counts.total(), 4);
}

#[tokio::test]
async fn settings_fall_back_to_local_copy() {
    let server = MockServer::start().await;
    let repo = common::repo_with_token(&server);
    let store = LocalStore::in_memory();

    Mock::given(method("GET"))
        .and(path("/api/notifications/settings"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/notifications/settings"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let loaded = settings::load_notification_settings(&repo, &store).await;
    assert_eq!(loaded.source, SettingsSource::Default);
    assert!(!loaded.settings.whatsapp_enabled);

    let mut changed = loaded.settings.clone();
    changed.whatsapp_enabled = true;
    let (saved, source) = settings::save_notification_settings(&repo, &store, &changed).await;
    assert_eq!(source, SettingsSource::Local);
    assert!(saved.whatsapp_enabled);

    let reloaded = settings::load_notification_settings(&repo, &store).await;
    assert_eq!(reloaded.source, SettingsSource::Local);
    assert!(reloaded.settings.whatsapp_enabled);
}

#[tokio::test]
async fn test_notification_reports_backend_message() {
    let server = MockServer::start().await;
    let repo = common::repo_with_token(&server);

    Mock::given(method("POST"))
        .and(path("/api/notifications/test"))
        .and(body_json(json!({"channel": "sms", "recipient": "11999990000"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Provedor SMS não configurado"
        })))
        .mount(&server)
        .await;

    let err = notifications::send_test(&repo, NotificationChannel::Sms, " 11999990000 ")
        .await
        .unwrap_err();
    assert_eq!(err.user_message("Erro"), "Provedor SMS não configurado");
}
