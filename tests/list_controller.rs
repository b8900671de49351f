#![cfg(feature = "data")]

use clinic_dashboard::domain::appointment::Appointment;
use clinic_dashboard::list::{ALL, ApplyOutcome, ListConfig, ListController};
use clinic_dashboard::pagination::ListResponse;
use clinic_dashboard::repository::errors::RepositoryError;
use clinic_dashboard::services::ServiceError;
use clinic_dashboard::services::appointments::{self, STATUS_FILTER};
use serde_json::json;

fn numbered(range: std::ops::RangeInclusive<u32>) -> Vec<u32> {
    range.collect()
}

fn ok<T>(response: ListResponse<T>) -> Result<ListResponse<T>, ServiceError> {
    Ok(response)
}

/// Ten appointments, three of them confirmed.
fn appointments_page() -> Vec<Appointment> {
    let statuses = [
        "scheduled",
        "confirmed",
        "completed",
        "confirmed",
        "cancelled",
        "scheduled",
        "no_show",
        "confirmed",
        "in_progress",
        "scheduled",
    ];
    statuses
        .iter()
        .enumerate()
        .map(|(index, status)| {
            serde_json::from_value(json!({
                "id": index + 1,
                "patient_id": 1,
                "dentist_id": 1,
                "appointment_date": format!("2025-12-{:02}T09:00:00", index + 1),
                "duration_minutes": 30,
                "status": status
            }))
            .unwrap()
        })
        .collect()
}

#[test]
fn page_resets_to_one_after_query_changes() {
    let mut list = ListController::new(ListConfig::<u32>::new(10));
    let ticket = list.mount();
    list.apply(&ticket, ok(ListResponse::Paged {
        items: numbered(1..=10),
        total: Some(95),
    }));

    let ticket = list.set_page(7);
    assert_eq!(ticket.params.skip, 60);
    list.set_search_input("ana");
    let ticket = list.search();
    assert_eq!(list.current_page(), 1);
    assert_eq!(ticket.params.skip, 0);

    list.set_page(4);
    list.set_filter("is_active", "true");
    assert_eq!(list.current_page(), 1);

    list.set_page(5);
    let ticket = list.clear_filters();
    assert_eq!(list.current_page(), 1);
    assert!(list.filters().is_empty());
    assert_eq!(list.search_input(), "");
    assert_eq!(ticket.params.search, None);
}

#[test]
fn bare_array_total_is_its_length() {
    let mut list = ListController::new(ListConfig::<u32>::new(15));
    let ticket = list.mount();
    list.apply(&ticket, ok(ListResponse::Bare(numbered(1..=7))));

    assert_eq!(list.total_items(), 7);
    assert_eq!(list.total_pages(), 1);
    assert!(!list.exact_total());
}

#[test]
fn short_page_of_large_total() {
    let mut list = ListController::new(ListConfig::<u32>::new(15));
    let ticket = list.mount();
    list.apply(&ticket, ok(ListResponse::Paged {
        items: numbered(1..=5),
        total: Some(47),
    }));

    assert_eq!(list.total_items(), 47);
    assert_eq!(list.total_pages(), 4);
    assert_eq!(list.items().len(), 5);

    let range = list.range();
    assert_eq!((range.start, range.end, range.total), (1, 15, 47));
    assert_eq!(list.summary(), "Mostrando 1 a 5 de 47 resultados");
}

#[test]
fn client_status_filter_keeps_degraded_total() {
    let mut list = ListController::new(ListConfig {
        items_per_page: 15,
        ..appointments::list_config()
    });
    list.set_filter(STATUS_FILTER, "confirmed");
    let ticket = list.reload();
    assert!(!ticket.params.filters.contains_key(STATUS_FILTER));

    let outcome = list.apply(&ticket, ok(ListResponse::Bare(appointments_page())));
    assert_eq!(outcome, ApplyOutcome::Applied);
    assert_eq!(list.total_items(), 10);
    assert_eq!(list.items().len(), 3);
    assert!(list.items().iter().all(|a| a.status.as_str() == "confirmed"));

    let ticket = list.set_filter(STATUS_FILTER, ALL);
    list.apply(&ticket, ok(ListResponse::Bare(appointments_page())));
    assert_eq!(list.items().len(), 10);
}

#[test]
fn rejection_never_leaves_a_spinner() {
    let config = ListConfig::<u32>::new(10).error_message("Erro ao carregar pacientes");
    let mut list = ListController::new(config);
    let ticket = list.mount();
    list.apply(&ticket, ok(ListResponse::Bare(numbered(1..=10))));

    let ticket = list.set_page(2);
    assert!(list.is_loading());
    let outcome = list.apply::<RepositoryError>(
        &ticket,
        Err(RepositoryError::ConnectionError("refused".into())),
    );

    assert_eq!(outcome, ApplyOutcome::Failed("Erro ao carregar pacientes".into()));
    assert!(list.items().is_empty());
    assert_eq!(list.total_items(), 0);
    assert!(!list.is_loading());
    assert_eq!(list.summary(), "Nenhum resultado encontrado");
}

#[test]
fn same_query_same_state() {
    let mut list = ListController::new(ListConfig::<u32>::new(10));
    list.set_search_input("silva");
    let first = list.search();
    list.apply(&first, ok(ListResponse::Paged {
        items: numbered(1..=10),
        total: Some(23),
    }));
    let snapshot = (
        list.items().to_vec(),
        list.total_items(),
        list.summary(),
        list.controls(),
    );

    let second = list.reload();
    assert_eq!(second.query, first.query);
    assert_eq!(second.params, first.params);
    list.apply(&second, ok(ListResponse::Paged {
        items: numbered(1..=10),
        total: Some(23),
    }));

    assert_eq!(
        (
            list.items().to_vec(),
            list.total_items(),
            list.summary(),
            list.controls()
        ),
        snapshot
    );
}

#[test]
fn later_page_wins_whatever_the_arrival_order() {
    for page_two_arrives_last in [true, false] {
        let mut list = ListController::new(ListConfig::<u32>::new(10));
        let ticket = list.mount();
        list.apply(&ticket, ok(ListResponse::Paged {
            items: numbered(1..=10),
            total: Some(40),
        }));

        let page_two = list.set_page(2);
        let page_three = list.set_page(3);
        let page_two_rows = ok(ListResponse::Paged {
            items: numbered(11..=20),
            total: Some(40),
        });
        let page_three_rows = ok(ListResponse::Paged {
            items: numbered(21..=30),
            total: Some(40),
        });

        if page_two_arrives_last {
            assert_eq!(list.apply(&page_three, page_three_rows), ApplyOutcome::Applied);
            assert_eq!(list.apply(&page_two, page_two_rows), ApplyOutcome::Stale);
        } else {
            assert_eq!(list.apply(&page_two, page_two_rows), ApplyOutcome::Stale);
            assert!(list.is_loading());
            assert_eq!(list.apply(&page_three, page_three_rows), ApplyOutcome::Applied);
        }

        assert_eq!(list.current_page(), 3);
        assert_eq!(list.items(), numbered(21..=30).as_slice());
        assert!(!list.is_loading());
    }
}

#[tokio::test]
async fn run_fetches_with_ticket_params() {
    let mut list = ListController::new(ListConfig::<u32>::new(5).server_filters(&["is_active"]));
    list.set_filter("is_active", "true");
    list.set_filter("plan", "Particular");
    let ticket = list.set_page(2);

    let outcome = list
        .run(ticket, |params| async move {
            assert_eq!(params.skip, 5);
            assert_eq!(params.limit, 5);
            assert_eq!(params.filters.get("is_active").map(String::as_str), Some("true"));
            assert!(!params.filters.contains_key("plan"));
            ok(ListResponse::Paged {
                items: numbered(6..=10),
                total: Some(12),
            })
        })
        .await;

    assert_eq!(outcome, ApplyOutcome::Applied);
    assert_eq!(list.summary(), "Mostrando 6 a 10 de 12 resultados");
    let controls = list.controls();
    assert!(controls.previous && controls.next);
}
