//! Support tickets kept on this workstation and contact deep links.

use chrono::{DateTime, Utc};

use crate::domain::support::{NewSupportTicket, SupportTicket};
use crate::forms::support::SupportTicketForm;
use crate::services::ServiceResult;
use crate::store::{LocalStore, SUPPORT_TICKETS_KEY};

pub const DEFAULT_WHATSAPP_TEXT: &str = "Olá, preciso de suporte";

/// Validates the form and appends the ticket to the local list.
pub fn create_ticket(
    store: &LocalStore,
    form: SupportTicketForm,
    created_at: DateTime<Utc>,
) -> ServiceResult<SupportTicket> {
    let ticket = NewSupportTicket::try_from(form)
        .map_err(|err| {
            log::error!("Invalid support ticket: {err}");
            err
        })?
        .into_ticket(created_at);

    let mut tickets = list_tickets(store);
    tickets.push(ticket.clone());
    store.set(SUPPORT_TICKETS_KEY, &tickets);

    log::info!("Support ticket {} recorded", ticket.id);
    Ok(ticket)
}

pub fn list_tickets(store: &LocalStore) -> Vec<SupportTicket> {
    store.get(SUPPORT_TICKETS_KEY).unwrap_or_default()
}

#[cfg(feature = "client")]
pub use links::{tel_link, whatsapp_link};

#[cfg(feature = "client")]
mod links {
    use reqwest::Url;

    use super::DEFAULT_WHATSAPP_TEXT;
    use crate::domain::types::phone_digits;

    /// `https://wa.me/55…?text=…`; the country code is added unless already present.
    pub fn whatsapp_link(phone: &str, text: Option<&str>) -> Option<String> {
        let digits = phone_digits(phone);
        if digits.is_empty() {
            return None;
        }
        let number = if digits.starts_with("55") && digits.len() > 11 {
            digits
        } else {
            format!("55{digits}")
        };
        let text = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_WHATSAPP_TEXT);

        Url::parse_with_params(&format!("https://wa.me/{number}"), &[("text", text)])
            .ok()
            .map(String::from)
    }

    pub fn tel_link(phone: &str) -> Option<String> {
        let digits = phone_digits(phone);
        (!digits.is_empty()).then(|| format!("tel:{digits}"))
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceError;

    #[test]
    fn tickets_accumulate_in_store() {
        let store = LocalStore::in_memory();
        let form = SupportTicketForm {
            subject: "Lentidão".into(),
            description: "Agenda demora para abrir".into(),
            ..Default::default()
        };

        let first = create_ticket(&store, form.clone(), Utc::now()).unwrap();
        create_ticket(&store, form, Utc::now()).unwrap();

        let stored = list_tickets(&store);
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, first.id);
    }

    #[test]
    fn invalid_ticket_is_not_stored() {
        let store = LocalStore::in_memory();
        let result = create_ticket(&store, SupportTicketForm::default(), Utc::now());
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert!(list_tickets(&store).is_empty());
    }
}
