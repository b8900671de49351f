use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::support::{NewSupportTicket, TicketPriority};
use crate::domain::types::{ContactEmail, PhoneNumber, TicketDescription, TicketSubject};
use crate::forms::{FormError, optional, validate_optional_email, validate_phone};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SupportTicketForm {
    #[validate(length(min = 1, message = "Assunto é obrigatório"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Descrição é obrigatória"))]
    pub description: String,
    /// `Baixa`, `Normal` or `Alta`; anything else falls back to `Normal`.
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    #[validate(custom(function = "validate_optional_email"))]
    pub contact_email: String,
    #[serde(default)]
    #[validate(custom(function = "validate_optional_phone"))]
    pub contact_phone: String,
}

fn validate_optional_phone(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Ok(())
    } else {
        validate_phone(value.trim())
    }
}

impl TryFrom<SupportTicketForm> for NewSupportTicket {
    type Error = FormError;

    fn try_from(form: SupportTicketForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let subject = TicketSubject::new(form.subject).map_err(|_| FormError::InvalidValue)?;
        let description =
            TicketDescription::new(form.description).map_err(|_| FormError::InvalidValue)?;
        let contact_email = optional(&form.contact_email)
            .map(ContactEmail::new)
            .transpose()
            .map_err(|_| FormError::InvalidEmail)?;
        let contact_phone = optional(&form.contact_phone)
            .map(PhoneNumber::new)
            .transpose()
            .map_err(|_| FormError::InvalidPhoneNumber)?;

        Ok(NewSupportTicket {
            subject,
            description,
            priority: TicketPriority::parse(form.priority.trim()).unwrap_or_default(),
            contact_email,
            contact_phone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_sanitized_ticket() {
        let form = SupportTicketForm {
            subject: " Erro na agenda ".into(),
            description: "Não abre <script>alert(1)</script>".into(),
            priority: "Alta".into(),
            contact_email: "Suporte@Clinica.com".into(),
            contact_phone: "(11) 98765-4321".into(),
        };

        let ticket = NewSupportTicket::try_from(form).unwrap();
        assert_eq!(ticket.subject.as_str(), "Erro na agenda");
        assert!(!ticket.description.as_str().contains("script"));
        assert_eq!(ticket.priority, TicketPriority::Alta);
        assert_eq!(
            ticket.contact_email.as_ref().map(ContactEmail::as_str),
            Some("suporte@clinica.com")
        );
        assert_eq!(
            ticket.contact_phone.as_ref().map(PhoneNumber::as_str),
            Some("+5511987654321")
        );
    }

    #[test]
    fn requires_subject_and_description() {
        let result = NewSupportTicket::try_from(SupportTicketForm::default());
        assert!(matches!(result, Err(FormError::Validation(_))));
    }

    #[test]
    fn unknown_priority_defaults_to_normal() {
        let form = SupportTicketForm {
            subject: "Dúvida".into(),
            description: "Como exporto relatórios?".into(),
            priority: "Urgente".into(),
            ..Default::default()
        };
        let ticket = NewSupportTicket::try_from(form).unwrap();
        assert_eq!(ticket.priority, TicketPriority::Normal);
        assert!(ticket.contact_phone.is_none());
    }
}
