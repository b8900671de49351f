use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ContactEmail, PhoneNumber, TicketDescription, TicketId, TicketSubject};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TicketPriority {
    Baixa,
    #[default]
    Normal,
    Alta,
}

impl TicketPriority {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Baixa" => Some(TicketPriority::Baixa),
            "Normal" => Some(TicketPriority::Normal),
            "Alta" => Some(TicketPriority::Alta),
            _ => None,
        }
    }
}

/// Support request recorded on this workstation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SupportTicket {
    pub id: TicketId,
    pub subject: TicketSubject,
    pub description: TicketDescription,
    pub priority: TicketPriority,
    pub contact_email: Option<ContactEmail>,
    pub contact_phone: Option<PhoneNumber>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewSupportTicket {
    pub subject: TicketSubject,
    pub description: TicketDescription,
    pub priority: TicketPriority,
    pub contact_email: Option<ContactEmail>,
    pub contact_phone: Option<PhoneNumber>,
}

impl NewSupportTicket {
    pub fn into_ticket(self, created_at: DateTime<Utc>) -> SupportTicket {
        SupportTicket {
            id: TicketId::new(),
            subject: self.subject,
            description: self.description,
            priority: self.priority,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            created_at,
        }
    }
}
