//! Invitee domain model for follow-up management.

use serde::{Deserialize, Serialize};

/// Category of an invitee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteeKind {
    Speaker,
    Sponsor,
    Guest,
}

impl std::fmt::Display for InviteeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InviteeKind::Speaker => write!(f, "speaker"),
            InviteeKind::Sponsor => write!(f, "sponsor"),
            InviteeKind::Guest => write!(f, "guest"),
        }
    }
}

/// How far an invitee has engaged with the last email sent to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementStatus {
    NotOpened,
    Opened,
    Clicked,
}

impl std::fmt::Display for EngagementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngagementStatus::NotOpened => write!(f, "not_opened"),
            EngagementStatus::Opened => write!(f, "opened"),
            EngagementStatus::Clicked => write!(f, "clicked"),
        }
    }
}

/// An invitee who has not yet responded and is eligible for a follow-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub kind: InviteeKind,
    /// Human-readable description of the last contact, e.g. "5 days ago".
    pub last_contact: String,
    pub status: EngagementStatus,
}

/// Sample roster of non-responders.
pub fn seed_invitees() -> Vec<Invitee> {
    use EngagementStatus::{Clicked, NotOpened, Opened};
    use InviteeKind::{Guest, Speaker, Sponsor};

    let rows = [
        (1, "John Smith", "john.smith@example.com", Speaker, "5 days ago", NotOpened),
        (2, "Sarah Johnson", "sarah.j@example.com", Sponsor, "3 days ago", Opened),
        (3, "Michael Brown", "mbrown@example.com", Guest, "7 days ago", NotOpened),
        (4, "Emily Davis", "emily.davis@example.com", Speaker, "4 days ago", Opened),
        (5, "David Wilson", "dwilson@example.com", Guest, "6 days ago", Clicked),
        (6, "Jennifer Lee", "jlee@example.com", Sponsor, "8 days ago", NotOpened),
        (7, "Robert Taylor", "rtaylor@example.com", Guest, "5 days ago", Opened),
        (8, "Lisa Anderson", "lisa.a@example.com", Speaker, "9 days ago", NotOpened),
    ];

    rows.into_iter()
        .map(|(id, name, email, kind, last_contact, status)| Invitee {
            id,
            name: name.to_string(),
            email: email.to_string(),
            kind,
            last_contact: last_contact.to_string(),
            status,
        })
        .collect()
}
