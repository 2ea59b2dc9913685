//! Deterministic demo data.
//!
//! Some references deliberately point at ids that do not exist, and some are
//! left empty, so the console shows both missing-relation labels.
use cardfill_core::RecordId;
use chrono::{DateTime, TimeDelta, Utc};

use crate::models::{
    AuditLog, AuditOutcome, Card, CardEditRequest, CardVisibility, FieldLibrary, FillRecord,
    FillStatus, Link, Notice, NoticeStatus, RequestStatus, Snapshot, User, UserRole, UserStatus,
};

pub const DEMO_USERS: u64 = 40;
pub const DEMO_CARDS: u64 = 60;
pub const DEMO_FIELD_LIBRARIES: u64 = 25;
pub const DEMO_EDIT_REQUESTS: u64 = 42;
pub const DEMO_NOTICES: u64 = 18;
pub const DEMO_AUDIT_LOGS: u64 = 80;
pub const DEMO_FILL_RECORDS: u64 = 120;
pub const DEMO_LINKS: u64 = 35;

// 2024-01-01T00:00:00Z
const BASE_EPOCH_SECS: i64 = 1_704_067_200;

const GIVEN_NAMES: [&str; 10] = [
    "wei", "fang", "lei", "jing", "min", "alice", "bob", "carol", "dave", "erin",
];
const TEAMS: [&str; 5] = ["Sales", "Engineering", "Design", "Support", "Marketing"];
const CARD_CATEGORIES: [&str; 3] = ["business", "personal", "education"];
const FIELDS: [(&str, &str, &str, &str); 15] = [
    ("Full name", "full_name", "contact", "text"),
    ("Email", "email", "contact", "email"),
    ("Mobile phone", "mobile", "contact", "phone"),
    ("Office phone", "office_phone", "contact", "phone"),
    ("Company", "company", "company", "text"),
    ("Department", "department", "company", "text"),
    ("Job title", "job_title", "company", "text"),
    ("Company website", "website", "company", "url"),
    ("Street", "street", "address", "text"),
    ("City", "city", "address", "text"),
    ("Postal code", "postal_code", "address", "text"),
    ("Country", "country", "address", "text"),
    ("Birthday", "birthday", "custom", "date"),
    ("WeChat", "wechat", "custom", "text"),
    ("Notes", "notes", "custom", "text"),
];
const AUDIT_ACTIONS: [&str; 7] = [
    "login",
    "logout",
    "card.create",
    "card.update",
    "card.delete",
    "user.disable",
    "notice.publish",
];
const FILL_SITES: [&str; 4] = [
    "https://forms.example.com/signup",
    "https://expo.example.org/register",
    "https://crm.example.net/leads/new",
    "https://jobs.example.com/apply",
];

fn at(hours: u64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(BASE_EPOCH_SECS + (hours as i64) * 3600)
}

/// `None` for every `every`-th id, otherwise an id spread over `1..=modulo`.
fn reference(id: RecordId, every: u64, modulo: u64) -> Option<RecordId> {
    (id % every != 0).then_some(id * 11 % modulo + 1)
}

fn username(id: RecordId) -> String {
    let name = GIVEN_NAMES[(id as usize) % GIVEN_NAMES.len()];
    format!("{name}{id:02}")
}

/// Builds the demo snapshot used by `--demo` and by tests.
pub fn demo_snapshot() -> Snapshot {
    let users = (1..=DEMO_USERS)
        .map(|id| User {
            id,
            username: username(id),
            email: (id % 5 != 0).then(|| format!("{}@example.com", username(id))),
            phone: (id % 2 == 0).then(|| format!("138{:08}", id * 7919)),
            role: if id <= 3 {
                UserRole::Admin
            } else {
                UserRole::Member
            },
            status: if id % 7 == 0 {
                UserStatus::Disabled
            } else {
                UserStatus::Active
            },
            created_at: at(id),
        })
        .collect();

    // Owners 41..=45 do not exist.
    let cards = (1..=DEMO_CARDS)
        .map(|id| Card {
            id,
            user_id: reference(id, 13, 45),
            name: format!("{} card #{id}", TEAMS[(id as usize) % TEAMS.len()]),
            category: CARD_CATEGORIES[(id as usize) % CARD_CATEGORIES.len()].to_string(),
            visibility: if id % 3 == 0 {
                CardVisibility::Private
            } else {
                CardVisibility::Public
            },
            created_at: at(100 + id),
        })
        .collect();

    let field_libraries = (1..=DEMO_FIELD_LIBRARIES)
        .map(|id| {
            let (name, key, category, field_type) = FIELDS[((id - 1) as usize) % FIELDS.len()];
            let (name, key) = if id as usize > FIELDS.len() {
                (format!("{name} (alt {id})"), format!("{key}_{id}"))
            } else {
                (name.to_string(), key.to_string())
            };
            FieldLibrary {
                id,
                name,
                field_key: key,
                category: category.to_string(),
                field_type: field_type.to_string(),
                is_active: id % 6 != 0,
                created_at: at(200 + id),
            }
        })
        .collect();

    // Every fourth request is pending: 10 of 42. Cards 61..=64 do not exist.
    let card_edit_requests = (1..=DEMO_EDIT_REQUESTS)
        .map(|id| CardEditRequest {
            id,
            card_id: reference(id, 11, 64),
            user_id: Some(id % DEMO_USERS + 1),
            summary: format!("Update {} details", FIELDS[(id as usize) % FIELDS.len()].0),
            status: match id % 4 {
                0 => RequestStatus::Pending,
                1 | 2 => RequestStatus::Approved,
                _ => RequestStatus::Rejected,
            },
            created_at: at(300 + id),
        })
        .collect();

    let notices = (1..=DEMO_NOTICES)
        .map(|id| Notice {
            id,
            title: format!("Maintenance window {id}"),
            content: format!(
                "The fill service will be read-only for {} minutes.",
                10 * id
            ),
            status: NoticeStatus::ALL[(id as usize) % NoticeStatus::ALL.len()],
            pinned: id % 5 == 0,
            created_at: at(400 + id * 24),
        })
        .collect();

    // Users 41 and 42 do not exist.
    let audit_logs = (1..=DEMO_AUDIT_LOGS)
        .map(|id| AuditLog {
            id,
            user_id: reference(id, 17, 42),
            action: AUDIT_ACTIONS[(id as usize) % AUDIT_ACTIONS.len()].to_string(),
            target: format!("record #{}", id * 3 % 97),
            outcome: if id % 9 == 0 {
                AuditOutcome::Failure
            } else {
                AuditOutcome::Success
            },
            ip_address: (id % 10 != 0).then(|| format!("192.168.1.{}", id % 250 + 1)),
            created_at: at(500 + id),
        })
        .collect();

    let fill_records = (1..=DEMO_FILL_RECORDS)
        .map(|id| FillRecord {
            id,
            card_id: reference(id, 19, 62),
            user_id: Some(id % DEMO_USERS + 1),
            site: FILL_SITES[(id as usize) % FILL_SITES.len()].to_string(),
            field_count: 3 + (id % 9) as u32,
            status: if id % 6 == 0 {
                FillStatus::Failed
            } else {
                FillStatus::Success
            },
            created_at: at(600 + id),
        })
        .collect();

    let links = (1..=DEMO_LINKS)
        .map(|id| Link {
            id,
            card_id: reference(id, 23, 61),
            user_id: Some(id % DEMO_USERS + 1),
            title: format!("Share link {id}"),
            url: format!(
                "https://cardfill.example.com/s/{:08x}",
                id.wrapping_mul(2_654_435_761) % (1 << 32)
            ),
            visit_count: id * 37 % 500,
            is_active: id % 4 != 0,
            created_at: at(800 + id),
        })
        .collect();

    Snapshot {
        users,
        cards,
        field_libraries,
        card_edit_requests,
        notices,
        audit_logs,
        fill_records,
        links,
    }
}
