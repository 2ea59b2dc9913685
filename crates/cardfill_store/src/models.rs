use cardfill_core::{DisplayName, OwnedRecord, RecordId, Relation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Member,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Member => "member",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Disabled,
}

impl UserStatus {
    pub const ALL: [UserStatus; 2] = [UserStatus::Active, UserStatus::Disabled];

    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Disabled => "disabled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl DisplayName for User {
    const UNKNOWN_LABEL: &'static str = "未知用户";
    const DELETED_LABEL: &'static str = "已删除用户";

    fn display_name(&self) -> &str {
        &self.username
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVisibility {
    Public,
    Private,
}

impl CardVisibility {
    pub fn as_str(self) -> &'static str {
        match self {
            CardVisibility::Public => "public",
            CardVisibility::Private => "private",
        }
    }
}

/// A business card whose fields are used to auto-fill forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: RecordId,
    pub user_id: Option<RecordId>,
    pub name: String,
    pub category: String,
    pub visibility: CardVisibility,
    pub created_at: DateTime<Utc>,
}

impl DisplayName for Card {
    const UNKNOWN_LABEL: &'static str = "未知名片";
    const DELETED_LABEL: &'static str = "已删除名片";

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl OwnedRecord for Card {
    fn owner_id(&self) -> Option<RecordId> {
        self.user_id
    }
}

/// A reusable field definition offered when editing cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLibrary {
    pub id: RecordId,
    pub name: String,
    pub field_key: String,
    pub category: String,
    pub field_type: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

/// A user's request to change a card, waiting for admin review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEditRequest {
    pub id: RecordId,
    pub card_id: Option<RecordId>,
    pub user_id: Option<RecordId>,
    pub summary: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl OwnedRecord for CardEditRequest {
    fn owner_id(&self) -> Option<RecordId> {
        self.user_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeStatus {
    Draft,
    Published,
    Archived,
}

impl NoticeStatus {
    pub const ALL: [NoticeStatus; 3] = [
        NoticeStatus::Draft,
        NoticeStatus::Published,
        NoticeStatus::Archived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NoticeStatus::Draft => "draft",
            NoticeStatus::Published => "published",
            NoticeStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub status: NoticeStatus,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    Success,
    Failure,
}

impl AuditOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditOutcome::Success => "success",
            AuditOutcome::Failure => "failure",
        }
    }
}

/// One administrative or user action. `action` doubles as the log category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: RecordId,
    pub user_id: Option<RecordId>,
    pub action: String,
    pub target: String,
    pub outcome: AuditOutcome,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl OwnedRecord for AuditLog {
    fn owner_id(&self) -> Option<RecordId> {
        self.user_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStatus {
    Success,
    Failed,
}

impl FillStatus {
    pub const ALL: [FillStatus; 2] = [FillStatus::Success, FillStatus::Failed];

    pub fn as_str(self) -> &'static str {
        match self {
            FillStatus::Success => "success",
            FillStatus::Failed => "failed",
        }
    }
}

/// One auto-fill run of a card against a web form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillRecord {
    pub id: RecordId,
    pub card_id: Option<RecordId>,
    pub user_id: Option<RecordId>,
    pub site: String,
    pub field_count: u32,
    pub status: FillStatus,
    pub created_at: DateTime<Utc>,
}

impl OwnedRecord for FillRecord {
    fn owner_id(&self) -> Option<RecordId> {
        self.user_id
    }
}

/// A shareable link to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: RecordId,
    pub card_id: Option<RecordId>,
    pub user_id: Option<RecordId>,
    pub title: String,
    pub url: String,
    pub visit_count: u64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl OwnedRecord for Link {
    fn owner_id(&self) -> Option<RecordId> {
        self.user_id
    }
}

/// Every table of the store, as kept on disk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub cards: Vec<Card>,
    pub field_libraries: Vec<FieldLibrary>,
    pub card_edit_requests: Vec<CardEditRequest>,
    pub notices: Vec<Notice>,
    pub audit_logs: Vec<AuditLog>,
    pub fill_records: Vec<FillRecord>,
    pub links: Vec<Link>,
}

impl Snapshot {
    pub fn user(&self, id: RecordId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn card(&self, id: RecordId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Follows a record's owning-user reference.
    pub fn owner<R: OwnedRecord>(&self, record: &R) -> Relation<User> {
        Relation::resolve(record.owner_id(), |id| self.user(id).cloned())
    }
}
