/// Primary key shared by every record kind.
pub type RecordId = u64;

/// "Has a display name" capability.
///
/// The sentinel labels are shown in place of the name when a joined record
/// cannot be resolved.
pub trait DisplayName {
    /// Shown when the referencing row carries no reference at all.
    const UNKNOWN_LABEL: &'static str;
    /// Shown when the reference points at a record that no longer exists.
    const DELETED_LABEL: &'static str;

    fn display_name(&self) -> &str;
}

/// "Has an owning user reference" capability.
pub trait OwnedRecord {
    fn owner_id(&self) -> Option<RecordId>;
}

/// Outcome of following a reference to another record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation<T> {
    Present(T),
    /// A reference is set but its target is gone.
    Deleted,
    /// No reference is set.
    Unknown,
}

impl<T> Relation<T> {
    /// Follows `reference` with `lookup`, telling a missing reference apart
    /// from a dangling one.
    pub fn resolve(
        reference: Option<RecordId>,
        lookup: impl FnOnce(RecordId) -> Option<T>,
    ) -> Self {
        match reference {
            None => Relation::Unknown,
            Some(id) => lookup(id).map_or(Relation::Deleted, Relation::Present),
        }
    }

    pub fn present(&self) -> Option<&T> {
        match self {
            Relation::Present(value) => Some(value),
            Relation::Deleted | Relation::Unknown => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Relation::Present(_))
    }
}

impl<T: DisplayName> Relation<T> {
    /// Display name of the target, or the matching sentinel.
    pub fn label(&self) -> &str {
        match self {
            Relation::Present(value) => value.display_name(),
            Relation::Deleted => T::DELETED_LABEL,
            Relation::Unknown => T::UNKNOWN_LABEL,
        }
    }
}

impl<T: OwnedRecord> Relation<T> {
    /// Owner of the target, when the target exists and has one.
    pub fn owner_id(&self) -> Option<RecordId> {
        self.present().and_then(OwnedRecord::owner_id)
    }
}
