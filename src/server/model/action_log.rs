/// Mutation recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
        }
    }
}

/// Parameters for appending an audit entry.
#[derive(Debug, Clone)]
pub struct CreateActionLogParams {
    pub user_id: i32,
    pub action: AuditAction,
    pub table_name: String,
    pub record_id: i32,
    /// JSON snapshot of the record after the action.
    pub snapshot: String,
}
