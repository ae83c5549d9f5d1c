/// result of a create-once operation. an upsert never modifies an existing
/// node or edge, it reports the identity that was already there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome<T> {
    Created(T),
    Existing(T),
}

impl<T: Copy> UpsertOutcome<T> {
    pub fn id(&self) -> T {
        match self {
            UpsertOutcome::Created(id) => *id,
            UpsertOutcome::Existing(id) => *id,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, UpsertOutcome::Created(_))
    }
}
