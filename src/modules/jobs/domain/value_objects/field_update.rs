/// Per-attribute instruction inside a partial update
///
/// `Keep` leaves the stored value untouched, `Set` replaces it. Unlike a bare
/// `Option`, the intent reads the same at every layer the update crosses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    Keep,
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, FieldUpdate::Set(_))
    }

    /// Storage-row shape: present column or skipped column
    pub fn into_option(self) -> Option<T> {
        match self {
            FieldUpdate::Set(value) => Some(value),
            FieldUpdate::Keep => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FieldUpdate<U> {
        match self {
            FieldUpdate::Set(value) => FieldUpdate::Set(f(value)),
            FieldUpdate::Keep => FieldUpdate::Keep,
        }
    }

    /// Write the new value into `target` when one is present
    pub fn apply_to(self, target: &mut T) -> bool {
        match self {
            FieldUpdate::Set(value) => {
                *target = value;
                true
            }
            FieldUpdate::Keep => false,
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Keep,
        }
    }
}
