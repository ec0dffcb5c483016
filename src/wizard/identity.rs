/// Detects when a watched identity value changes after it was first seen.
///
/// The first present value arms the watch; absent values before that are
/// ignored so a store that has not loaded the identity yet never counts as a
/// change. Once armed, any different observation fires, including the value
/// being cleared.
#[derive(Debug, Clone)]
pub struct IdentityWatch<T> {
    armed: bool,
    last: Option<T>,
}

impl<T> Default for IdentityWatch<T> {
    fn default() -> Self {
        Self {
            armed: false,
            last: None,
        }
    }
}

impl<T: PartialEq + Clone> IdentityWatch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` and reports whether it differs from the value seen on
    /// the previous armed observation.
    pub fn observe(&mut self, value: Option<&T>) -> bool {
        if !self.armed {
            if let Some(value) = value {
                self.last = Some(value.clone());
                self.armed = true;
            }
            return false;
        }
        if self.last.as_ref() == value {
            return false;
        }
        self.last = value.cloned();
        true
    }

    pub fn has_seen(&self) -> bool {
        self.armed
    }

    pub fn current(&self) -> Option<&T> {
        self.last.as_ref()
    }
}
