//! Outbound seams of the wizard controller.
//!
//! The controller never talks to a store or router directly. It issues
//! fire-and-forget commands through [`EditDispatcher`] and route changes
//! through [`Navigator`]; the surrounding application supplies adapters.

use std::fmt;

/// Direction passed with a page-selection update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Forward,
    Backward,
}

impl fmt::Display for PageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageDirection::Forward => write!(f, "forward"),
            PageDirection::Backward => write!(f, "backward"),
        }
    }
}

/// Domain commands emitted by the controller.
pub trait EditDispatcher {
    /// Requests the store to load everything the edit flow needs.
    fn initiate_edit(&mut self);

    fn update_page(&mut self, direction: PageDirection);

    /// Submits the selected devices for reassignment.
    fn submit(&mut self);
}

/// Route changes emitted by the controller.
pub trait Navigator {
    fn navigate_to(&mut self, path: &str);

    /// Equivalent of stepping one entry back in history.
    fn navigate_back(&mut self);
}

/// Value form of an [`EditDispatcher`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    InitiateEdit,
    UpdatePage(PageDirection),
    Submit,
}

impl fmt::Display for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditAction::InitiateEdit => write!(f, "initiateEditVirtualAccount"),
            EditAction::UpdatePage(direction) => write!(f, "updatePageSelection({direction})"),
            EditAction::Submit => write!(f, "submitDevices"),
        }
    }
}

/// Value form of a [`Navigator`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    To(String),
    Back,
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Navigation::To(path) => write!(f, "navigate to {path}"),
            Navigation::Back => write!(f, "navigate back"),
        }
    }
}

/// Dispatcher that queues every action for the caller to apply or inspect.
#[derive(Debug, Default)]
pub struct ActionLog {
    actions: Vec<EditAction>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> &[EditAction] {
        &self.actions
    }

    pub fn count(&self, action: EditAction) -> usize {
        self.actions.iter().filter(|item| **item == action).count()
    }

    /// Hands back queued actions in dispatch order and empties the queue.
    pub fn drain(&mut self) -> Vec<EditAction> {
        std::mem::take(&mut self.actions)
    }
}

impl EditDispatcher for ActionLog {
    fn initiate_edit(&mut self) {
        self.actions.push(EditAction::InitiateEdit);
    }

    fn update_page(&mut self, direction: PageDirection) {
        self.actions.push(EditAction::UpdatePage(direction));
    }

    fn submit(&mut self) {
        self.actions.push(EditAction::Submit);
    }
}

/// Navigator that records requested route changes.
#[derive(Debug, Default)]
pub struct NavigationLog {
    history: Vec<Navigation>,
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[Navigation] {
        &self.history
    }

    pub fn back_count(&self) -> usize {
        self.history
            .iter()
            .filter(|entry| **entry == Navigation::Back)
            .count()
    }

    pub fn drain(&mut self) -> Vec<Navigation> {
        std::mem::take(&mut self.history)
    }
}

impl Navigator for NavigationLog {
    fn navigate_to(&mut self, path: &str) {
        self.history.push(Navigation::To(path.to_string()));
    }

    fn navigate_back(&mut self) {
        self.history.push(Navigation::Back);
    }
}
