//! Trip planner ("quick nav") form state

use crate::services::PlanRequest;

/// A single-line text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    /// Input buffer
    pub value: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.value.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.value.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.value.remove(byte_idx);
        true
    }

    /// Delete character at cursor
    pub fn delete_char_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.value.remove(byte_idx);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn move_start(&mut self) -> bool {
        std::mem::replace(&mut self.cursor, 0) != 0
    }

    pub fn move_end(&mut self) -> bool {
        let end = self.char_count();
        std::mem::replace(&mut self.cursor, end) != end
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// The two inputs of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Destination,
    Origin,
}

/// Progress of the last submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    /// Waiting for the planning endpoint to confirm this request
    Submitting(PlanRequest),
    /// The endpoint rejected the plan or could not be reached
    Failed(String),
}

/// Form state, local to the mounted form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickNavState {
    /// "Where would you like to go?"
    pub destination: TextField,
    /// "Start location", hidden by default
    pub origin: TextField,
    pub origin_visible: bool,
    pub submission: Submission,
}

impl QuickNavState {
    /// Flip the origin field's visibility; its text is kept
    pub fn toggle_origin(&mut self) {
        self.origin_visible = !self.origin_visible;
    }

    pub fn field(&self, field: Field) -> &TextField {
        match field {
            Field::Destination => &self.destination,
            Field::Origin => &self.origin,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut TextField {
        match field {
            Field::Destination => &mut self.destination,
            Field::Origin => &mut self.origin,
        }
    }

    /// Body of the planning request for the current inputs
    pub fn request(&self) -> PlanRequest {
        PlanRequest { start: self.origin.value.clone(), end: self.destination.value.clone() }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.submission, Submission::Submitting(_))
    }

    /// Inline error from the last submission
    pub fn error(&self) -> Option<&str> {
        match &self.submission {
            Submission::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
