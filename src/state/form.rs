//! Form controller state: field values, errors, and submit gating.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::state::validate::{FieldSpec, validate};

/// Delay before a successfully "sent" form is reset, simulating an
/// asynchronous send. No real network call is made.
pub const RESET_DELAY_MS: u64 = 700;

/// One field's live state: its spec, current value, and current error.
#[derive(Clone, Debug)]
pub struct FieldState {
    pub spec: FieldSpec,
    pub value: String,
    pub error: Option<&'static str>,
}

/// Controller state for one validated form.
///
/// Validity is recomputed on every input, blur, and submit; it is never
/// cached stale.
#[derive(Clone, Debug)]
pub struct FormState {
    pub fields: Vec<FieldState>,
}

impl FormState {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        let fields = specs
            .into_iter()
            .map(|spec| FieldState { spec, value: String::new(), error: None })
            .collect();
        Self { fields }
    }

    /// Update a field's value and revalidate it.
    pub fn set_value(&mut self, index: usize, value: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value;
            field.error = validate(&field.spec, &field.value);
        }
    }

    /// Revalidate a field when it loses focus.
    pub fn blur(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = validate(&field.spec, &field.value);
        }
    }

    /// Revalidate every field. Returns `true` when the form may submit.
    pub fn validate_all(&mut self) -> bool {
        for field in &mut self.fields {
            field.error = validate(&field.spec, &field.value);
        }
        self.fields.iter().all(|f| f.error.is_none())
    }

    /// Index of the first field currently holding an error.
    pub fn first_invalid(&self) -> Option<usize> {
        self.fields.iter().position(|f| f.error.is_some())
    }

    /// Clear all values and errors, as after a simulated send.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
    }
}
