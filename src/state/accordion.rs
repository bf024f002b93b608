//! FAQ accordion state: at most one panel open at a time.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    /// Close every other panel, then toggle panel `index`.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
