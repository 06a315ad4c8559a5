//! Question/answer column selection for a single row.

use qa_model::ColumnRole;

/// Resolved question and answer roles for a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSelection {
    pub question: ColumnRole,
    pub answer: Option<ColumnRole>,
}

impl ColumnSelection {
    pub const fn new(question: ColumnRole, answer: Option<ColumnRole>) -> Self {
        Self { question, answer }
    }

    /// Returns `(question_index, answer_index)` for a row of `width` fields.
    ///
    /// `None` marks the row as malformed: fewer than two fields, or a column
    /// role that falls outside the row.
    pub fn select(&self, width: usize) -> Option<(usize, usize)> {
        if width < 2 {
            return None;
        }

        let question = self.question.resolve(width)?;
        let mut answer = match self.answer {
            Some(role) => role.resolve(width)?,
            None => self.question.opposite_end(width)?,
        };

        // Explicit answer landed on the question column.
        if answer == question {
            answer = if question == 0 { 1 } else { 0 };
        }

        Some((question, answer))
    }
}
