use serde::{Deserialize, Serialize};

/// One question/answer tuple taken from a single CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Consumes the pair, returning `(question, answer)`.
    pub fn into_tuple(self) -> (String, String) {
        (self.question, self.answer)
    }
}

impl<Q: Into<String>, A: Into<String>> From<(Q, A)> for QaPair {
    fn from((question, answer): (Q, A)) -> Self {
        Self::new(question, answer)
    }
}

impl PartialEq<(&str, &str)> for QaPair {
    fn eq(&self, other: &(&str, &str)) -> bool {
        self.question == other.0 && self.answer == other.1
    }
}
