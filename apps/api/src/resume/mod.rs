// Resume Q&A core: keyword classification + per-section answer formatting.
// Pure and synchronous; the document is read-only.

pub mod answerer;
pub mod classifier;

use tracing::debug;

use crate::models::resume::ResumeDocument;
use crate::resume::classifier::SectionKeywordTable;

/// Returned when no section keyword matches the question.
pub const NO_ANSWER: &str = "Sorry, I don't have an answer to that question yet.";

/// Classifies `question` against `table` and answers it from `doc`.
/// Always returns text; a classification miss yields [`NO_ANSWER`].
pub fn query_resume(doc: &ResumeDocument, table: &SectionKeywordTable, question: &str) -> String {
    match table.classify(question) {
        Some(section) => {
            debug!(%section, "Question classified");
            answerer::answer(doc, section, question)
        }
        None => {
            debug!("Question matched no section keyword");
            NO_ANSWER.to_string()
        }
    }
}
