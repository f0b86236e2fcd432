//! Section classifier: maps a free-text question to one resume section.
//!
//! First match wins: sections are tried in table order, keywords in list order,
//! and the first case-insensitive substring hit decides. There is no scoring, so a
//! question that mentions keywords from two sections always lands on the one
//! declared first.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    PersonalInfo,
    Experience,
    Education,
    Projects,
    Skills,
    Certificates,
    ResearchPublications,
    Achievements,
    References,
}

impl Section {
    #[cfg(test)]
    pub const ALL: [Section; 9] = [
        Section::PersonalInfo,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Skills,
        Section::Certificates,
        Section::ResearchPublications,
        Section::Achievements,
        Section::References,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::PersonalInfo => "personal_info",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Certificates => "certificates",
            Section::ResearchPublications => "research_publications",
            Section::Achievements => "achievements",
            Section::References => "references",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered table of sections and their trigger keywords. Built once at startup
/// and handed to the classifier; declaration order is classification precedence.
#[derive(Debug, Clone)]
pub struct SectionKeywordTable {
    entries: Vec<(Section, Vec<String>)>,
}

impl SectionKeywordTable {
    /// Keywords are stored lowercased so matching only lowercases the question.
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Section, K)>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(section, keywords)| {
                    let keywords = keywords
                        .into_iter()
                        .map(|k| k.as_ref().to_lowercase())
                        .collect();
                    (section, keywords)
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(Section, Vec<String>)] {
        &self.entries
    }

    /// Returns the first section (in table order) with any keyword contained in
    /// the lowercased question, or `None` when nothing matches.
    pub fn classify(&self, question: &str) -> Option<Section> {
        let q = question.to_lowercase();
        self.entries
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| q.contains(kw.as_str())))
            .map(|(section, _)| *section)
    }
}

impl Default for SectionKeywordTable {
    fn default() -> Self {
        Self::new([
            (
                Section::PersonalInfo,
                &["name", "email", "phone", "address", "linkedin", "github", "summary"][..],
            ),
            (
                Section::Experience,
                &[
                    "experience",
                    "role",
                    "position",
                    "responsibility",
                    "job",
                    "work",
                    "company",
                    "start date",
                    "end date",
                ][..],
            ),
            (
                Section::Education,
                &["education", "degree", "study", "university", "college", "school"][..],
            ),
            (
                Section::Projects,
                &["project", "app", "application", "development"][..],
            ),
            (
                Section::Skills,
                &["skill", "technology", "framework", "programming"][..],
            ),
            (
                Section::Certificates,
                &[
                    "certificate",
                    "course",
                    "training",
                    "AI",
                    "artificial intelligence",
                    "AWS",
                    "API",
                    "Microservices",
                ][..],
            ),
            (
                Section::ResearchPublications,
                &["publication", "research", "paper", "doi"][..],
            ),
            (
                Section::Achievements,
                &["award", "achievement", "recognition"][..],
            ),
            (
                Section::References,
                &["reference", "contact", "referee"][..],
            ),
        ])
    }
}
