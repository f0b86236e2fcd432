//! Section answerer: formats the stored fields of one section as plain text.
//!
//! Every rule is total: absent data resolves to "N/A", never to an error or an
//! empty string.

use crate::models::resume::{
    value_text, KeySkills, ProjectEntry, ResumeDocument, NOT_AVAILABLE,
};
use crate::resume::classifier::Section;

/// Keywords that narrow a certificates answer, checked in this order.
const CERTIFICATE_FILTERS: &[&str] = &["api", "aws", "microservices", "artificial intelligence", "ai"];

/// Answers `question` from the given section of `doc`.
pub fn answer(doc: &ResumeDocument, section: Section, question: &str) -> String {
    let q = question.trim().to_lowercase();
    match section {
        Section::PersonalInfo => answer_personal_info(doc, &q),
        Section::Experience => answer_experience(doc, &q),
        Section::Education => answer_education(doc),
        Section::Projects => answer_projects(doc, &q),
        Section::Skills => answer_skills(doc),
        Section::Certificates => answer_certificates(doc, &q),
        Section::ResearchPublications => answer_publications(doc),
        Section::Achievements => answer_achievements(doc),
        Section::References => answer_references(doc),
    }
}

/// Lowercases and drops everything that is not an ASCII letter or digit.
/// Used only to compare project titles against the question.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

fn or_na(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_AVAILABLE)
}

fn join_or_na(lines: Vec<String>, sep: &str) -> String {
    if lines.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        lines.join(sep)
    }
}

fn answer_personal_info(doc: &ResumeDocument, q: &str) -> String {
    let info = &doc.personal_info;
    if let Some((_, value)) = info.iter().find(|(key, _)| q.contains(&key.to_lowercase())) {
        return value_text(value).unwrap_or_else(|| NOT_AVAILABLE.to_string());
    }
    let values = info
        .values()
        .map(|v| value_text(v).unwrap_or_else(|| NOT_AVAILABLE.to_string()))
        .collect();
    join_or_na(values, ", ")
}

fn answer_experience(doc: &ResumeDocument, q: &str) -> String {
    let roles = &doc.experience;
    let role_at = |idx: Option<usize>| -> String {
        idx.and_then(|i| roles.get(i))
            .map(|e| or_na(&e.role).to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    if q.contains("present job") {
        return role_at(Some(0));
    }
    if q.contains("previous job") || q.contains("last job") {
        return role_at(Some(1));
    }
    if q.contains("first job") {
        return role_at(roles.len().checked_sub(1));
    }

    // An entry without a role has an empty role name, which every question contains.
    let hit = roles.iter().find(|e| {
        let role_name = e.role.as_deref().unwrap_or_default().to_lowercase();
        q.contains(&role_name)
    });
    if let Some(entry) = hit {
        return if q.contains("start date") {
            or_na(&entry.start).to_string()
        } else if q.contains("end date") {
            or_na(&entry.end).to_string()
        } else if q.contains("company") {
            or_na(&entry.company).to_string()
        } else if q.contains("responsibility") || q.contains("responsibilities") {
            join_or_na(entry.responsibilities.clone(), "\n")
        } else {
            or_na(&entry.role).to_string()
        };
    }

    let names = roles.iter().map(|e| or_na(&e.role).to_string()).collect();
    join_or_na(names, ", ")
}

fn answer_certificates(doc: &ResumeDocument, q: &str) -> String {
    let certs = &doc.certificates;
    let filtered: Vec<String> = CERTIFICATE_FILTERS
        .iter()
        .find(|kw| q.contains(*kw))
        .map(|kw| {
            certs
                .iter()
                .filter(|c| c.to_lowercase().contains(kw))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    if filtered.is_empty() {
        join_or_na(certs.clone(), "\n")
    } else {
        filtered.join("\n")
    }
}

fn project_block(p: &ProjectEntry) -> String {
    let technologies = if p.technologies.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        p.technologies.join(", ")
    };
    format!(
        "Title: {}\nDescription: {}\nTechnologies: {}",
        or_na(&p.title),
        or_na(&p.description),
        technologies
    )
}

fn answer_projects(doc: &ResumeDocument, q: &str) -> String {
    let projects = &doc.projects;
    let q_norm = normalize_text(q);
    let titles: Vec<String> = projects
        .iter()
        .map(|p| normalize_text(p.title.as_deref().unwrap_or_default()))
        .collect();

    let exact = titles.iter().position(|t| *t == q_norm);
    // Longest title mentioned in the question; the earlier project wins a tie.
    let mentioned = || {
        titles
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_empty() && q_norm.contains(t.as_str()))
            .max_by(|(ia, a), (ib, b)| a.len().cmp(&b.len()).then(ib.cmp(ia)))
            .map(|(idx, _)| idx)
    };
    if let Some(idx) = exact.or_else(mentioned) {
        return project_block(&projects[idx]);
    }

    join_or_na(projects.iter().map(project_block).collect(), "\n\n")
}

fn answer_education(doc: &ResumeDocument) -> String {
    let lines = doc
        .education
        .iter()
        .map(|e| {
            format!(
                "{}, {} ({} - {})",
                or_na(&e.degree),
                or_na(&e.institution),
                or_na(&e.start),
                or_na(&e.end)
            )
        })
        .collect();
    join_or_na(lines, "\n")
}

fn answer_publications(doc: &ResumeDocument) -> String {
    let titles = doc
        .research_publications
        .iter()
        .map(|p| or_na(&p.title).to_string())
        .collect();
    join_or_na(titles, "\n")
}

fn answer_skills(doc: &ResumeDocument) -> String {
    if doc.key_skills.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    let lines = match &doc.key_skills {
        KeySkills::Categorized(categories) => categories
            .iter()
            .map(|(category, items)| format!("{category}: {}", items.join(", ")))
            .collect(),
        KeySkills::Flat(items) => items.clone(),
    };
    join_or_na(lines, "\n")
}

fn answer_achievements(doc: &ResumeDocument) -> String {
    join_or_na(doc.achievements.clone(), "\n")
}

fn answer_references(doc: &ResumeDocument) -> String {
    let lines = doc
        .references
        .iter()
        .map(|r| {
            format!(
                "{} ({}) - Email: {}, Phone: {}",
                or_na(&r.name),
                or_na(&r.role),
                or_na(&r.email),
                or_na(&r.phone)
            )
        })
        .collect();
    join_or_na(lines, "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> ResumeDocument {
        ResumeDocument::from_value(value)
    }

    fn experience_doc() -> ResumeDocument {
        doc(json!({
            "experience": [
                {"role": "Senior Engineer", "company": "Acme", "start": "2022", "end": "Present",
                 "responsibilities": ["Lead platform", "Mentor juniors"]},
                {"role": "Engineer", "company": "Initech", "start": "2019", "end": "2022"},
                {"role": "Intern", "company": "Globex", "start": "2018", "end": "2018"}
            ]
        }))
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("My Cool App!"), "mycoolapp");
        assert_eq!(normalize_text("  my cool\tapp "), "mycoolapp");
        assert_eq!(normalize_text("mycoolapp"), "mycoolapp");
        assert_eq!(normalize_text("Été 2.0"), "t20");
    }

    #[test]
    fn test_personal_info_field_lookup() {
        let d = doc(json!({"personal_info": {"email": "a@b.com"}}));
        assert_eq!(answer(&d, Section::PersonalInfo, "What is your email?"), "a@b.com");
    }

    #[test]
    fn test_personal_info_all_values_in_order() {
        let d = doc(json!({"personal_info": {"name": "Ada", "city": "London", "age": 36}}));
        assert_eq!(
            answer(&d, Section::PersonalInfo, "Tell me a summary"),
            "Ada, London, 36"
        );
    }

    #[test]
    fn test_personal_info_key_match_is_case_insensitive() {
        let d = doc(json!({"personal_info": {"GitHub": "github.com/ada"}}));
        assert_eq!(
            answer(&d, Section::PersonalInfo, "github link?"),
            "github.com/ada"
        );
    }

    #[test]
    fn test_personal_info_empty() {
        let d = doc(json!({}));
        assert_eq!(answer(&d, Section::PersonalInfo, "name?"), "N/A");
    }

    #[test]
    fn test_first_job_is_last_entry() {
        let d = doc(json!({"experience": [{"role": "Eng II"}, {"role": "Eng I"}]}));
        assert_eq!(answer(&d, Section::Experience, "What was your first job?"), "Eng I");
    }

    #[test]
    fn test_present_and_previous_job() {
        let d = experience_doc();
        assert_eq!(
            answer(&d, Section::Experience, "What is your present job?"),
            "Senior Engineer"
        );
        assert_eq!(answer(&d, Section::Experience, "previous job?"), "Engineer");
        assert_eq!(answer(&d, Section::Experience, "And your last job?"), "Engineer");
    }

    #[test]
    fn test_previous_job_with_single_entry_is_na() {
        let d = doc(json!({"experience": [{"role": "Founder"}]}));
        assert_eq!(answer(&d, Section::Experience, "previous job"), "N/A");
    }

    #[test]
    fn test_job_phrases_with_no_entries() {
        let d = doc(json!({}));
        assert_eq!(answer(&d, Section::Experience, "present job"), "N/A");
        assert_eq!(answer(&d, Section::Experience, "first job"), "N/A");
        assert_eq!(answer(&d, Section::Experience, "work history"), "N/A");
    }

    #[test]
    fn test_role_sub_fields() {
        let d = experience_doc();
        assert_eq!(
            answer(&d, Section::Experience, "Intern company?"),
            "Globex"
        );
        assert_eq!(
            answer(&d, Section::Experience, "start date as intern"),
            "2018"
        );
        assert_eq!(
            answer(&d, Section::Experience, "Senior Engineer end date"),
            "Present"
        );
        assert_eq!(
            answer(&d, Section::Experience, "senior engineer responsibilities"),
            "Lead platform\nMentor juniors"
        );
        assert_eq!(
            answer(&d, Section::Experience, "engineer responsibility"),
            "N/A"
        );
        assert_eq!(answer(&d, Section::Experience, "intern role"), "Intern");
    }

    #[test]
    fn test_role_scan_takes_first_entry_in_list_order() {
        let d = experience_doc();
        // "senior engineer" also contains "engineer"; the first entry in the list wins.
        assert_eq!(
            answer(&d, Section::Experience, "senior engineer company"),
            "Acme"
        );
    }

    #[test]
    fn test_experience_lists_all_roles() {
        let d = experience_doc();
        assert_eq!(
            answer(&d, Section::Experience, "work experience"),
            "Senior Engineer, Engineer, Intern"
        );
    }

    #[test]
    fn test_entry_without_role_matches_any_question() {
        let d = doc(json!({"experience": [{"company": "Stealth"}, {"role": "Engineer"}]}));
        assert_eq!(answer(&d, Section::Experience, "work experience"), "N/A");
        assert_eq!(answer(&d, Section::Experience, "which company"), "Stealth");
    }

    #[test]
    fn test_certificates_filtered_by_keyword() {
        let d = doc(json!({"certificates": ["AWS Certified", "Scrum Master"]}));
        assert_eq!(
            answer(&d, Section::Certificates, "Any aws certificates?"),
            "AWS Certified"
        );
    }

    #[test]
    fn test_certificates_filter_without_hits_returns_all() {
        let d = doc(json!({"certificates": ["AWS Certified", "Scrum Master"]}));
        assert_eq!(
            answer(&d, Section::Certificates, "api certificates"),
            "AWS Certified\nScrum Master"
        );
    }

    #[test]
    fn test_certificates_first_filter_keyword_wins() {
        let d = doc(json!({"certificates": ["REST API Design", "AI Fundamentals"]}));
        // "api" is checked before "ai", and both appear in the question.
        assert_eq!(
            answer(&d, Section::Certificates, "ai and api certificates"),
            "REST API Design"
        );
    }

    #[test]
    fn test_certificates_filter_skips_null_entries() {
        let d = doc(json!({"certificates": ["AWS Certified", null, "Scrum Master"]}));
        assert_eq!(
            answer(&d, Section::Certificates, "aws certificate"),
            "AWS Certified"
        );
    }

    #[test]
    fn test_achievements_with_numeric_entry() {
        let d = doc(json!({"achievements": ["Winner", 2021]}));
        assert_eq!(answer(&d, Section::Achievements, "awards"), "Winner\n2021");
    }

    #[test]
    fn test_certificates_empty() {
        let d = doc(json!({}));
        assert_eq!(answer(&d, Section::Certificates, "certificates"), "N/A");
    }

    #[test]
    fn test_project_exact_title_match() {
        let d = doc(json!({"projects": [
            {"title": "Inventory App", "description": "Tracks stock", "technologies": ["Rust", "Postgres"]},
            {"title": "Chat Bot", "description": "Answers", "technologies": []}
        ]}));
        assert_eq!(
            answer(&d, Section::Projects, "inventory-app!"),
            "Title: Inventory App\nDescription: Tracks stock\nTechnologies: Rust, Postgres"
        );
    }

    #[test]
    fn test_project_title_mentioned_in_question() {
        let d = doc(json!({"projects": [
            {"title": "Chat Bot", "description": "Answers"},
            {"title": "Inventory App", "description": "Tracks stock", "technologies": ["Rust"]}
        ]}));
        assert_eq!(
            answer(&d, Section::Projects, "Tell me about the Inventory App project"),
            "Title: Inventory App\nDescription: Tracks stock\nTechnologies: Rust"
        );
    }

    #[test]
    fn test_longest_mentioned_title_wins() {
        let d = doc(json!({"projects": [
            {"title": "Bot", "description": "small"},
            {"title": "Chat Bot", "description": "Answers"}
        ]}));
        assert_eq!(
            answer(&d, Section::Projects, "Tell me about the Chat Bot project"),
            "Title: Chat Bot\nDescription: Answers\nTechnologies: N/A"
        );
        assert_eq!(
            answer(&d, Section::Projects, "What does Bot do?"),
            "Title: Bot\nDescription: small\nTechnologies: N/A"
        );
    }

    #[test]
    fn test_equal_length_mentions_keep_list_order() {
        let d = doc(json!({"projects": [
            {"title": "Atlas", "description": "first"},
            {"title": "Orion", "description": "second"}
        ]}));
        assert_eq!(
            answer(&d, Section::Projects, "orion or atlas project?"),
            "Title: Atlas\nDescription: first\nTechnologies: N/A"
        );
    }

    #[test]
    fn test_projects_listed_when_no_title_matches() {
        let d = doc(json!({"projects": [
            {"title": "Chat Bot", "description": "Answers"},
            {"title": "Inventory App", "technologies": ["Rust"]}
        ]}));
        assert_eq!(
            answer(&d, Section::Projects, "What projects have you built?"),
            "Title: Chat Bot\nDescription: Answers\nTechnologies: N/A\n\n\
             Title: Inventory App\nDescription: N/A\nTechnologies: Rust"
        );
    }

    #[test]
    fn test_untitled_project_never_matches_by_mention() {
        let d = doc(json!({"projects": [
            {"description": "Secret"},
            {"title": "Game", "description": "Fun"}
        ]}));
        assert_eq!(
            answer(&d, Section::Projects, "game project"),
            "Title: Game\nDescription: Fun\nTechnologies: N/A"
        );
    }

    #[test]
    fn test_projects_empty() {
        let d = doc(json!({}));
        assert_eq!(answer(&d, Section::Projects, "projects"), "N/A");
    }

    #[test]
    fn test_education_lines() {
        let d = doc(json!({"education": [
            {"degree": "MSc CS", "institution": "ETH", "start": "2019", "end": "2021"},
            {"degree": "BSc", "institution": "TU"}
        ]}));
        assert_eq!(
            answer(&d, Section::Education, "education"),
            "MSc CS, ETH (2019 - 2021)\nBSc, TU (N/A - N/A)"
        );
    }

    #[test]
    fn test_publications_titles_only() {
        let d = doc(json!({"research_publications": [
            {"title": "Fast Graphs", "doi": "10.1/a"},
            {"title": "Slow Trees"}
        ]}));
        assert_eq!(
            answer(&d, Section::ResearchPublications, "papers"),
            "Fast Graphs\nSlow Trees"
        );
    }

    #[test]
    fn test_skills_categorized_and_flat() {
        let categorized = doc(json!({"key_skills": {
            "Languages": ["Rust", "Python"],
            "Cloud": ["AWS"]
        }}));
        assert_eq!(
            answer(&categorized, Section::Skills, "skills"),
            "Languages: Rust, Python\nCloud: AWS"
        );

        let flat = doc(json!({"key_skills": ["Rust", "SQL"]}));
        assert_eq!(answer(&flat, Section::Skills, "skills"), "Rust\nSQL");
    }

    #[test]
    fn test_skills_empty_shapes() {
        assert_eq!(answer(&doc(json!({})), Section::Skills, "skills"), "N/A");
        assert_eq!(
            answer(&doc(json!({"key_skills": {}})), Section::Skills, "skills"),
            "N/A"
        );
        assert_eq!(
            answer(&doc(json!({"key_skills": []})), Section::Skills, "skills"),
            "N/A"
        );
    }

    #[test]
    fn test_achievements_and_references() {
        let d = doc(json!({
            "achievements": ["Hackathon winner", "Dean's list"],
            "references": [
                {"name": "Bob", "role": "CTO", "email": "bob@x.com", "phone": "555"},
                {"name": "Eve"}
            ]
        }));
        assert_eq!(
            answer(&d, Section::Achievements, "awards"),
            "Hackathon winner\nDean's list"
        );
        assert_eq!(
            answer(&d, Section::References, "references"),
            "Bob (CTO) - Email: bob@x.com, Phone: 555\nEve (N/A) - Email: N/A, Phone: N/A"
        );
    }

    #[test]
    fn test_every_section_is_na_when_empty() {
        let d = doc(json!({}));
        for section in Section::ALL {
            assert_eq!(answer(&d, section, "anything"), "N/A", "section {section}");
        }
    }

    #[test]
    fn test_answer_is_idempotent() {
        let d = experience_doc();
        let first = answer(&d, Section::Experience, "work experience");
        let second = answer(&d, Section::Experience, "work experience");
        assert_eq!(first, second);
    }
}
