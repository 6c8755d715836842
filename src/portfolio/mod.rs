//! Static portfolio content
//!
//! Everything here is compiled into the binary and read-only. The same
//! tables feed the HTTP API and the chat system instruction.

pub mod data;
pub mod prompt;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

pub use data::{CERTIFICATIONS, EDUCATION, EXPERIENCE, PROFILE, PROJECTS, SKILLS};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProfileLinks {
    pub linkedin: &'static str,
    pub github: &'static str,
    pub portfolio: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub links: ProfileLinks,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Experience {
    pub id: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<&'static str>,
    /// Live demo link; an empty string is kept as-is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CertificationCategory {
    Certification,
    Internship,
    Event,
}

/// One certificate, internship attestation, or event participation
///
/// Serialised with the key order of the source records: internship and event
/// entries list `category` right after `date`, certifications list it after
/// their credential fields.
#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub credential_id: Option<&'static str>,
    /// External verification link
    pub url: Option<&'static str>,
    pub category: CertificationCategory,
    /// Path of the certificate document shown in the viewer
    pub image: Option<&'static str>,
    pub logo: Option<&'static str>,
}

impl Certification {
    fn category_leads(&self) -> bool {
        self.category != CertificationCategory::Certification
    }
}

impl Serialize for Certification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Certification", 9)?;
        state.serialize_field("id", self.id)?;
        state.serialize_field("title", self.title)?;
        state.serialize_field("issuer", self.issuer)?;
        state.serialize_field("date", self.date)?;
        if self.category_leads() {
            state.serialize_field("category", &self.category)?;
        }
        serialize_present(&mut state, "credentialId", self.credential_id)?;
        serialize_present(&mut state, "url", self.url)?;
        if !self.category_leads() {
            state.serialize_field("category", &self.category)?;
        }
        serialize_present(&mut state, "image", self.image)?;
        serialize_present(&mut state, "logo", self.logo)?;
        state.end()
    }
}

fn serialize_present<S: SerializeStruct>(
    state: &mut S,
    key: &'static str,
    value: Option<&'static str>,
) -> Result<(), S::Error> {
    match value {
        Some(value) => state.serialize_field(key, value),
        None => state.skip_field(key),
    }
}

/// All portfolio tables in one serialisable view
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Portfolio {
    pub profile: &'static Profile,
    pub education: &'static [Education],
    pub experience: &'static [Experience],
    pub projects: &'static [Project],
    pub skills: &'static [SkillCategory],
    pub certifications: &'static [Certification],
}

impl Portfolio {
    pub fn snapshot() -> Self {
        Self {
            profile: &PROFILE,
            education: EDUCATION,
            experience: EXPERIENCE,
            projects: PROJECTS,
            skills: SKILLS,
            certifications: CERTIFICATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let mut ids = HashSet::new();
        let all = EDUCATION
            .iter()
            .map(|e| e.id)
            .chain(EXPERIENCE.iter().map(|e| e.id))
            .chain(PROJECTS.iter().map(|p| p.id))
            .chain(CERTIFICATIONS.iter().map(|c| c.id));
        for id in all {
            assert!(ids.insert(id), "duplicate id {}", id);
        }
    }

    #[test]
    fn test_certification_categories() {
        let ids = |category: CertificationCategory| {
            CERTIFICATIONS
                .iter()
                .filter(|c| c.category == category)
                .map(|c| c.id)
                .collect::<Vec<_>>()
        };
        let internships = ids(CertificationCategory::Internship);
        assert_eq!(internships.len(), 6);
        assert_eq!(internships[0], "i1");
        assert_eq!(ids(CertificationCategory::Event), vec!["ev1", "ev2"]);
        assert_eq!(ids(CertificationCategory::Certification).len(), 17);
    }

    #[test]
    fn test_project_serialization() {
        let json = serde_json::to_value(PROJECTS[4]).unwrap();
        assert_eq!(json["type"], "Web");
        assert_eq!(json["demoUrl"], "");
        assert!(json["githubUrl"].as_str().unwrap().contains("web-quiz-game"));

        let json = serde_json::to_value(PROJECTS[0]).unwrap();
        assert!(json.get("demoUrl").is_none());
    }

    #[test]
    fn test_certification_serialization() {
        let json = serde_json::to_value(CERTIFICATIONS[1]).unwrap();
        assert_eq!(json["credentialId"], "1585991/F/A/M/000");
        assert_eq!(json["category"], "Internship");
        assert!(json.get("url").is_none());
    }

    fn key_order(certification: &Certification) -> Vec<String> {
        let json = serde_json::to_string(certification).unwrap();
        ["\"category\"", "\"credentialId\"", "\"url\"", "\"image\""]
            .iter()
            .filter_map(|key| json.find(key).map(|at| (at, key.trim_matches('"').to_string())))
            .collect::<std::collections::BTreeMap<_, _>>()
            .into_values()
            .collect()
    }

    #[test]
    fn test_internship_lists_category_before_credential() {
        let i2 = CERTIFICATIONS.iter().find(|c| c.id == "i2").unwrap();
        assert_eq!(key_order(i2), vec!["category", "credentialId", "image"]);
    }

    #[test]
    fn test_certification_lists_category_after_credential() {
        let c5 = CERTIFICATIONS.iter().find(|c| c.id == "c5").unwrap();
        assert_eq!(key_order(c5), vec!["credentialId", "category", "image"]);

        let c11 = CERTIFICATIONS.iter().find(|c| c.id == "c11").unwrap();
        assert_eq!(
            key_order(c11),
            vec!["credentialId", "url", "category", "image"]
        );
    }

    #[test]
    fn test_certification_json_starts_with_identity() {
        let json = serde_json::to_string(&CERTIFICATIONS[0]).unwrap();
        assert!(json.starts_with(
            r#"{"id":"i1","title":"Summer Internship - Technology Service","issuer":"KW-Manufacturing","date":"July 08, 2025 - Sept 08, 2025","category":"Internship","image":"#
        ));
    }

    #[test]
    fn test_snapshot_contains_all_tables() {
        let json = serde_json::to_value(Portfolio::snapshot()).unwrap();
        assert_eq!(json["profile"]["name"], "Youssef CHEBL");
        assert_eq!(json["education"].as_array().unwrap().len(), 3);
        assert_eq!(json["experience"].as_array().unwrap().len(), 4);
        assert_eq!(json["projects"].as_array().unwrap().len(), 5);
        assert_eq!(json["skills"].as_array().unwrap().len(), 6);
        assert_eq!(json["certifications"].as_array().unwrap().len(), 25);
    }
}
