//! The résumé data record.
//!
//! Read-only collaborator of the section views and the TUI sidebar. The
//! conversational engine never reads this structured data — its canned
//! text only refers to the sections descriptively.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::VitaeError;

/// A skill with a 1-5 proficiency level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 1 (novice) to 5 (expert)
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub period: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// The whole résumé record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeData {
    pub name: String,
    pub title: String,
    pub about: String,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub contacts: Vec<Contact>,
}

/// Résumé sections, mirroring the site's sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Experience,
    Education,
    Contacts,
}

impl Section {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "about" | "обо мне" => Some(Self::About),
            "skills" | "навыки" => Some(Self::Skills),
            "experience" | "опыт" => Some(Self::Experience),
            "education" | "образование" => Some(Self::Education),
            "contacts" | "контакты" => Some(Self::Contacts),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::About => "Обо мне",
            Self::Skills => "Навыки",
            Self::Experience => "Опыт работы",
            Self::Education => "Образование",
            Self::Contacts => "Контакты",
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Self::About,
            Self::Skills,
            Self::Experience,
            Self::Education,
            Self::Contacts,
        ]
    }
}

impl ResumeData {
    /// Load a profile from a JSON file
    pub fn load(path: &Path) -> Result<Self, VitaeError> {
        let contents = std::fs::read_to_string(path)?;
        let data: ResumeData = serde_json::from_str(&contents)?;
        data.validate()?;
        Ok(data)
    }

    fn validate(&self) -> Result<(), VitaeError> {
        if self.name.trim().is_empty() {
            return Err(VitaeError::Profile("name must not be empty".into()));
        }
        if let Some(skill) = self.skills.iter().find(|s| s.level < 1 || s.level > 5) {
            return Err(VitaeError::Profile(format!(
                "skill '{}' has level {} outside 1-5",
                skill.name, skill.level
            )));
        }
        Ok(())
    }

    /// Built-in default profile, used when no profile file is configured
    pub fn builtin() -> Self {
        Self {
            name: "Алексей Смирнов".to_string(),
            title: "Frontend-разработчик".to_string(),
            about: "Привет! Я разработчик с опытом создания современных веб-приложений. \
                    Увлекаюсь качественными пользовательскими интерфейсами и решением \
                    сложных технических задач. Всегда стремлюсь изучать новое."
                .to_string(),
            skills: vec![
                Skill { name: "JavaScript/TypeScript".into(), level: 5 },
                Skill { name: "React".into(), level: 5 },
                Skill { name: "Node.js".into(), level: 4 },
                Skill { name: "CSS/SCSS".into(), level: 5 },
                Skill { name: "Git".into(), level: 4 },
                Skill { name: "Docker".into(), level: 3 },
                Skill { name: "Linux".into(), level: 4 },
            ],
            experience: vec![
                Experience {
                    company: "Яндекс".into(),
                    position: "Frontend Developer".into(),
                    period: "2022 - настоящее время".into(),
                    description: vec![
                        "Разработка и поддержка веб-приложений на React".into(),
                        "Оптимизация производительности и улучшение UX".into(),
                        "Работа в команде по Agile".into(),
                    ],
                },
                Experience {
                    company: "Ozon".into(),
                    position: "Junior Developer".into(),
                    period: "2020 - 2022".into(),
                    description: vec![
                        "Разработка компонентов пользовательского интерфейса".into(),
                        "Исправление багов и рефакторинг".into(),
                        "Участие в код-ревью и планировании спринтов".into(),
                    ],
                },
            ],
            education: vec![Education {
                institution: "МГТУ им. Баумана".into(),
                degree: "Бакалавр, Компьютерные науки".into(),
                period: "2016 - 2020".into(),
                description: Some(
                    "Специализация: веб-разработка и программная инженерия".into(),
                ),
            }],
            contacts: vec![
                Contact {
                    kind: "Email".into(),
                    value: "alexey@example.com".into(),
                    link: Some("mailto:alexey@example.com".into()),
                },
                Contact {
                    kind: "GitHub".into(),
                    value: "github.com/asmirnov".into(),
                    link: Some("https://github.com/asmirnov".into()),
                },
                Contact {
                    kind: "Telegram".into(),
                    value: "@asmirnov".into(),
                    link: Some("https://t.me/asmirnov".into()),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_profile_is_valid() {
        let data = ResumeData::builtin();
        assert!(data.validate().is_ok());
        assert!(!data.skills.is_empty());
        assert!(data.skills.iter().all(|s| (1..=5).contains(&s.level)));
    }

    #[test]
    fn roundtrips_through_json() {
        let data = ResumeData::builtin();
        let json = serde_json::to_string(&data).unwrap();
        let back: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, data.name);
        assert_eq!(back.skills.len(), data.skills.len());
    }

    #[test]
    fn load_rejects_out_of_range_level() {
        let mut data = ResumeData::builtin();
        data.skills[0].level = 9;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&data).unwrap()).unwrap();
        let err = ResumeData::load(file.path()).unwrap_err();
        assert!(matches!(err, VitaeError::Profile(_)));
    }

    #[test]
    fn section_labels() {
        assert_eq!(Section::from_str("skills"), Some(Section::Skills));
        assert_eq!(Section::from_str("Навыки"), Some(Section::Skills));
        assert_eq!(Section::from_str("nope"), None);
        assert_eq!(Section::Skills.title(), "Навыки");
    }
}
