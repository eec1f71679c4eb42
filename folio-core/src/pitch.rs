//! Side-project pitch pages.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Pitches compiled into the binary.
const BUNDLED_PITCHES: &str = include_str!("../content/pitches.toml");

fn default_cta_label() -> String {
    "Get in touch".to_string()
}

fn default_accent() -> String {
    "#3b82f6".to_string()
}

/// One pitch deck page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pitch {
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub problem: String,
    pub solution: String,
    pub audience: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_cta_label")]
    pub cta_label: String,
    #[serde(default)]
    pub cta_url: Option<String>,
    #[serde(default = "default_accent")]
    pub accent: String,
}

impl Pitch {
    pub fn path(&self) -> String {
        format!("/pitches/{}", self.slug)
    }
}

#[derive(Deserialize)]
struct PitchFile {
    #[serde(default, rename = "pitch")]
    pitches: Vec<Pitch>,
}

/// All pitches in file order.
#[derive(Debug, Clone, Default)]
pub struct Pitches {
    pitches: Vec<Pitch>,
}

impl Pitches {
    pub fn bundled() -> FolioResult<Self> {
        Self::parse(BUNDLED_PITCHES)
    }

    pub fn parse(content: &str) -> FolioResult<Self> {
        let file: PitchFile = toml::from_str(content).map_err(|e| FolioError::Content {
            path: "pitches.toml".into(),
            message: e.to_string(),
        })?;

        let mut seen = HashSet::new();
        for pitch in &file.pitches {
            if !seen.insert(pitch.slug.as_str()) {
                return Err(FolioError::DuplicateSlug {
                    kind: "pitch",
                    slug: pitch.slug.clone(),
                });
            }
        }

        Ok(Pitches {
            pitches: file.pitches,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pitch> {
        self.pitches.iter()
    }

    pub fn get(&self, slug: &str) -> Option<&Pitch> {
        self.pitches.iter().find(|p| p.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_defaults() {
        let toml = r#"
[[pitch]]
slug = "a"
name = "A"
tagline = "t"
problem = "p"
solution = "s"
audience = "people"
"#;
        let pitches = Pitches::parse(toml).unwrap();
        let a = pitches.get("a").unwrap();
        assert_eq!(a.cta_label, "Get in touch");
        assert_eq!(a.cta_url, None);
        assert!(a.features.is_empty());
        assert_eq!(a.path(), "/pitches/a");
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let toml = r#"
[[pitch]]
slug = "a"
name = "A"
tagline = "t"
problem = "p"
solution = "s"
audience = "x"

[[pitch]]
slug = "a"
name = "A2"
tagline = "t"
problem = "p"
solution = "s"
audience = "x"
"#;
        assert!(matches!(
            Pitches::parse(toml),
            Err(FolioError::DuplicateSlug { kind: "pitch", .. })
        ));
    }

    #[test]
    fn bundled_pitches_keep_file_order() {
        let pitches = Pitches::bundled().unwrap();
        let slugs: Vec<_> = pitches.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["tidewater", "quarterdeck", "fieldnotes"]);
        assert!(pitches.get("nope").is_none());
    }
}
