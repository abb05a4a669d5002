use serde::{Deserialize, Serialize};

/// All timestamps are UTC. Display conversion (JST for the event staff
/// UI) is a frontend concern.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The four recognized license grades.
///
/// Serializes to the Japanese grade labels used on the wire and in the
/// database (`"1級"` through `"4級"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseGrade {
    #[serde(rename = "1級")]
    First,
    #[serde(rename = "2級")]
    Second,
    #[serde(rename = "3級")]
    Third,
    #[serde(rename = "4級")]
    Fourth,
}

impl LicenseGrade {
    /// The wire/database label for this grade.
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseGrade::First => "1級",
            LicenseGrade::Second => "2級",
            LicenseGrade::Third => "3級",
            LicenseGrade::Fourth => "4級",
        }
    }

    /// Parse a submitted grade label. Returns `None` for anything
    /// outside the four recognized values (including empty strings).
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "1級" => Some(LicenseGrade::First),
            "2級" => Some(LicenseGrade::Second),
            "3級" => Some(LicenseGrade::Third),
            "4級" => Some(LicenseGrade::Fourth),
            _ => None,
        }
    }
}

impl std::fmt::Display for LicenseGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
