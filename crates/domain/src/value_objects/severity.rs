//! Injury severity codes and the per-location effective-impact table
//!
//! Severity codes pair a wound class letter with an injury-level digit:
//! "M1" (minor, one level) through "K5" (kill wound, five levels). "NA"
//! marks an impact too weak to injure.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Wound class letter of a severity code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityClass {
    Minor,
    Serious,
    Grievous,
    Kill,
}

impl SeverityClass {
    pub fn letter(self) -> char {
        match self {
            SeverityClass::Minor => 'M',
            SeverityClass::Serious => 'S',
            SeverityClass::Grievous => 'G',
            SeverityClass::Kill => 'K',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'M' => Some(SeverityClass::Minor),
            'S' => Some(SeverityClass::Serious),
            'G' => Some(SeverityClass::Grievous),
            'K' => Some(SeverityClass::Kill),
            _ => None,
        }
    }
}

/// A severity code from a location's effective-impact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// No injury
    NA,
    Rated {
        class: SeverityClass,
        level: u8,
    },
}

impl Severity {
    pub fn rated(class: SeverityClass, level: u8) -> Self {
        Severity::Rated {
            class,
            level: level.min(5),
        }
    }

    /// Numeric injury level, 0 for NA, otherwise 1-5.
    pub fn injury_level(self) -> u8 {
        match self {
            Severity::NA => 0,
            Severity::Rated { level, .. } => level.min(5),
        }
    }

    /// 'K'-coded severities mark a potential kill shot.
    pub fn is_kill(self) -> bool {
        matches!(
            self,
            Severity::Rated {
                class: SeverityClass::Kill,
                ..
            }
        )
    }

    /// Grievous or kill wounds can sever a limb at levels 4-5.
    pub fn can_amputate(self) -> bool {
        match self {
            Severity::Rated { class, level } => {
                matches!(class, SeverityClass::Grievous | SeverityClass::Kill)
                    && (4..=5).contains(&level)
            }
            Severity::NA => false,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::NA => write!(f, "NA"),
            Severity::Rated { class, level } => write!(f, "{}{}", class.letter(), level),
        }
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("NA") {
            return Ok(Severity::NA);
        }
        let mut chars = s.chars();
        let class = chars
            .next()
            .and_then(SeverityClass::from_letter)
            .ok_or_else(|| DomainError::parse(format!("Invalid severity code: {}", s)))?;
        let level: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid severity level: {}", s)))?;
        if !(1..=5).contains(&level) {
            return Err(DomainError::parse(format!(
                "Severity level out of range: {}",
                s
            )));
        }
        Ok(Severity::Rated { class, level })
    }
}

// Serialized as the code string ("M1", "K5", "NA") - the host-facing
// representation matches the rulebook notation.
impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// A hit location's effective-impact-to-severity table.
///
/// Thresholds are fixed at effective impact >= 1, 5, 9, 13, 17; below 1
/// the result is always NA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityTable {
    pub ei1: Severity,
    pub ei5: Severity,
    pub ei9: Severity,
    pub ei13: Severity,
    pub ei17: Severity,
}

impl SeverityTable {
    pub fn new(ei1: Severity, ei5: Severity, ei9: Severity, ei13: Severity, ei17: Severity) -> Self {
        Self {
            ei1,
            ei5,
            ei9,
            ei13,
            ei17,
        }
    }

    /// Look up the severity bucket for an effective impact value.
    pub fn for_impact(&self, effective_impact: i32) -> Severity {
        match effective_impact {
            i if i >= 17 => self.ei17,
            i if i >= 13 => self.ei13,
            i if i >= 9 => self.ei9,
            i if i >= 5 => self.ei5,
            i if i >= 1 => self.ei1,
            _ => Severity::NA,
        }
    }
}

impl Default for SeverityTable {
    fn default() -> Self {
        Self {
            ei1: Severity::rated(SeverityClass::Minor, 1),
            ei5: Severity::rated(SeverityClass::Serious, 2),
            ei9: Severity::rated(SeverityClass::Serious, 3),
            ei13: Severity::rated(SeverityClass::Grievous, 4),
            ei17: Severity::rated(SeverityClass::Grievous, 5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_round_trip() {
        for code in ["NA", "M1", "S2", "S3", "G4", "G5", "K4", "K5"] {
            let severity: Severity = code.parse().unwrap();
            assert_eq!(severity.to_string(), code);
        }
    }

    #[test]
    fn reject_bad_codes() {
        assert!("X3".parse::<Severity>().is_err());
        assert!("M0".parse::<Severity>().is_err());
        assert!("M6".parse::<Severity>().is_err());
        assert!("M".parse::<Severity>().is_err());
    }

    #[test]
    fn injury_levels() {
        assert_eq!(Severity::NA.injury_level(), 0);
        assert_eq!("M1".parse::<Severity>().unwrap().injury_level(), 1);
        assert_eq!("K5".parse::<Severity>().unwrap().injury_level(), 5);
    }

    #[test]
    fn kill_and_amputate_flags() {
        let k4: Severity = "K4".parse().unwrap();
        let g5: Severity = "G5".parse().unwrap();
        let s3: Severity = "S3".parse().unwrap();
        assert!(k4.is_kill());
        assert!(!g5.is_kill());
        assert!(k4.can_amputate());
        assert!(g5.can_amputate());
        assert!(!s3.can_amputate());
    }

    #[test]
    fn table_buckets_at_thresholds() {
        let table = SeverityTable::default();
        assert_eq!(table.for_impact(0), Severity::NA);
        assert_eq!(table.for_impact(1), table.ei1);
        assert_eq!(table.for_impact(4), table.ei1);
        assert_eq!(table.for_impact(5), table.ei5);
        assert_eq!(table.for_impact(7), table.ei5);
        assert_eq!(table.for_impact(9), table.ei9);
        assert_eq!(table.for_impact(13), table.ei13);
        assert_eq!(table.for_impact(16), table.ei13);
        assert_eq!(table.for_impact(17), table.ei17);
        assert_eq!(table.for_impact(40), table.ei17);
    }

    #[test]
    fn severity_serializes_as_code_string() {
        let json = serde_json::to_string(&Severity::rated(SeverityClass::Kill, 5)).unwrap();
        assert_eq!(json, "\"K5\"");
        let back: Severity = serde_json::from_str("\"S2\"").unwrap();
        assert_eq!(back.injury_level(), 2);
    }
}
