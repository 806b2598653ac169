//! Core data models for Project EnCode.
//! Levels are static, profiles are persisted, game sessions live only long
//! enough to be merged into a profile.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::util::format_clock;

/// Sentinel level id carried by sessions produced in retention mode.
pub const RETENTION_LEVEL_ID: &str = "RETENTION";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    #[serde(rename = "JAVASCRIPT")]
    JavaScript,
    #[serde(rename = "C++")]
    Cpp,
    #[serde(rename = "JAVA")]
    Java,
}

impl Language {
    /// Wire name used when talking to the grading service.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::JavaScript => "JAVASCRIPT",
            Language::Cpp => "C++",
            Language::Java => "JAVA",
        }
    }

    /// HTML and CSS buffers can be rendered as-is in the preview frame.
    pub fn is_markup(self) -> bool {
        matches!(self, Language::Html | Language::Css)
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::JavaScript => "js",
            Language::Cpp => "cpp",
            Language::Java => "java",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(s)
    }
}

/// Immutable challenge descriptor. The whole catalog lives in static memory.
#[derive(Debug, PartialEq, Eq)]
pub struct Level {
    pub id: &'static str,
    pub chapter: u32,
    pub sub_chapter: u32,
    pub title: &'static str,
    pub language: Language,
    pub description: &'static str,
    pub simple_description: &'static str,
    pub objective: &'static str,
    pub simple_objective: &'static str,
    pub target_output: &'static str,
    pub difficulty: Difficulty,
}

impl Level {
    pub fn ordinal(&self) -> u32 {
        level_ordinal(self.id)
    }

    pub fn description_for(&self, plain: bool) -> &'static str {
        if plain { self.simple_description } else { self.description }
    }

    pub fn objective_for(&self, plain: bool) -> &'static str {
        if plain { self.simple_objective } else { self.objective }
    }
}

/// Numeric ordinal of a level id: `chapter * 100 + sub`. Accepts `-` or `.`
/// as the separator; anything unparseable counts as 0.
pub fn level_ordinal(id: &str) -> u32 {
    let mut parts = id.splitn(2, ['-', '.']);
    let chapter = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
    let sub = match parts.next() {
        Some(p) => p.trim().parse::<u32>().ok(),
        None => Some(0),
    };
    match (chapter, sub) {
        (Some(c), Some(s)) => c.saturating_mul(100).saturating_add(s),
        _ => 0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Standard-mode bucketing of a 0-100 similarity score.
    pub fn from_score(score: u8) -> Self {
        match score {
            95.. => Grade::S,
            85..=94 => Grade::A,
            70..=84 => Grade::B,
            50..=69 => Grade::C,
            _ => Grade::D,
        }
    }

    /// Retention-mode bucketing of the number of nodes cleared in one run.
    pub fn from_nodes(nodes_cleared: u32) -> Self {
        if nodes_cleared > 5 {
            Grade::S
        } else if nodes_cleared > 3 {
            Grade::A
        } else {
            Grade::B
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

/// Outcome of one finished attempt. Produced once, merged into the active
/// profile, then kept only for the result screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub level_id: String,
    pub code: String,
    /// Grading score (0-100). Always 0 for retention runs.
    pub accuracy: u8,
    pub elapsed_secs: u64,
    pub time_elapsed: String,
    pub attempts: u32,
    pub grade: Grade,
    /// Nodes cleared; present only for retention runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_score: Option<u32>,
}

impl GameSession {
    pub fn standard(level: &Level, code: String, accuracy: u8, elapsed_secs: u64, attempts: u32) -> Self {
        Self {
            level_id: level.id.to_string(),
            code,
            accuracy,
            elapsed_secs,
            time_elapsed: format_clock(elapsed_secs),
            attempts,
            grade: Grade::from_score(accuracy),
            retention_score: None,
        }
    }

    pub fn retention(nodes_cleared: u32, elapsed_secs: u64) -> Self {
        Self {
            level_id: RETENTION_LEVEL_ID.to_string(),
            code: "RETENTION_MODE_COMPLETED".to_string(),
            accuracy: 0,
            elapsed_secs,
            time_elapsed: format_clock(elapsed_secs),
            attempts: nodes_cleared,
            grade: Grade::from_nodes(nodes_cleared),
            retention_score: Some(nodes_cleared),
        }
    }

    pub fn is_retention(&self) -> bool {
        self.retention_score.is_some()
    }
}

/// Persisted player record. Field names match the stored JSON layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub levels_completed: u32,
    #[serde(default)]
    pub accuracy_rate: u8,
    #[serde(default)]
    pub errors_made: u32,
    /// Best elapsed seconds over passing standard sessions. Stored as an
    /// `M:SS` string, `"--:--"` when unset.
    #[serde(default, with = "clear_time")]
    pub fastest_clear: Option<u64>,
    #[serde(default)]
    pub retention_best: u32,
    #[serde(default)]
    pub has_seen_tutorial_prompt: bool,
    /// Creation time in milliseconds since the epoch.
    #[serde(default)]
    pub created: u64,
}

impl Profile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, created: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            levels_completed: 0,
            accuracy_rate: 0,
            errors_made: 0,
            fastest_clear: None,
            retention_best: 0,
            has_seen_tutorial_prompt: false,
            created,
        }
    }

    /// True when the best level cleared sits at or beyond `level` in catalog
    /// order. A profile that has cleared nothing has reached no level.
    pub fn has_reached(&self, level: &Level) -> bool {
        self.levels_completed > 0 && level.ordinal() <= self.levels_completed
    }

    pub fn fastest_clear_label(&self) -> String {
        match self.fastest_clear {
            Some(secs) => format_clock(secs),
            None => "--:--".to_string(),
        }
    }
}

/// Reads `M:SS`, `H:MM:SS`, plain seconds, `null` or the `"--:--"`
/// placeholder; anything unreadable counts as no clear yet.
pub fn parse_clear_time(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() || text.contains('-') {
        return None;
    }
    text.split(':')
        .try_fold(0u64, |acc, part| part.trim().parse::<u64>().ok().map(|n| acc * 60 + n))
}

mod clear_time {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::util::format_clock;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Secs(u64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(secs) => serializer.serialize_str(&format_clock(*secs)),
            None => serializer.serialize_str("--:--"),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        Ok(match Option::<Stored>::deserialize(deserializer)? {
            Some(Stored::Secs(secs)) => Some(secs),
            Some(Stored::Text(text)) => super::parse_clear_time(&text),
            None => None,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Theme {
    #[default]
    Terminal,
    Frutiger,
    Ide,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Terminal, Theme::Frutiger, Theme::Ide];

    /// Best `levelsCompleted` across all profiles needed to select the theme.
    pub fn unlock_threshold(self) -> u32 {
        match self {
            Theme::Terminal => 0,
            Theme::Frutiger => 2,
            Theme::Ide => 4,
        }
    }

    pub fn is_unlocked(self, max_levels_cleared: u32) -> bool {
        max_levels_cleared >= self.unlock_threshold()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Terminal => "TERMINAL",
            Theme::Frutiger => "FRUTIGER",
            Theme::Ide => "IDE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Theme::ALL.into_iter().find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Terminal => "Retro Terminal",
            Theme::Frutiger => "Frutiger Aero",
            Theme::Ide => "Monokai IDE",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Theme::Terminal => "Classic hacker aesthetic. High contrast, green phosphor.",
            Theme::Frutiger => "Glossy gradients and sky-blue dreams. Unlocked after 2 levels.",
            Theme::Ide => "Professional environment. Optimized for long hours. Unlocked after 4 levels.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_grade_thresholds() {
        let cases = [
            (100, Grade::S),
            (95, Grade::S),
            (94, Grade::A),
            (85, Grade::A),
            (84, Grade::B),
            (70, Grade::B),
            (69, Grade::C),
            (50, Grade::C),
            (49, Grade::D),
            (0, Grade::D),
        ];
        for (score, grade) in cases {
            assert_eq!(Grade::from_score(score), grade, "score {score}");
        }
    }

    #[test]
    fn retention_grade_thresholds() {
        assert_eq!(Grade::from_nodes(0), Grade::B);
        assert_eq!(Grade::from_nodes(3), Grade::B);
        assert_eq!(Grade::from_nodes(4), Grade::A);
        assert_eq!(Grade::from_nodes(5), Grade::A);
        assert_eq!(Grade::from_nodes(6), Grade::S);
    }

    #[test]
    fn ordinal_parsing() {
        assert_eq!(level_ordinal("0-1"), 1);
        assert_eq!(level_ordinal("0.1"), 1);
        assert_eq!(level_ordinal("2-3"), 203);
        assert_eq!(level_ordinal("4"), 400);
        assert_eq!(level_ordinal("RETENTION"), 0);
        assert_eq!(level_ordinal("1-x"), 0);
    }

    #[test]
    fn profile_reads_legacy_json_without_optional_fields() {
        let raw = r#"{"id":"42","name":"USR_1","levelsCompleted":3,"accuracyRate":80,"retentionBest":2,"created":1}"#;
        let p: Profile = serde_json::from_str(raw).unwrap();
        assert_eq!(p.levels_completed, 3);
        assert_eq!(p.fastest_clear, None);
        assert!(!p.has_seen_tutorial_prompt);
        assert_eq!(p.fastest_clear_label(), "--:--");
    }

    #[test]
    fn profile_reads_string_clear_times() {
        let raw = r#"{"id":"1700000000000","name":"USR_1","levelsCompleted":2,"errorsMade":0,"accuracyRate":88,"fastestClear":"--:--","retentionBest":3,"created":1700000000000}"#;
        let p: Profile = serde_json::from_str(raw).unwrap();
        assert_eq!(p.fastest_clear, None);
        assert_eq!(p.accuracy_rate, 88);
        assert_eq!(p.retention_best, 3);

        let timed: Profile = serde_json::from_str(r#"{"id":"a","name":"USR_2","fastestClear":"1:05"}"#).unwrap();
        assert_eq!(timed.fastest_clear, Some(65));
        let numeric: Profile = serde_json::from_str(r#"{"id":"b","name":"USR_3","fastestClear":42}"#).unwrap();
        assert_eq!(numeric.fastest_clear, Some(42));
        let null: Profile = serde_json::from_str(r#"{"id":"c","name":"USR_4","fastestClear":null}"#).unwrap();
        assert_eq!(null.fastest_clear, None);
    }

    #[test]
    fn clear_time_is_written_as_clock_text() {
        let mut p = Profile::new("1", "USR_1", 0);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["fastestClear"], "--:--");
        p.fastest_clear = Some(75);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["fastestClear"], "1:15");
        assert_eq!(serde_json::from_value::<Profile>(json).unwrap(), p);
    }

    #[test]
    fn fresh_profile_has_reached_nothing() {
        let opening = crate::catalog::find_level("0-0").unwrap();
        let discovery = crate::catalog::find_level("0-1").unwrap();
        let later = crate::catalog::find_level("1-1").unwrap();
        let mut p = Profile::new("1", "USR_1", 0);
        assert!(!p.has_reached(opening));
        assert!(!p.has_reached(discovery));
        p.levels_completed = 1;
        assert!(p.has_reached(opening));
        assert!(p.has_reached(discovery));
        assert!(!p.has_reached(later));
    }

    #[test]
    fn clear_time_parsing() {
        assert_eq!(parse_clear_time("0:09"), Some(9));
        assert_eq!(parse_clear_time("12:00"), Some(720));
        assert_eq!(parse_clear_time("1:00:01"), Some(3601));
        assert_eq!(parse_clear_time("--:--"), None);
        assert_eq!(parse_clear_time("soon"), None);
    }

    #[test]
    fn language_serializes_with_wire_names() {
        assert_eq!(serde_json::to_string(&Language::Cpp).unwrap(), "\"C++\"");
        assert_eq!(Theme::parse("frutiger"), Some(Theme::Frutiger));
        assert!(!Theme::Ide.is_unlocked(3));
        assert!(Theme::Ide.is_unlocked(4));
    }
}
