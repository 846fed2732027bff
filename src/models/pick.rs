//! Resolved video pick data structure.

use serde::{Deserialize, Serialize};

/// A resolved pick: one song title and one playable watch URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoPick {
    /// Song title as extracted from the catalog
    pub title: String,

    /// Full watch URL of the selected video
    pub video: String,
}

impl VideoPick {
    /// Serialize the pick as a single-line JSON string.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let pick = VideoPick {
            title: "Lateralus".to_string(),
            video: "https://www.youtube.com/watch?v=xyz98765432".to_string(),
        };
        let json = pick.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"title":"Lateralus","video":"https://www.youtube.com/watch?v=xyz98765432"}"#
        );
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{"title":"Schism","video":"https://www.youtube.com/watch?v=abc12345678"}"#;
        let pick: VideoPick = serde_json::from_str(json).unwrap();
        assert_eq!(pick.title, "Schism");
        assert!(pick.video.ends_with("abc12345678"));
    }
}
