use serde::{Deserialize, Serialize};

use super::fields::range_warning;

pub const DEFAULT_BAND_SCORE: &str = "8.0";
pub const MIN_BAND_SCORE: f64 = 0.0;
pub const MAX_BAND_SCORE: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Listening,
    Reading,
    Writing,
    Speaking,
}

impl Band {
    pub const ALL: [Band; 4] = [Band::Listening, Band::Reading, Band::Writing, Band::Speaking];

    pub fn key(&self) -> &'static str {
        match self {
            Band::Listening => "listening",
            Band::Reading => "reading",
            Band::Writing => "writing",
            Band::Speaking => "speaking",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Listening => "Listening",
            Band::Reading => "Reading",
            Band::Writing => "Writing",
            Band::Speaking => "Speaking",
        }
    }
}

/// IELTS band scores as sent to the eligibility endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IeltsScores {
    pub listening: f64,
    pub reading: f64,
    pub writing: f64,
    pub speaking: f64,
}

/// Band scores as typed by the user. Kept as text so partially typed input
/// such as `"7."` survives a re-render.
#[derive(Debug, Clone, PartialEq)]
pub struct BandInputs {
    pub listening: String,
    pub reading: String,
    pub writing: String,
    pub speaking: String,
}

impl Default for BandInputs {
    fn default() -> Self {
        Self {
            listening: DEFAULT_BAND_SCORE.to_string(),
            reading: DEFAULT_BAND_SCORE.to_string(),
            writing: DEFAULT_BAND_SCORE.to_string(),
            speaking: DEFAULT_BAND_SCORE.to_string(),
        }
    }
}

impl BandInputs {
    pub fn get(&self, band: Band) -> &str {
        match band {
            Band::Listening => &self.listening,
            Band::Reading => &self.reading,
            Band::Writing => &self.writing,
            Band::Speaking => &self.speaking,
        }
    }

    pub fn set(&mut self, band: Band, value: String) {
        let slot = match band {
            Band::Listening => &mut self.listening,
            Band::Reading => &mut self.reading,
            Band::Writing => &mut self.writing,
            Band::Speaking => &mut self.speaking,
        };
        *slot = value;
    }

    /// Numeric scores for the request. Empty or unparseable input counts as 0.
    pub fn to_scores(&self) -> IeltsScores {
        IeltsScores {
            listening: band_value(&self.listening),
            reading: band_value(&self.reading),
            writing: band_value(&self.writing),
            speaking: band_value(&self.speaking),
        }
    }

    pub fn warning(&self, band: Band) -> Option<String> {
        let raw = self.get(band).trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<f64>() {
            Ok(score) => range_warning(band.label(), score, Some(MIN_BAND_SCORE), Some(MAX_BAND_SCORE)),
            Err(_) => Some(format!("{} is not a number and will be sent as 0", band.label())),
        }
    }
}

fn band_value(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|score| score.is_finite())
        .unwrap_or(0.0)
}

/// Outcome of an eligibility check. Extra keys in the response are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    #[serde(default)]
    pub reasons: Vec<String>,
}

impl EligibilityResult {
    pub fn headline(&self) -> &'static str {
        if self.eligible { "Eligible" } else { "Not Eligible" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scores_default_to_eight() {
        let scores = BandInputs::default().to_scores();
        assert_eq!(
            scores,
            IeltsScores { listening: 8.0, reading: 8.0, writing: 8.0, speaking: 8.0 }
        );
    }

    #[test]
    fn blank_and_garbage_bands_become_zero() {
        let mut inputs = BandInputs::default();
        inputs.set(Band::Reading, String::new());
        inputs.set(Band::Writing, "abc".to_string());
        inputs.set(Band::Speaking, " 7.5 ".to_string());
        let scores = inputs.to_scores();
        assert_eq!(scores.reading, 0.0);
        assert_eq!(scores.writing, 0.0);
        assert_eq!(scores.speaking, 7.5);
        assert_eq!(inputs.warning(Band::Reading), None);
        assert!(inputs.warning(Band::Writing).is_some());
    }

    #[test]
    fn band_range_warning() {
        let mut inputs = BandInputs::default();
        inputs.set(Band::Listening, "9.5".to_string());
        assert_eq!(
            inputs.warning(Band::Listening).as_deref(),
            Some("Listening should be between 0 and 9")
        );
        assert_eq!(inputs.to_scores().listening, 9.5);
    }

    #[test]
    fn result_ignores_extra_response_keys() {
        let result: EligibilityResult = serde_json::from_value(json!({
            "success": true,
            "eligible": false,
            "reasons": ["Listening below 8.0"],
            "document_id": 6
        }))
        .unwrap();
        assert_eq!(result.headline(), "Not Eligible");
        assert_eq!(result.reasons, vec!["Listening below 8.0".to_string()]);
    }
}
