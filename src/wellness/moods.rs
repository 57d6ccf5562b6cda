//! Mood-based audio suggestions with best-effort playback

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::{debug, info};

/// The closed set of moods the app knows how to respond to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Tired,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Anxious, Mood::Tired];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Tired => "tired",
        }
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "anxious" => Ok(Mood::Anxious),
            "tired" => Ok(Mood::Tired),
            other => Err(format!("Unknown mood '{}'", other)),
        }
    }
}

/// Sound suggestion associated with a mood. The frequency picks the sine
/// tone rendered when no real track library is available.
#[derive(Debug, Clone, Serialize)]
pub struct MoodTrack {
    pub title: &'static str,
    pub description: &'static str,
    pub frequency_hz: f64,
}

pub fn track(mood: Mood) -> &'static MoodTrack {
    match mood {
        Mood::Happy => &MoodTrack {
            title: "Uplifting Ambient",
            description: "Bright, energizing sounds to match your positive mood",
            frequency_hz: 523.25, // C5
        },
        Mood::Sad => &MoodTrack {
            title: "Gentle Comfort",
            description: "Soft, comforting melodies to support you through difficult feelings",
            frequency_hz: 261.63, // C4
        },
        Mood::Anxious => &MoodTrack {
            title: "Calming Waves",
            description: "Peaceful sounds to help ease anxiety and promote relaxation",
            frequency_hz: 349.23, // F4
        },
        Mood::Tired => &MoodTrack {
            title: "Restorative Rest",
            description: "Gentle sounds to help you recharge and find peace",
            frequency_hz: 196.00, // G3
        },
    }
}

/// Result of a playback attempt. Playback never fails the operation; the
/// worst case is a textual notice instead of sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// A tone was rendered through the audio subsystem
    Tone,
    /// Audio was unavailable; carry this notice to the user instead
    Notice(String),
}

/// Render a short sine tone for the mood through sox's `play`, degrading to
/// a textual notice when the audio subsystem is unavailable.
pub async fn play(mood: Mood) -> PlaybackOutcome {
    let selected = track(mood);

    let result = Command::new("play")
        .args(["-q", "-n", "synth", "2", "sine"])
        .arg(selected.frequency_hz.to_string())
        .output()
        .await;

    match result {
        Ok(output) if output.status.success() => {
            info!("Playing calming sounds for the {} mood", mood.as_str());
            PlaybackOutcome::Tone
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("Tone playback failed: {}", stderr.trim());
            PlaybackOutcome::Notice(fallback_notice(mood))
        }
        Err(e) => {
            debug!("Audio subsystem unavailable: {}", e);
            PlaybackOutcome::Notice(fallback_notice(mood))
        }
    }
}

pub fn fallback_notice(mood: Mood) -> String {
    format!(
        "Audio would play here for your {} mood in a real deployment",
        mood.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moods_parse_from_their_labels() {
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>(), Ok(mood));
        }
        assert!("angry".parse::<Mood>().is_err());
        assert!("".parse::<Mood>().is_err());
    }

    #[test]
    fn every_mood_has_a_track() {
        assert_eq!(track(Mood::Happy).frequency_hz, 523.25);
        assert_eq!(track(Mood::Sad).frequency_hz, 261.63);
        assert_eq!(track(Mood::Anxious).frequency_hz, 349.23);
        assert_eq!(track(Mood::Tired).frequency_hz, 196.00);
        for mood in Mood::ALL {
            assert!(!track(mood).title.is_empty());
        }
    }

    #[test]
    fn fallback_notice_names_the_mood() {
        assert!(fallback_notice(Mood::Anxious).contains("anxious"));
    }
}
