//! Guided activity suggestions

use rand::Rng;
use serde::Serialize;

/// A suggested off-screen activity with a recommended timer duration
#[derive(Debug, Clone, Serialize)]
pub struct ActivitySuggestion {
    pub activity: &'static str,
    pub description: &'static str,
    pub duration_minutes: u64,
    pub icon: &'static str,
}

pub const SUGGESTIONS: [ActivitySuggestion; 12] = [
    ActivitySuggestion {
        activity: "Take a 10-minute mindful walk",
        description: "Step outside and focus on your breathing and surroundings",
        duration_minutes: 10,
        icon: "👣",
    },
    ActivitySuggestion {
        activity: "Call a friend or family member",
        description: "Reach out to someone you care about and have a meaningful conversation",
        duration_minutes: 15,
        icon: "📞",
    },
    ActivitySuggestion {
        activity: "Write a handwritten letter",
        description: "Express your thoughts on paper to someone special",
        duration_minutes: 20,
        icon: "✍️",
    },
    ActivitySuggestion {
        activity: "Do 5 gentle yoga poses",
        description: "Stretch your body and calm your mind with simple poses",
        duration_minutes: 10,
        icon: "🧘",
    },
    ActivitySuggestion {
        activity: "Practice deep breathing for 5 minutes",
        description: "Focus on slow, intentional breaths to center yourself",
        duration_minutes: 5,
        icon: "🫁",
    },
    ActivitySuggestion {
        activity: "Organize a small space",
        description: "Tidy up your desk, a drawer, or a corner of your room",
        duration_minutes: 15,
        icon: "🏠",
    },
    ActivitySuggestion {
        activity: "Read a few pages of a book",
        description: "Escape into a good story or learn something new",
        duration_minutes: 15,
        icon: "📖",
    },
    ActivitySuggestion {
        activity: "Make a warm cup of tea",
        description: "Prepare and mindfully enjoy a soothing beverage",
        duration_minutes: 10,
        icon: "🍵",
    },
    ActivitySuggestion {
        activity: "Draw or sketch something you see",
        description: "Express creativity by drawing your surroundings",
        duration_minutes: 20,
        icon: "🎨",
    },
    ActivitySuggestion {
        activity: "Listen to your favorite music",
        description: "Put on headphones and get lost in melodies that move you",
        duration_minutes: 15,
        icon: "🎵",
    },
    ActivitySuggestion {
        activity: "Water your plants or garden",
        description: "Connect with nature by caring for growing things",
        duration_minutes: 10,
        icon: "🌱",
    },
    ActivitySuggestion {
        activity: "Practice gratitude meditation",
        description: "Spend time reflecting on things you're thankful for",
        duration_minutes: 10,
        icon: "🙏",
    },
];

/// Pick one suggestion at random
pub fn suggest() -> &'static ActivitySuggestion {
    let index = rand::thread_rng().gen_range(0..SUGGESTIONS.len());
    &SUGGESTIONS[index]
}
