//! Journaling prompt deck

use rand::Rng;

pub const PROMPTS: [&str; 20] = [
    "What are three things you're grateful for today?",
    "Describe a moment today when you felt truly present.",
    "What emotion are you experiencing right now, and where do you feel it in your body?",
    "If you could send a message to your past self this morning, what would it be?",
    "What's one small act of kindness you witnessed or performed today?",
    "How did you take care of yourself today?",
    "What thoughts are you ready to let go of?",
    "Describe your ideal peaceful moment.",
    "What challenge today helped you grow?",
    "How do you want to feel tomorrow, and what can you do to support that?",
    "What made you smile today?",
    "If your feelings were weather, what would today's forecast be?",
    "What would you like to forgive yourself for?",
    "Describe a place where you feel completely at peace.",
    "What's one thing you learned about yourself this week?",
    "How did you show compassion to yourself or others today?",
    "What are you curious about right now?",
    "If you could plant a garden of thoughts, what would you grow?",
    "What does self-love look like for you today?",
    "How do you want to end this day?",
];

pub fn count() -> usize {
    PROMPTS.len()
}

/// Prompt at `index`, wrapping so a stale persisted cursor stays valid
pub fn get(index: usize) -> &'static str {
    PROMPTS[index % PROMPTS.len()]
}

pub fn random_index() -> usize {
    rand::thread_rng().gen_range(0..PROMPTS.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_holds_twenty_prompts() {
        assert_eq!(count(), 20);
    }

    #[test]
    fn lookup_wraps_out_of_range_cursors() {
        assert_eq!(get(0), PROMPTS[0]);
        assert_eq!(get(20), PROMPTS[0]);
        assert_eq!(get(21), PROMPTS[1]);
    }

    #[test]
    fn random_index_stays_in_range() {
        for _ in 0..100 {
            assert!(random_index() < count());
        }
    }
}
