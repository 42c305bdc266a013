/// Build the recommendation prompt for a mood description.
///
/// The template is fixed: it asks for exactly 3 songs as `Title - Artist`,
/// one per line. The mood is trimmed before embedding; an empty description
/// still yields a well-formed prompt.
pub fn build_song_prompt(mood_description: &str) -> String {
    let mood = mood_description.trim();
    format!(
        "Based on the following mood: '{}', \
         suggest 3 songs that would emotionally fit this mood. \
         Return only the song titles and artists in the format 'Title - Artist', one per line.",
        mood
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_trimmed_mood() {
        let prompt = build_song_prompt("  relaxed and nostalgic \n");

        assert!(prompt.contains("'relaxed and nostalgic'"));
        assert!(!prompt.contains("  relaxed"));
    }

    #[test]
    fn test_prompt_requests_three_songs_one_per_line() {
        let prompt = build_song_prompt("energetic");

        assert!(prompt.contains("suggest 3 songs"));
        assert!(prompt.contains("'Title - Artist'"));
        assert!(prompt.contains("one per line"));
    }

    #[test]
    fn test_empty_mood_still_builds_a_prompt() {
        let prompt = build_song_prompt("");

        assert!(prompt.starts_with("Based on the following mood: ''"));
        assert!(prompt.contains("suggest 3 songs"));
    }
}
