//! Heuristic SEO score for generated articles.

const BASE_SCORE: u8 = 60;
const MAX_SCORE: u8 = 100;

/// Score a generated article between 0 and 100.
///
/// Rewards a title close to 50-60 characters, a keyword in the title,
/// `<h2>`/`<h3>` structure and at least 300 words of content.
pub fn seo_score(title: &str, content: &str, keywords: Option<&str>) -> u8 {
    let mut score = BASE_SCORE;

    let title_len = title.chars().count();
    if (50..=60).contains(&title_len) {
        score += 10;
    } else if (40..=70).contains(&title_len) {
        score += 5;
    }

    if let Some(keywords) = keywords {
        let title_lower = title.to_lowercase();
        let matched = keywords
            .split(',')
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .any(|k| title_lower.contains(&k));
        if matched {
            score += 10;
        }
    }

    if content.contains("<h2>") || content.contains("<h3>") {
        score += 10;
    }

    if content.split(' ').count() >= 300 {
        score += 10;
    }

    score.min(MAX_SCORE)
}
