use crate::AnalysisResult;

/// Threshold-based improvement recommendations derived from one analysis.
pub fn improvement_tips(result: &AnalysisResult) -> Vec<String> {
    let mut tips = Vec::new();

    if result.sentiment < 60 {
        tips.push("Use more positive language or an exciting benefit to lift sentiment.".to_string());
    }
    if result.clarity < 70 {
        tips.push("Shorten sentences and remove filler words to improve clarity.".to_string());
    }
    if result.hashtag_density < 30 {
        tips.push("Add 2-3 specific hashtags to increase discoverability.".to_string());
    }
    if result.hashtag_density > 70 {
        tips.push("Reduce the number of hashtags for a cleaner, more focused message.".to_string());
    }
    if !result.cta {
        tips.push("Add a clear call-to-action (e.g., \"Join the waitlist\", \"Subscribe\").".to_string());
    }
    if let Some(length) = result.radar.iter().find(|p| p.dimension == "Length") {
        if length.value < 60 {
            tips.push("Expand the content slightly to provide more context for this platform.".to_string());
        } else if length.value > 90 {
            tips.push("Trim the content to keep it punchy and within the platform sweet spot.".to_string());
        }
    }
    tips.push(format!(
        "Post when your audience is most active: {}.",
        result.best_time
    ));

    tips
}
