mod clarity;
mod engagement;
mod keywords;
mod sentiment;

pub use clarity::{clarity_score, estimate_syllables};
pub use engagement::{length_fit, EngagementScorer, EngagementWeights};
pub use keywords::top_keywords;
pub use sentiment::{SentimentScorer, SentimentWeights};

pub(crate) fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(0.0).min(100.0)
}
