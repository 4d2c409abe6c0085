//! Folds per-article classifier output into a single directional signal.

use crate::domain::news::SentimentLabel;

/// Minimum net conviction required to call a direction. Averages
/// inside (-0.15, 0.15) are treated as noise.
pub const SIGNAL_THRESHOLD: f64 = 0.15;

/// Which articles count toward the averaging divisor.
///
/// The two deployed variants of the dashboard disagreed here: the
/// interactive app divided by every article that reached scoring, the
/// batch script only by articles with a directional label. Both are
/// kept as an explicit policy; `AllScored` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DivisorPolicy {
    #[default]
    AllScored,
    DirectionalOnly,
}

/// Fold (label, confidence) pairs into (overall sentiment, average).
/// Empty input is a defined terminal case: (Neutral, 0.0).
pub fn aggregate(
    scored: &[(SentimentLabel, f64)],
    policy: DivisorPolicy,
) -> (SentimentLabel, f64) {
    let mut total = 0.0;
    let mut count = 0usize;

    for &(label, score) in scored {
        total += label.signed(score);
        if policy == DivisorPolicy::DirectionalOnly && !label.is_directional() {
            continue;
        }
        count += 1;
    }

    if count == 0 {
        return (SentimentLabel::Neutral, 0.0);
    }

    let average = total / count as f64;
    (classify_average(average), average)
}

/// Threshold classification with the neutral dead zone. Both bounds
/// are inclusive.
pub fn classify_average(average: f64) -> SentimentLabel {
    if average >= SIGNAL_THRESHOLD {
        SentimentLabel::Positive
    } else if average <= -SIGNAL_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
