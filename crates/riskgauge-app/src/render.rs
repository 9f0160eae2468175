//! Derived display values for a successful assessment.
//!
//! Pure formatting only; the surface decides how the values are laid out.

use riskgauge_core::{RiskAssessment, RiskClass, Ticker};

/// Visual tier class applied to the risk badge; exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierClass {
    Low,
    Med,
    High,
}

impl TierClass {
    pub const fn for_class(class: RiskClass) -> Self {
        match class {
            RiskClass::Low => Self::Low,
            RiskClass::Medium => Self::Med,
            RiskClass::High => Self::High,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Med => "med",
            Self::High => "high",
        }
    }
}

/// One probability bar: proportional width and its percentage label share
/// the same formatted value.
#[derive(Debug, Clone, PartialEq)]
pub struct TierBar {
    pub class: RiskClass,
    /// Raw probability as reported, unclamped.
    pub value: f64,
    /// `value * 100` to 1 decimal place with a trailing `%`.
    pub percent: String,
}

/// Display-ready projection of a [`RiskAssessment`].
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentView {
    pub ticker: String,
    pub tier: TierClass,
    /// Uppercased class with the fixed `" RISK"` suffix.
    pub badge: String,
    /// Volatility as a percentage, 2 decimal places.
    pub volatility: String,
    /// Confidence as a percentage, 0 decimal places.
    pub confidence: String,
    /// Free-form service text, rendered verbatim.
    pub recommendation: String,
    /// Bars in ascending tier order (low, medium, high).
    pub bars: [TierBar; 3],
}

/// Format a 0-1 fraction as a percentage with the given decimal places.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

/// Compute every derived display value for a successful assessment.
pub fn assessment_view(ticker: &Ticker, assessment: &RiskAssessment) -> AssessmentView {
    let bars = RiskClass::ALL.map(|class| {
        let value = assessment.probabilities.get(class);
        TierBar {
            class,
            value,
            percent: format_percent(value, 1),
        }
    });

    AssessmentView {
        ticker: ticker.as_str().to_owned(),
        tier: TierClass::for_class(assessment.risk_class),
        badge: format!("{} RISK", assessment.risk_class.as_str().to_uppercase()),
        volatility: format_percent(assessment.volatility, 2),
        confidence: format_percent(assessment.confidence_score, 0),
        recommendation: assessment.recommendation.clone(),
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskgauge_core::RiskProbabilities;

    fn sample_assessment() -> RiskAssessment {
        RiskAssessment {
            risk_class: RiskClass::Low,
            volatility: 0.1234,
            confidence_score: 0.87,
            recommendation: String::from("Hold"),
            probabilities: RiskProbabilities {
                low: 0.7,
                medium: 0.2,
                high: 0.1,
            },
        }
    }

    #[test]
    fn view_matches_the_reference_scenario() {
        let ticker = Ticker::parse("AAPL").expect("valid ticker");
        let view = assessment_view(&ticker, &sample_assessment());

        assert_eq!(view.ticker, "AAPL");
        assert_eq!(view.tier, TierClass::Low);
        assert_eq!(view.badge, "LOW RISK");
        assert_eq!(view.volatility, "12.34%");
        assert_eq!(view.confidence, "87%");
        assert_eq!(view.recommendation, "Hold");

        let labels: Vec<&str> = view.bars.iter().map(|bar| bar.percent.as_str()).collect();
        assert_eq!(labels, ["70.0%", "20.0%", "10.0%"]);
    }

    #[test]
    fn each_risk_class_maps_to_its_own_tier() {
        assert_eq!(TierClass::for_class(RiskClass::Low).as_str(), "low");
        assert_eq!(TierClass::for_class(RiskClass::Medium).as_str(), "med");
        assert_eq!(TierClass::for_class(RiskClass::High).as_str(), "high");
    }

    #[test]
    fn medium_badge_renders_uppercased_with_suffix() {
        let mut assessment = sample_assessment();
        assessment.risk_class = RiskClass::Medium;
        let ticker = Ticker::parse("MSFT").expect("valid ticker");

        let view = assessment_view(&ticker, &assessment);
        assert_eq!(view.badge, "MEDIUM RISK");
        assert_eq!(view.tier, TierClass::Med);
    }

    #[test]
    fn out_of_range_values_render_without_clamping() {
        let mut assessment = sample_assessment();
        assessment.volatility = 1.5;
        assessment.probabilities.low = 1.25;
        let ticker = Ticker::parse("GME").expect("valid ticker");

        let view = assessment_view(&ticker, &assessment);
        assert_eq!(view.volatility, "150.00%");
        assert_eq!(view.bars[0].percent, "125.0%");
    }

    #[test]
    fn percent_formatting_rounds_to_requested_places() {
        assert_eq!(format_percent(0.1234, 2), "12.34%");
        assert_eq!(format_percent(0.87, 0), "87%");
        assert_eq!(format_percent(0.056789, 1), "5.7%");
    }
}
