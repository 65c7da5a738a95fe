use super::*;

fn all_sets() -> [&'static [MetricDatum]; 4] {
    [HERO_METRICS, IMPACT_METRICS, PILOT_METRICS, SECURITY_METRICS]
}

#[test]
fn every_metric_set_is_populated() {
    for set in all_sets() {
        assert!(!set.is_empty());
    }
}

#[test]
fn metric_targets_are_finite_and_non_negative() {
    for datum in all_sets().into_iter().flatten() {
        assert!(datum.target.is_finite(), "{} is not finite", datum.label);
        assert!(datum.target >= 0.0, "{} is negative", datum.label);
    }
}

#[test]
fn declared_precision_covers_authored_value() {
    // A target with more fractional digits than `decimals` would display
    // something other than what was authored once the counter settles.
    for datum in all_sets().into_iter().flatten() {
        let scale = 10f64.powi(i32::from(datum.decimals));
        let scaled = datum.target * scale;
        assert!((scaled - scaled.round()).abs() < 1e-6, "{} loses precision", datum.label);
    }
}

#[test]
fn metric_color_classes_are_distinct() {
    let classes = [
        MetricColor::Brand.css_class(),
        MetricColor::Accent.css_class(),
        MetricColor::Success.css_class(),
        MetricColor::Neutral.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
