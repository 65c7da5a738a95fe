use super::*;

const ALL_FUNNELS: [FunnelDataset; 3] = [AUTO_FUNNEL, CARD_FUNNEL, SMB_FUNNEL];

// =============================================================
// Authoring invariants
// =============================================================

#[test]
fn every_funnel_starts_at_full_share() {
    for funnel in ALL_FUNNELS {
        assert_eq!(funnel.stages[0].share_pct, 100.0, "{}", funnel.vertical);
        assert_eq!(funnel.stage_count(0), Some(funnel.monthly_applications));
    }
}

#[test]
fn stage_shares_never_increase_down_the_funnel() {
    for funnel in ALL_FUNNELS {
        for pair in funnel.stages.windows(2) {
            assert!(
                pair[1].share_pct <= pair[0].share_pct,
                "{}: {} ({}) > {} ({})",
                funnel.vertical,
                pair[1].name,
                pair[1].share_pct,
                pair[0].name,
                pair[0].share_pct
            );
        }
    }
}

#[test]
fn shares_and_recovery_are_percentages() {
    for funnel in ALL_FUNNELS {
        for stage in funnel.stages {
            assert!((0.0..=100.0).contains(&stage.share_pct));
        }
        assert!((0.0..=100.0).contains(&funnel.recoverable_pct));
    }
}

#[test]
fn stage_losses_sum_to_total_lost() {
    for funnel in ALL_FUNNELS {
        let summed: u32 = funnel.losses().iter().map(|l| l.lost).sum();
        assert_eq!(summed, funnel.total_lost(), "{}", funnel.vertical);
    }
}

#[test]
fn recovered_applicants_never_exceed_lost_applicants() {
    for funnel in ALL_FUNNELS {
        assert!(funnel.recovered_applicants() <= funnel.total_lost());
    }
}

// =============================================================
// Derived figures
// =============================================================

#[test]
fn auto_funnel_derived_figures() {
    assert_eq!(AUTO_FUNNEL.stage_count(4), Some(15_840));
    assert_eq!(AUTO_FUNNEL.total_lost(), 32_160);
    assert_eq!(AUTO_FUNNEL.recovered_applicants(), 7_075);
    assert_eq!(AUTO_FUNNEL.recovered_volume_eur(), 7_075 * 18_500);
}

#[test]
fn losses_name_consecutive_stages() {
    let losses = CARD_FUNNEL.losses();
    assert_eq!(losses.len(), CARD_FUNNEL.stages.len() - 1);
    assert_eq!(losses[0].from, "Applications");
    assert_eq!(losses[0].to, "Identity verified");
    assert_eq!(losses[0].lost, 22_800);
    assert!((losses[0].lost_pct - 19.0).abs() < 1e-9);
}

#[test]
fn stage_count_past_end_is_none() {
    assert_eq!(SMB_FUNNEL.stage_count(SMB_FUNNEL.stages.len()), None);
}

// =============================================================
// FunnelVertical
// =============================================================

#[test]
fn vertical_default_is_auto() {
    assert_eq!(FunnelVertical::default(), FunnelVertical::Auto);
}

#[test]
fn vertical_keys_round_trip_through_from_str() {
    for vertical in FunnelVertical::ALL {
        assert_eq!(vertical.key().parse::<FunnelVertical>(), Ok(vertical));
    }
}

#[test]
fn unknown_vertical_is_rejected() {
    let err = "mortgage".parse::<FunnelVertical>().unwrap_err();
    assert_eq!(err.to_string(), "unknown funnel vertical: mortgage");
}
