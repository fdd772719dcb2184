use heatshift_core::directory::{IncentiveCatalog, StaticCatalog};
use heatshift_core::incentives::{amount, matches, stack, Incentive, IncentiveSource, Restriction};
use heatshift_core::savings::{financing_options, SavingsAssumptions};
use heatshift_core::Profile;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn frankfurt_catalog() -> Vec<Incentive> {
    let profile = Profile::default();
    StaticCatalog::builtin().incentives(&profile.jurisdiction())
}

fn granted_ids(profile: &Profile) -> Vec<String> {
    stack(profile, &frankfurt_catalog())
        .incentives
        .into_iter()
        .map(|r| r.incentive.id)
        .collect()
}

// ===========================================================================
// Frankfurt scenarios
// ===========================================================================

#[test]
fn test_frankfurt_gas_to_air_source() {
    let profile = Profile::default();
    let plan = stack(&profile, &frankfurt_catalog());

    let granted: Vec<(&str, Decimal)> = plan
        .incentives
        .iter()
        .map(|r| (r.incentive.id.as_str(), r.amount))
        .collect();
    assert_eq!(
        granted,
        vec![
            ("BEG_WG", dec!(8400)),
            ("HESSEN_BONUS", dec!(2800)),
            ("FRANKFURT_TOPUP", dec!(2240)),
        ]
    );

    // 8400 + 2800 + 2240 = 13440 of 28000
    assert_eq!(plan.total, dec!(13440));
    assert_eq!(plan.raw_total, dec!(13440));
    assert_eq!(plan.share, dec!(0.48));
    assert_eq!(plan.remaining, dec!(14560));
    assert!(!plan.capped);
}

#[test]
fn test_frankfurt_utility_rebate_matches_but_pays_nothing() {
    let profile = Profile::default();
    let catalog = frankfurt_catalog();
    let rebate = catalog.iter().find(|i| i.id == "MAINOVA_GREEN").unwrap();

    assert!(matches(rebate, &profile));
    assert_eq!(amount(rebate, &profile), Decimal::ZERO);
    assert!(!granted_ids(&profile).contains(&"MAINOVA_GREEN".to_string()));
}

#[test]
fn test_frankfurt_loan_is_a_financing_option() {
    let profile = Profile::default();
    let catalog = frankfurt_catalog();

    assert!(!granted_ids(&profile).contains(&"KFW_LOAN".to_string()));

    let options = financing_options(&profile, &catalog, &SavingsAssumptions::default());
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].incentive_id, "KFW_LOAN");
    assert_eq!(options[0].interest_rate, dec!(0.009));
    // 28000 * 0.8 = 22400; * (0.05 - 0.009) * 10 = 9184
    assert_eq!(options[0].financed_amount, dec!(22400));
    assert_eq!(options[0].interest_savings, dec!(9184));
}

#[test]
fn test_frankfurt_oil_heating_loses_state_bonus() {
    let profile = Profile {
        current_heating: "oil".into(),
        ..Profile::default()
    };
    assert_eq!(granted_ids(&profile), vec!["BEG_WG", "FRANKFURT_TOPUP"]);
    assert_eq!(stack(&profile, &frankfurt_catalog()).total, dec!(10640));
}

#[test]
fn test_frankfurt_ground_source_keeps_federal_grant_only() {
    let profile = Profile {
        target_tech: "heat_pump_ground".into(),
        ..Profile::default()
    };
    assert_eq!(granted_ids(&profile), vec!["BEG_WG"]);
}

#[test]
fn test_federal_cap_binds_on_large_project() {
    let profile = Profile {
        total_cost: dec!(70000),
        ..Profile::default()
    };
    let plan = stack(&profile, &frankfurt_catalog());
    // 30% of 70000 = 21000 -> 18000; 10% = 7000 -> 4000; 8% = 5600 -> 3000
    let amounts: Vec<Decimal> = plan.incentives.iter().map(|r| r.amount).collect();
    assert_eq!(amounts, vec![dec!(18000), dec!(4000), dec!(3000)]);
    assert_eq!(plan.total, dec!(25000));
}

#[test]
fn test_landlord_gets_nothing() {
    let profile = Profile {
        owner_type: "landlord".into(),
        ..Profile::default()
    };
    let plan = stack(&profile, &frankfurt_catalog());
    assert!(plan.is_empty());
    assert_eq!(plan.total, Decimal::ZERO);
    assert_eq!(plan.remaining, profile.total_cost);
}

#[test]
fn test_city_grant_needs_the_city() {
    let profile = Profile {
        city: "Kassel".into(),
        ..Profile::default()
    };
    assert_eq!(granted_ids(&profile), vec!["BEG_WG", "HESSEN_BONUS"]);
}

#[test]
fn test_zero_cost_project_has_zero_share() {
    let profile = Profile {
        total_cost: Decimal::ZERO,
        ..Profile::default()
    };
    let plan = stack(&profile, &frankfurt_catalog());
    assert_eq!(plan.share, Decimal::ZERO);
    assert_eq!(plan.total, Decimal::ZERO);
    assert_eq!(plan.remaining, Decimal::ZERO);
}

// ===========================================================================
// Properties
// ===========================================================================

fn money(cents: u64) -> Decimal {
    Decimal::new(cents as i64, 2)
}

fn profile_strategy() -> impl Strategy<Value = Profile> {
    (
        0u64..=20_000_000u64,
        prop::sample::select(vec!["homeowner", "landlord", "cooperative"]),
        prop::sample::select(vec!["single_family", "multi_family"]),
        prop::sample::select(vec!["gas", "oil", "electric"]),
        prop::sample::select(vec!["heat_pump_air", "heat_pump_ground"]),
        prop::sample::select(vec!["low", "medium", "high"]),
    )
        .prop_map(|(cost, owner, building, current, target, income)| Profile {
            total_cost: money(cost),
            owner_type: owner.into(),
            building_type: building.into(),
            current_heating: current.into(),
            target_tech: target.into(),
            income_level: income.into(),
            ..Profile::default()
        })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Incentive>> {
    prop::collection::vec(
        (0u32..=100u32, 0u64..=5_000_000u64, any::<bool>(), any::<bool>()),
        0..10,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (pct, cap, is_loan, homeowners_only))| Incentive {
                id: format!("I{i}"),
                name: format!("Incentive {i}"),
                source: if is_loan {
                    IncentiveSource::Loan
                } else {
                    IncentiveSource::National
                },
                country: Some("DE".into()),
                coverage_rate: Decimal::new(pct as i64, 2),
                max_amount: money(cap),
                is_loan,
                owner_types: if homeowners_only {
                    Restriction::of(["homeowner"])
                } else {
                    None
                },
                ..Incentive::default()
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn pbt_stack_respects_project_cost(
        profile in profile_strategy(),
        catalog in catalog_strategy(),
    ) {
        let plan = stack(&profile, &catalog);
        prop_assert!(plan.total >= Decimal::ZERO);
        prop_assert!(plan.total <= profile.total_cost);
        prop_assert!(plan.remaining >= Decimal::ZERO);
        prop_assert_eq!(plan.remaining, profile.total_cost - plan.total);
        if profile.total_cost > Decimal::ZERO {
            prop_assert_eq!(plan.share, plan.total / profile.total_cost);
        } else {
            prop_assert_eq!(plan.share, Decimal::ZERO);
        }
        prop_assert!(plan.incentives.iter().all(|r| r.amount > Decimal::ZERO && !r.incentive.is_loan));
    }

    #[test]
    fn pbt_amount_monotone_and_capped(
        profile in profile_strategy(),
        low in 0u32..=100u32,
        delta in 0u32..=100u32,
        cap in 1u64..=5_000_000u64,
    ) {
        let grant = |pct: u32| Incentive {
            id: "G".into(),
            name: "Grant".into(),
            coverage_rate: Decimal::new(pct as i64, 2),
            max_amount: money(cap),
            ..Incentive::default()
        };
        let a = amount(&grant(low), &profile);
        let b = amount(&grant(low + delta), &profile);
        prop_assert!(a <= b);
        prop_assert!(b <= money(cap));
    }

    #[test]
    fn pbt_loans_never_pay_grants(profile in profile_strategy(), pct in 0u32..=100u32) {
        let loan = Incentive {
            id: "L".into(),
            name: "Loan".into(),
            is_loan: true,
            coverage_rate: Decimal::new(pct as i64, 2),
            ..Incentive::default()
        };
        prop_assert_eq!(amount(&loan, &profile), Decimal::ZERO);
    }

    #[test]
    fn pbt_unrestricted_incentive_matches_everyone(profile in profile_strategy()) {
        let open = Incentive {
            id: "OPEN".into(),
            name: "Open".into(),
            country: Some("DE".into()),
            ..Incentive::default()
        };
        prop_assert!(matches(&open, &profile));
    }
}

#[test]
fn test_full_coverage_hits_the_cap() {
    let profile = Profile::default();
    let grant = Incentive {
        id: "G".into(),
        name: "Grant".into(),
        coverage_rate: Decimal::ONE,
        max_amount: dec!(5000),
        ..Incentive::default()
    };
    assert_eq!(amount(&grant, &profile), grant.max_amount);
}
