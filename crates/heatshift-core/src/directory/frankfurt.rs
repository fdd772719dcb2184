//! Bundled reference data for Frankfurt am Main (Hesse, Germany).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::static_catalog::RegionalCatalog;
use super::Installer;
use crate::incentives::{Incentive, IncentiveSource, Restriction};
use crate::types::{Jurisdiction, Supplier};

const COUNTRY: &str = "DE";
const CITY: &str = "Frankfurt";

pub fn region() -> RegionalCatalog {
    RegionalCatalog {
        jurisdiction: jurisdiction(),
        incentives: incentives(),
        suppliers: suppliers(),
        installers: installers(),
    }
}

fn jurisdiction() -> Jurisdiction {
    Jurisdiction::new(COUNTRY, Some(CITY))
}

fn incentives() -> Vec<Incentive> {
    let german = Incentive {
        country: Some(COUNTRY.into()),
        ..Incentive::default()
    };

    vec![
        Incentive {
            id: "BEG_WG".into(),
            name: "Federal BEG WG Heat Pump Grant".into(),
            source: IncentiveSource::National,
            coverage_rate: dec!(0.30),
            max_amount: dec!(18000),
            owner_types: Restriction::of(["homeowner"]),
            building_types: Restriction::of(["single_family"]),
            current_heating: Restriction::of(["gas", "oil"]),
            target_tech: Restriction::of(["heat_pump_air", "heat_pump_ground"]),
            ..german.clone()
        },
        Incentive {
            id: "HESSEN_BONUS".into(),
            name: "Hessen Heat Pump Bonus".into(),
            source: IncentiveSource::State,
            coverage_rate: dec!(0.10),
            max_amount: dec!(4000),
            owner_types: Restriction::of(["homeowner"]),
            current_heating: Restriction::of(["gas"]),
            target_tech: Restriction::of(["heat_pump_air"]),
            ..german.clone()
        },
        Incentive {
            id: "FRANKFURT_TOPUP".into(),
            name: "Frankfurt Climate Upgrade Grant".into(),
            source: IncentiveSource::City,
            city: Some(CITY.into()),
            coverage_rate: dec!(0.08),
            max_amount: dec!(3000),
            owner_types: Restriction::of(["homeowner"]),
            target_tech: Restriction::of(["heat_pump_air"]),
            ..german.clone()
        },
        Incentive {
            id: "MAINOVA_GREEN".into(),
            name: "Mainova Green Heat Rebate".into(),
            source: IncentiveSource::Utility,
            city: Some(CITY.into()),
            max_amount: dec!(500),
            owner_types: Restriction::of(["homeowner"]),
            current_heating: Restriction::of(["gas"]),
            ..german.clone()
        },
        Incentive {
            id: "KFW_LOAN".into(),
            name: "KfW Green Heat Loan (0.9%)".into(),
            source: IncentiveSource::Loan,
            coverage_rate: Decimal::ZERO,
            is_loan: true,
            interest_rate: Some(dec!(0.009)),
            max_loan_share: Some(dec!(0.80)),
            ..german
        },
    ]
}

fn suppliers() -> Vec<Supplier> {
    let supplier = |name: &str, tariff: &str, price_kwh: Decimal, contact: &str| Supplier {
        name: name.into(),
        jurisdiction: jurisdiction(),
        tariff: tariff.into(),
        price_kwh,
        renewable_share: 100,
        contact: contact.into(),
    };

    vec![
        supplier("Mainova GreenHeat", "100% renewable", dec!(0.286), "mainova.de"),
        supplier("Naturstrom AG", "Premium Ökostrom", dec!(0.295), "naturstrom.de"),
        supplier("E.ON Ökostrom", "Green electricity", dec!(0.299), "eon.de"),
    ]
}

fn installers() -> Vec<Installer> {
    let installer = |name: &str, tech: &[&str], rating: Decimal, reviews: u32, email: &str| {
        Installer {
            name: name.into(),
            city: CITY.into(),
            supported_tech: tech.iter().map(|t| t.to_string()).collect(),
            rating,
            reviews,
            email: email.into(),
        }
    };

    vec![
        installer(
            "HeatPump Frankfurt GmbH",
            &["heat_pump_air"],
            dec!(4.9),
            211,
            "service@hp-ffm.de",
        ),
        installer(
            "MainHeat Solutions",
            &["heat_pump_air", "heat_pump_ground"],
            dec!(4.7),
            143,
            "contact@mainheat.de",
        ),
        installer(
            "Green Therm Frankfurt",
            &["heat_pump_air"],
            dec!(4.6),
            94,
            "hello@greentherm.de",
        ),
    ]
}
