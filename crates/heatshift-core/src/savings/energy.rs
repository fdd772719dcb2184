use crate::profile::Profile;
use crate::types::Money;

/// Annual running-cost delta of switching heating systems.
///
/// Negative when the target system costs more per year; not clamped.
pub fn energy_savings(profile: &Profile) -> Money {
    profile.annual_current_cost - profile.annual_target_cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_profile_saves_1100() {
        assert_eq!(energy_savings(&Profile::default()), dec!(1100));
    }

    #[test]
    fn test_more_expensive_target_is_negative() {
        let profile = Profile {
            annual_current_cost: dec!(900),
            annual_target_cost: dec!(1250),
            ..Profile::default()
        };
        assert_eq!(energy_savings(&profile), dec!(-350));
    }
}
