use super::Installer;
use crate::profile::Profile;

/// Installers in the profile's city certified for its target technology,
/// best rated first; ties go to the installer with more reviews.
pub fn recommend_installers(profile: &Profile, installers: &[Installer]) -> Vec<Installer> {
    let city = profile.city.to_lowercase();
    let mut picked: Vec<Installer> = installers
        .iter()
        .filter(|i| i.city.to_lowercase() == city)
        .filter(|i| i.supported_tech.iter().any(|t| *t == profile.target_tech))
        .cloned()
        .collect();

    picked.sort_by(|a, b| b.rating.cmp(&a.rating).then(b.reviews.cmp(&a.reviews)));
    picked
}
