//! Worker profile record shown on listing cards and the detail screen.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Service provider profile.
///
/// Plain value record; sample instances are cloned out of the catalog when
/// a listing card is tapped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    pub name: String,
    pub profession: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    pub review_count: u32,
    /// Human-readable distance, e.g. "0.8 km".
    pub distance: String,
    /// Hourly rate in TND.
    pub hourly_rate: u32,
    pub completed_jobs: u32,
    pub years_experience: u32,
    pub available: bool,
    pub about: String,
    pub skills: BTreeSet<String>,
}

impl WorkerProfile {
    /// Maximum rating value.
    pub const MAX_RATING: f32 = 5.0;

    /// Rating clamped into the valid range.
    pub fn clamped_rating(&self) -> f32 {
        self.rating.clamp(0.0, Self::MAX_RATING)
    }

    /// "4.9 (127 reviews)"
    pub fn rating_label(&self) -> String {
        format!("{:.1} ({} reviews)", self.clamped_rating(), self.review_count)
    }

    /// "180 TND/hr"
    pub fn price_label(&self) -> String {
        format!("{} TND/hr", self.hourly_rate)
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available { "Available" } else { "Busy" }
    }

    /// Case-insensitive match against name, profession, or any skill.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.profession.to_lowercase().contains(&query)
            || self.skills.iter().any(|s| s.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plumber() -> WorkerProfile {
        WorkerProfile {
            name: "Mohamed Hassan".to_string(),
            profession: "Plumber".to_string(),
            rating: 4.9,
            review_count: 127,
            distance: "0.8 km".to_string(),
            hourly_rate: 180,
            completed_jobs: 340,
            years_experience: 12,
            available: true,
            about: String::new(),
            skills: ["Leak Repairs", "Pipe Installation"].into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_labels() {
        let worker = plumber();
        assert_eq!(worker.rating_label(), "4.9 (127 reviews)");
        assert_eq!(worker.price_label(), "180 TND/hr");
        assert_eq!(worker.availability_label(), "Available");
    }

    #[test]
    fn test_rating_is_clamped() {
        let mut worker = plumber();
        worker.rating = 7.5;
        assert_eq!(worker.clamped_rating(), 5.0);
        worker.rating = -1.0;
        assert_eq!(worker.clamped_rating(), 0.0);
    }

    #[test]
    fn test_matches_query() {
        let worker = plumber();
        assert!(worker.matches_query(""));
        assert!(worker.matches_query("  hassan "));
        assert!(worker.matches_query("PLUMB"));
        assert!(worker.matches_query("leak"));
        assert!(!worker.matches_query("electric"));
    }
}
