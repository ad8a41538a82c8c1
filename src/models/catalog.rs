//! Static service catalog: categories and sample workers.

use std::collections::BTreeSet;

use super::worker::WorkerProfile;

/// A service category tile on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable key, also used to pick the icon.
    pub key: &'static str,
    pub label: &'static str,
    /// Profession a worker must have to show up under this category.
    pub profession: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { key: "plumbing", label: "Plumbing", profession: "Plumber" },
    Category { key: "electricity", label: "Electricity", profession: "Electrician" },
    Category { key: "painting", label: "Painting", profession: "Painter" },
    Category { key: "acFixing", label: "AC Fixing", profession: "AC Technician" },
    Category { key: "homeCleaning", label: "Home Cleaning", profession: "Cleaner" },
    Category { key: "smallRepairs", label: "Small Repairs", profession: "Handyman" },
    Category { key: "furnitureAssembly", label: "Furniture Assembly", profession: "Furniture Assembler" },
    Category { key: "waterLeakage", label: "Water Leakage", profession: "Leak Specialist" },
    Category { key: "applianceRepair", label: "Appliance Repair", profession: "Appliance Technician" },
    Category { key: "locksmith", label: "Locksmiths", profession: "Locksmith" },
];

impl Category {
    pub fn by_key(key: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.key == key)
    }
}

#[allow(clippy::too_many_arguments)]
fn worker(
    name: &str,
    profession: &str,
    rating: f32,
    review_count: u32,
    distance: &str,
    hourly_rate: u32,
    completed_jobs: u32,
    years_experience: u32,
    available: bool,
    about: &str,
    skills: &[&str],
) -> WorkerProfile {
    WorkerProfile {
        name: name.to_string(),
        profession: profession.to_string(),
        rating,
        review_count,
        distance: distance.to_string(),
        hourly_rate,
        completed_jobs,
        years_experience,
        available,
        about: about.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
    }
}

/// Workers listed on the client home screen, nearest first.
pub fn sample_workers() -> Vec<WorkerProfile> {
    vec![
        worker(
            "Mohamed Hassan",
            "Plumber",
            4.9,
            127,
            "0.8 km",
            180,
            340,
            12,
            true,
            "Professional plumber with 12 years of experience in all plumbing work, from leak repairs to full bathroom installations.",
            &["Pipe Installation", "Leak Repairs", "Drain Cleaning", "Water Heater Services"],
        ),
        worker(
            "Ahmed El-Sayed",
            "Electrician",
            4.8,
            98,
            "1.2 km",
            200,
            275,
            9,
            true,
            "Professional installation and maintenance of electrical wiring, fixtures, and appliances.",
            &["Wiring", "Fixture Installation", "Panel Upgrades"],
        ),
        worker(
            "Hossam Abid",
            "Painter",
            4.5,
            55,
            "2.1 km",
            150,
            120,
            6,
            false,
            "Interior and exterior painting, wall preparation and decorative finishes.",
            &["Interior Painting", "Exterior Painting", "Wall Repair"],
        ),
        worker(
            "Sami Trabelsi",
            "AC Technician",
            4.7,
            81,
            "2.6 km",
            190,
            210,
            8,
            true,
            "Installation, servicing and gas refill of split and central air conditioners.",
            &["AC Installation", "Gas Refill", "Maintenance"],
        ),
        worker(
            "Leila Ben Salah",
            "Cleaner",
            4.9,
            143,
            "3.0 km",
            90,
            410,
            5,
            true,
            "Deep cleaning for apartments and villas, including post-renovation cleanup.",
            &["Deep Cleaning", "Window Cleaning", "Move-out Cleaning"],
        ),
        worker(
            "Karim Jaziri",
            "Handyman",
            4.6,
            67,
            "3.4 km",
            120,
            190,
            10,
            false,
            "Small repairs around the house: shelves, doors, hinges and fixtures.",
            &["Door Repair", "Shelf Mounting", "Furniture Assembly"],
        ),
        worker(
            "Nabil Gharbi",
            "Locksmith",
            4.8,
            74,
            "4.1 km",
            160,
            230,
            15,
            true,
            "Emergency lockout service, lock replacement and security upgrades.",
            &["Lockout Service", "Lock Replacement", "Key Duplication"],
        ),
        worker(
            "Youssef Mansour",
            "Appliance Technician",
            4.4,
            39,
            "5.0 km",
            170,
            95,
            4,
            true,
            "Repair of washing machines, refrigerators, ovens and dishwashers.",
            &["Washing Machines", "Refrigerators", "Ovens"],
        ),
    ]
}

/// Filter workers by free-text query and an optional category.
pub fn filter_workers<'a>(
    workers: &'a [WorkerProfile],
    query: &str,
    category: Option<&Category>,
) -> Vec<&'a WorkerProfile> {
    workers
        .iter()
        .filter(|w| category.is_none_or(|c| w.profession.eq_ignore_ascii_case(c.profession)))
        .filter(|w| w.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_is_valid() {
        let workers = sample_workers();
        assert_eq!(workers.len(), 8);
        for w in &workers {
            assert!(!w.name.is_empty());
            assert!((0.0..=WorkerProfile::MAX_RATING).contains(&w.rating));
            assert!(!w.skills.is_empty());
        }
    }

    #[test]
    fn test_category_keys_are_unique() {
        let keys: BTreeSet<_> = CATEGORIES.iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), CATEGORIES.len());
        assert_eq!(Category::by_key("locksmith").map(|c| c.label), Some("Locksmiths"));
        assert!(Category::by_key("gardening").is_none());
    }

    #[test]
    fn test_filter_no_criteria_returns_all() {
        let workers = sample_workers();
        assert_eq!(filter_workers(&workers, "", None).len(), workers.len());
    }

    #[test]
    fn test_filter_by_category() {
        let workers = sample_workers();
        let plumbing = Category::by_key("plumbing");
        let found = filter_workers(&workers, "", plumbing);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Mohamed Hassan");
    }

    #[test]
    fn test_filter_by_query_and_category() {
        let workers = sample_workers();
        let electricity = Category::by_key("electricity");
        assert_eq!(filter_workers(&workers, "ahmed", electricity).len(), 1);
        assert!(filter_workers(&workers, "mohamed", electricity).is_empty());
    }

    #[test]
    fn test_filter_by_skill() {
        let workers = sample_workers();
        let found = filter_workers(&workers, "furniture", None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].profession, "Handyman");
    }
}
