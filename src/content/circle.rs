//! Circle registry.
//!
//! The set of circles is closed and known at startup.

use super::ContentError;
use std::fmt;

/// Identifier of a circle in the registry.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct CircleId(pub u32);

impl fmt::Display for CircleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Defines a topical grouping of posts.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circle {
    pub id: CircleId,
    pub name: String,
    pub description: String,
    pub member_count: u32,
    pub active_now_count: u32,
}

/// Catalog of circles content can be filed into.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircleRegistry {
    circles: Vec<Circle>,
}

impl CircleRegistry {
    /// Return the registry of circles shipped with the client.
    ///
    pub fn builtin() -> Self {
        let circle = |id, name: &str, description: &str, member_count, active_now_count| Circle {
            id: CircleId(id),
            name: name.to_string(),
            description: description.to_string(),
            member_count,
            active_now_count,
        };
        CircleRegistry {
            circles: vec![
                circle(1, "Anxiety & Peace", "Finding calm in the storm", 12_400, 847),
                circle(2, "Heartbreak Haven", "Healing broken hearts together", 18_200, 1_203),
                circle(3, "Night Thoughts", "3 AM confessions", 9_800, 654),
                circle(4, "New Beginnings", "Starting over, starting fresh", 15_600, 923),
                circle(5, "Lost & Found", "Finding your way", 11_300, 701),
                circle(6, "Self-Discovery", "Journey within", 14_700, 892),
            ],
        }
    }

    /// Return every circle in catalog order.
    ///
    pub fn all(&self) -> &[Circle] {
        &self.circles
    }

    /// Return the circle with the given id.
    ///
    pub fn lookup(&self, id: CircleId) -> Result<&Circle, ContentError> {
        self.circles
            .iter()
            .find(|circle| circle.id == id)
            .ok_or(ContentError::CircleNotFound { id: id.0 })
    }
}

impl Default for CircleRegistry {
    fn default() -> Self {
        CircleRegistry::builtin()
    }
}

/// Format an aggregate counter compactly, e.g. 12400 as "12.4k".
///
pub fn format_count(count: u32) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let tenths = count / 100;
    if tenths % 10 == 0 {
        format!("{}k", tenths / 10)
    } else {
        format!("{}.{}k", tenths / 10, tenths % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_has_six_circles() {
        let registry = CircleRegistry::builtin();
        assert_eq!(registry.all().len(), 6);
        assert_eq!(registry.all()[0].name, "Anxiety & Peace");
        assert_eq!(registry.all()[5].name, "Self-Discovery");
    }

    #[test]
    fn lookup_known_circle() {
        let registry = CircleRegistry::builtin();
        let circle = registry.lookup(CircleId(3)).unwrap();
        assert_eq!(circle.name, "Night Thoughts");
        assert_eq!(circle.active_now_count, 654);
    }

    #[test]
    fn lookup_unknown_circle() {
        let registry = CircleRegistry::builtin();
        assert_eq!(
            registry.lookup(CircleId(99)).unwrap_err(),
            ContentError::CircleNotFound { id: 99 }
        );
    }

    #[test]
    fn format_count_compacts_thousands() {
        assert_eq!(format_count(847), "847");
        assert_eq!(format_count(12_400), "12.4k");
        assert_eq!(format_count(18_000), "18k");
        assert_eq!(format_count(1_203), "1.2k");
    }
}
