//! Mood pulse: the distribution of moods across visible posts.

use super::{Mood, Post};
use std::collections::HashMap;

/// Share of a single mood within the pulse.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoodShare {
    pub mood: Mood,
    pub count: usize,
    pub percentage: u8,
}

/// Defines the mood distribution of a set of posts.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoodPulse {
    shares: Vec<MoodShare>,
    total: usize,
}

impl MoodPulse {
    /// Build the pulse for the given posts. Percentages are rounded with the
    /// largest-remainder method so a non-empty pulse sums to exactly 100.
    ///
    pub fn from_posts<'a, I>(posts: I) -> MoodPulse
    where
        I: IntoIterator<Item = &'a Post>,
    {
        let mut counts: HashMap<Mood, usize> = HashMap::new();
        for post in posts {
            *counts.entry(post.mood()).or_insert(0) += 1;
        }
        let total: usize = counts.values().sum();
        if total == 0 {
            return MoodPulse::default();
        }

        // (mood, count, floor percentage, remainder numerator)
        let mut rows: Vec<(Mood, usize, usize, usize)> = counts
            .into_iter()
            .map(|(mood, count)| {
                let scaled = count * 100;
                (mood, count, scaled / total, scaled % total)
            })
            .collect();

        let assigned: usize = rows.iter().map(|row| row.2).sum();
        let mut leftover = 100 - assigned;
        rows.sort_by(|a, b| b.3.cmp(&a.3).then(a.0.cmp(&b.0)));
        for row in rows.iter_mut() {
            if leftover == 0 {
                break;
            }
            row.2 += 1;
            leftover -= 1;
        }

        rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        MoodPulse {
            shares: rows
                .into_iter()
                .map(|(mood, count, percentage, _)| MoodShare {
                    mood,
                    count,
                    percentage: percentage as u8,
                })
                .collect(),
            total,
        }
    }

    /// Return the shares ordered by count, ties in taxonomy order.
    ///
    pub fn shares(&self) -> &[MoodShare] {
        &self.shares
    }

    /// Return the number of posts the pulse was built from.
    ///
    pub fn total(&self) -> usize {
        self.total
    }

    /// Return the most common mood, if any.
    ///
    pub fn dominant(&self) -> Option<Mood> {
        self.shares.first().map(|share| share.mood)
    }
}
