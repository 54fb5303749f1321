//! Running per-brand rating totals.

use std::collections::HashMap;

/// Running sum and count of ratings for one brand.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CategoryStats {
    pub sum: f64,
    pub count: usize,
}

impl CategoryStats {
    /// Returns `None` when no rating has been recorded yet.
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Accumulator shared across every input source of a run.
///
/// Keys are brand names as given (callers trim them); case is preserved, so
/// `Apple` and `apple` are counted separately. Iteration follows the order in
/// which brands were first seen.
#[derive(Debug, Default)]
pub struct RatingTotals {
    index: HashMap<String, usize>,
    brands: Vec<(String, CategoryStats)>,
}

impl RatingTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one rating into the totals for `brand`.
    ///
    /// Returns `false` and leaves the totals untouched when the addition
    /// would make the brand's sum non-finite.
    pub fn record(&mut self, brand: &str, rating: f64) -> bool {
        let slot = self.index.get(brand).copied();
        let sum = slot.map_or(0.0, |i| self.brands[i].1.sum) + rating;
        if !sum.is_finite() {
            return false;
        }

        let i = match slot {
            Some(i) => i,
            None => {
                self.brands.push((brand.to_string(), CategoryStats::default()));
                self.index.insert(brand.to_string(), self.brands.len() - 1);
                self.brands.len() - 1
            }
        };
        let s = &mut self.brands[i].1;
        s.sum = sum;
        s.count += 1;
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryStats)> {
        self.brands.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[cfg(test)]
    pub(crate) fn get(&self, brand: &str) -> Option<&CategoryStats> {
        self.index.get(brand).map(|&i| &self.brands[i].1)
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.brands.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_with_zero_count() {
        assert_eq!(CategoryStats::default().average(), None);
    }

    #[test]
    fn test_average_normal_values() {
        let s = CategoryStats { sum: 9.0, count: 2 };
        assert_eq!(s.average(), Some(4.5));
    }

    #[test]
    fn test_record_merges_same_brand() {
        let mut totals = RatingTotals::new();
        assert!(totals.record("apple", 4.0));
        assert!(totals.record("apple", 5.0));

        let s = totals.get("apple").unwrap();
        assert_eq!(s.count, 2);
        assert_eq!(s.sum, 9.0);
        assert_eq!(totals.len(), 1);
    }

    #[test]
    fn test_record_is_case_sensitive() {
        let mut totals = RatingTotals::new();
        totals.record("Apple", 4.0);
        totals.record("apple", 5.0);

        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_iter_follows_first_seen_order() {
        let mut totals = RatingTotals::new();
        totals.record("xiaomi", 4.0);
        totals.record("apple", 5.0);
        totals.record("xiaomi", 3.0);
        totals.record("Apple", 1.0);

        let keys: Vec<_> = totals.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["xiaomi", "apple", "Apple"]);
    }

    #[test]
    fn test_record_rejects_overflowing_sum() {
        let mut totals = RatingTotals::new();
        assert!(totals.record("apple", 1e308));
        assert!(!totals.record("apple", 1e308));

        let s = totals.get("apple").unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.sum, 1e308);
    }

    #[test]
    fn test_rejected_first_rating_leaves_no_entry() {
        let mut totals = RatingTotals::new();
        assert!(!totals.record("apple", f64::INFINITY));
        assert!(totals.is_empty());
    }

    #[test]
    fn test_new_is_empty() {
        assert!(RatingTotals::new().is_empty());
    }
}
