use std::collections::HashSet;
use std::str::FromStr;

use rand::Rng;

use crate::error::SimError;

/// A multiset of colored balls. Drawing removes balls from the hat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hat {
    contents: Vec<String>,
}

impl Hat {
    /// Build a hat from `(color, count)` pairs, keeping their order.
    pub fn new<I, S>(balls: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut contents = Vec::new();
        for (color, count) in balls {
            let color = color.into();
            contents.extend(std::iter::repeat(color).take(count));
        }
        Self { contents }
    }

    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn count(&self, color: &str) -> usize {
        self.contents.iter().filter(|c| *c == color).count()
    }

    /// Draw `n` balls using the thread-local generator.
    pub fn draw(&mut self, n: usize) -> Vec<String> {
        self.draw_with(n, &mut rand::rng())
    }

    /// Draw `n` balls without replacement.
    ///
    /// Asking for at least as many balls as the hat holds empties it and
    /// returns everything in hat order. Otherwise a uniform subset of size `n`
    /// is removed and returned in draw order.
    pub fn draw_with<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Vec<String> {
        if n >= self.contents.len() {
            return std::mem::take(&mut self.contents);
        }

        let picked = rand::seq::index::sample(rng, self.contents.len(), n).into_vec();
        let drawn: Vec<String> = picked.iter().map(|&i| self.contents[i].clone()).collect();

        let mut doomed = picked;
        doomed.sort_unstable_by(|a, b| b.cmp(a));
        for i in doomed {
            self.contents.remove(i);
        }
        drawn
    }
}

impl FromStr for Hat {
    type Err = SimError;

    /// Parse `red=3,blue=2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(parse_counts(s)?))
    }
}

/// Parse comma-separated `color=count` pairs. Colors must be unique.
pub fn parse_counts(s: &str) -> Result<Vec<(String, usize)>, SimError> {
    let invalid = || SimError::InvalidSpec(s.to_string());
    let mut seen = HashSet::new();
    let mut counts = Vec::new();

    for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (color, count) = pair.split_once('=').ok_or_else(invalid)?;
        let color = color.trim();
        if color.is_empty() {
            return Err(invalid());
        }
        let count: usize = count.trim().parse().map_err(|_| invalid())?;
        if !seen.insert(color.to_string()) {
            return Err(SimError::DuplicateColor(color.to_string()));
        }
        counts.push((color.to_string(), count));
    }

    if counts.is_empty() {
        return Err(invalid());
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_new_expands_counts_in_order() {
        let hat = Hat::new([("red", 2), ("blue", 1), ("green", 0)]);
        assert_eq!(hat.contents(), ["red", "red", "blue"]);
        assert_eq!(hat.count("red"), 2);
        assert_eq!(hat.count("green"), 0);
    }

    #[test]
    fn test_draw_all_empties_hat() {
        let mut hat = Hat::new([("red", 3), ("blue", 2)]);
        let drawn = hat.draw(5);
        assert_eq!(drawn, ["red", "red", "red", "blue", "blue"]);
        assert!(hat.is_empty());

        let mut hat = Hat::new([("red", 1)]);
        assert_eq!(hat.draw(10), ["red"]);
        assert!(hat.draw(1).is_empty());
    }

    #[test]
    fn test_draw_removes_exactly_drawn_balls() {
        let mut hat = Hat::new([("blue", 3), ("red", 2), ("green", 6)]);
        let mut rng = create_rng(Some(42));
        let drawn = hat.draw_with(4, &mut rng);

        assert_eq!(drawn.len(), 4);
        assert_eq!(hat.len(), 7);
        let mut all = drawn.clone();
        all.extend(hat.contents().iter().cloned());
        let original = Hat::new([("blue", 3), ("red", 2), ("green", 6)]);
        assert_eq!(sorted(all), sorted(original.contents().to_vec()));
    }

    #[test]
    fn test_draw_zero() {
        let mut hat = Hat::new([("red", 2)]);
        let mut rng = create_rng(Some(1));
        assert!(hat.draw_with(0, &mut rng).is_empty());
        assert_eq!(hat.len(), 2);
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let base = Hat::new([("a", 5), ("b", 5), ("c", 5)]);
        let mut h1 = base.clone();
        let mut h2 = base.clone();
        let d1 = h1.draw_with(6, &mut create_rng(Some(99)));
        let d2 = h2.draw_with(6, &mut create_rng(Some(99)));
        assert_eq!(d1, d2);
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_parse_hat() {
        let hat: Hat = "red=3, blue=2,green=6".parse().unwrap();
        assert_eq!(hat.len(), 11);
        assert_eq!(hat.count("green"), 6);
    }

    #[test]
    fn test_parse_counts_errors() {
        assert!(matches!(parse_counts(""), Err(SimError::InvalidSpec(_))));
        assert!(matches!(parse_counts("red"), Err(SimError::InvalidSpec(_))));
        assert!(matches!(parse_counts("red=x"), Err(SimError::InvalidSpec(_))));
        assert!(matches!(parse_counts("=3"), Err(SimError::InvalidSpec(_))));
        assert!(matches!(parse_counts("red=-1"), Err(SimError::InvalidSpec(_))));
        assert!(matches!(
            parse_counts("red=1,red=2"),
            Err(SimError::DuplicateColor(c)) if c == "red"
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn draw_conserves_balls(
            seed in 0_u64..10_000,
            counts in proptest::collection::vec(0_usize..6, 1..5),
            n in 0_usize..25,
        ) {
            let hat = Hat::new(counts.iter().enumerate().map(|(i, c)| (format!("c{i}"), *c)));
            let total = hat.len();
            let mut working = hat.clone();
            let drawn = working.draw_with(n, &mut create_rng(Some(seed)));

            prop_assert_eq!(drawn.len(), n.min(total));
            prop_assert_eq!(working.len(), total - drawn.len());

            let mut combined = drawn;
            combined.extend(working.contents().iter().cloned());
            combined.sort();
            let mut original = hat.contents().to_vec();
            original.sort();
            prop_assert_eq!(combined, original);
        }
    }
}
