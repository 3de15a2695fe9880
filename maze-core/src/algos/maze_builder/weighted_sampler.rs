use rand::Rng;
use tracing::event;

/// Picks items with a probability proportional to their integer weight.
///
/// Selection walks a cumulative table: a uniform draw in `0..total` lands on
/// the first item whose running total exceeds it. When every weight is zero
/// the first item is always returned.
pub(crate) struct WeightedSampler<'a, T> {
    items: &'a [T],
    cumulative: Vec<u64>,
    total: u64,
}

impl<'a, T> WeightedSampler<'a, T> {
    /// Returns `None` only when `items` is empty.
    pub fn new(items: &'a [T], weight_of: impl Fn(&T) -> u32) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let mut total = 0_u64;
        let cumulative = items
            .iter()
            .map(|item| {
                total += u64::from(weight_of(item));
                total
            })
            .collect::<Vec<_>>();

        if total == 0 {
            event!(
                tracing::Level::WARN,
                "All {} weights are zero, falling back to the first item",
                items.len()
            );
        }

        Some(WeightedSampler {
            items,
            cumulative,
            total,
        })
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> &'a T {
        if self.total == 0 {
            return &self.items[0];
        }

        let draw = rng.random_range(0..self.total);
        let idx = self.cumulative.partition_point(|&running| running <= draw);

        &self.items[idx]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algos::RngHandler;

    #[test]
    fn test_empty_items_have_no_sampler() {
        let items: [u32; 0] = [];
        assert!(WeightedSampler::new(&items, |weight| *weight).is_none());
    }

    #[test]
    fn test_zero_weights_fall_back_to_first() {
        let items = [("a", 0), ("b", 0), ("c", 0)];
        let sampler = WeightedSampler::new(&items, |(_, weight)| *weight).unwrap();
        let mut rng = RngHandler::rng();

        assert_eq!(sampler.total(), 0);
        for _ in 0..100 {
            assert_eq!(sampler.sample(&mut rng).0, "a");
        }
    }

    #[test]
    fn test_zero_weight_items_are_never_picked() {
        let items = [("a", 0), ("b", 3), ("c", 0), ("d", 1), ("e", 0)];
        let sampler = WeightedSampler::new(&items, |(_, weight)| *weight).unwrap();
        let mut rng = RngHandler::rng();

        for _ in 0..1_000 {
            let (name, _) = sampler.sample(&mut rng);
            assert!(*name == "b" || *name == "d", "picked {}", name);
        }
    }

    #[test]
    fn test_single_weighted_item_always_wins() {
        let items = [("a", 100), ("b", 0), ("c", 0), ("d", 0)];
        let sampler = WeightedSampler::new(&items, |(_, weight)| *weight).unwrap();
        let mut rng = RngHandler::rng();

        for _ in 0..1_000 {
            assert_eq!(sampler.sample(&mut rng).0, "a");
        }
    }

    #[test]
    fn test_frequencies_follow_weights() {
        let items = [50_u32, 15, 15, 20];
        let sampler = WeightedSampler::new(&items, |weight| *weight).unwrap();
        let mut rng = RngHandler::rng();

        let draws = 20_000;
        let mut counts = [0_u32; 4];
        for _ in 0..draws {
            let picked = sampler.sample(&mut rng);
            let idx = items.iter().position(|item| std::ptr::eq(item, picked)).unwrap();
            counts[idx] += 1;
        }

        for (weight, count) in items.iter().zip(counts) {
            let expected = draws as f64 * *weight as f64 / 100.0;
            let deviation = (count as f64 - expected).abs() / draws as f64;
            assert!(
                deviation < 0.02,
                "weight {} drawn {} times, expected about {}",
                weight,
                count,
                expected
            );
        }
    }
}
