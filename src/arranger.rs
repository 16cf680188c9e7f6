use crate::chunker::sequential_chunk;
use crate::error::ArrangeError;
use crate::grouper::random_group;
use crate::partition::partition;
use crate::random::{random_int, RandomSource, SeededRandom, ThreadRandom};
use crate::standardize::{standardize, IdGenerator, Item, UuidV4};

/// Every arrangement operation bound to one random source and one id generator
pub struct Arranger {
    rng: Box<dyn RandomSource>,
    ids: Box<dyn IdGenerator>,
}

/// Mutable builder for constructing an arranger
pub struct ArrangerBuilder {
    seed: Option<u64>,
    rng: Option<Box<dyn RandomSource>>,
    ids: Option<Box<dyn IdGenerator>>,
}

impl ArrangerBuilder {
    /// Create a new builder using thread randomness and UUIDv4 identifiers
    pub fn new() -> Self {
        Self {
            seed: None,
            rng: None,
            ids: None,
        }
    }

    /// Use a reproducible source seeded with `seed`
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom random source (takes precedence over `seed`)
    pub fn random_source(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Use a custom identifier generator
    pub fn id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    pub fn build(self) -> Arranger {
        let rng = match (self.rng, self.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => Box::new(SeededRandom::new(seed)) as Box<dyn RandomSource>,
            (None, None) => Box::new(ThreadRandom),
        };

        Arranger {
            rng,
            ids: self.ids.unwrap_or_else(|| Box::new(UuidV4)),
        }
    }
}

impl Default for ArrangerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Arranger {
    pub fn new() -> Self {
        ArrangerBuilder::new().build()
    }

    pub fn builder() -> ArrangerBuilder {
        ArrangerBuilder::new()
    }

    /// See [`random_int`]
    pub fn random_int(&mut self, minimum: i64, maximum: i64) -> Result<i64, ArrangeError> {
        random_int(&mut *self.rng, minimum, maximum)
    }

    /// See [`partition`]
    pub fn partition(
        &mut self,
        items_cnt: usize,
        groups_cnt: usize,
        min_per_group: usize,
        max_per_group: usize,
    ) -> Result<Vec<usize>, ArrangeError> {
        partition(
            &mut *self.rng,
            items_cnt,
            groups_cnt,
            min_per_group,
            max_per_group,
        )
    }

    /// See [`random_group`]
    pub fn random<'a, T>(
        &mut self,
        items: &'a [T],
        min_per_group: usize,
        max_per_group: usize,
    ) -> Result<Vec<Vec<&'a T>>, ArrangeError> {
        random_group(&mut *self.rng, items, min_per_group, max_per_group)
    }

    /// See [`sequential_chunk`]
    pub fn sequential<'a, T>(
        &mut self,
        items: &'a [T],
        min_per_group: usize,
        max_per_group: Option<usize>,
    ) -> Result<Vec<&'a [T]>, ArrangeError> {
        sequential_chunk(&mut *self.rng, items, min_per_group, max_per_group)
    }

    /// See [`standardize`]
    pub fn standardize(&mut self, items: &[Item]) -> Vec<Item> {
        standardize(items, &mut *self.ids)
    }
}

impl Default for Arranger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedRandom;
    use serde_json::json;

    #[test]
    fn test_seeded_arrangers_agree() {
        let items: Vec<u32> = (0..30).collect();
        let mut a = Arranger::builder().seed(42).build();
        let mut b = Arranger::builder().seed(42).build();

        assert_eq!(
            a.random(&items, 2, 6).unwrap(),
            b.random(&items, 2, 6).unwrap()
        );
        assert_eq!(a.random_int(0, 1000).unwrap(), b.random_int(0, 1000).unwrap());
    }

    #[test]
    fn test_custom_source_overrides_seed() {
        let mut arranger = Arranger::builder()
            .seed(1)
            .random_source(ScriptedRandom::new(&[0.0]))
            .build();

        assert_eq!(arranger.random_int(3, 9).unwrap(), 3);
        assert_eq!(arranger.partition(5, 2, 1, 4).unwrap(), vec![4, 1]);
    }

    #[test]
    fn test_sequential_through_arranger() {
        let items = vec!['a', 'b', 'c', 'd', 'e'];
        let mut arranger = Arranger::new();

        let chunks = arranger.sequential(&items, 2, None).unwrap();
        assert_eq!(chunks, vec![&['a', 'b'][..], &['c', 'd'][..], &['e'][..]]);
    }

    #[test]
    fn test_custom_id_generator() {
        let mut arranger = Arranger::builder()
            .id_generator(|| "fixed".to_string())
            .build();

        let items = vec![json!({"Name": "A"}).as_object().unwrap().clone()];
        let result = arranger.standardize(&items);
        assert_eq!(result[0]["uid"], json!("fixed"));
        assert_eq!(result[0]["gender"], json!("unknown"));
    }

    #[test]
    fn test_errors_propagate() {
        let mut arranger = Arranger::new();
        assert!(arranger.random_int(5, 3).is_err());
        assert!(arranger.partition(10, 3, 1, 2).is_err());
        assert!(arranger.sequential(&[1, 2], 0, None).is_err());
    }
}
