use serde::{Deserialize, Serialize};

use wms_core::DomainResult;

use crate::sku::{Sku, SkuSize, StandardSku};

/// A multi-item order: one entry per requested unit, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    requests: Vec<String>,
}

impl Order {
    pub fn new<I, S>(requests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            requests: requests.into_iter().map(|r| r.as_ref().trim().to_string()).collect(),
        }
    }

    /// Split comma-separated order text (`"A1, C5,B3"`).
    pub fn parse(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Requests sorted by size, largest first; equal sizes keep input order.
    ///
    /// Any entry that is not `<letter><size>` fails the whole order.
    pub fn processing_order(&self) -> DomainResult<Vec<Sku>> {
        let mut keyed = self
            .requests
            .iter()
            .map(|raw| -> DomainResult<(SkuSize, Sku)> {
                let parsed = StandardSku::parse(raw)?;
                Ok((parsed.size().clone(), Sku::new(raw)?))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        // `sort_by` is stable.
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(keyed.into_iter().map(|(_, sku)| sku).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wms_core::DomainError;

    fn order_of(o: &Order) -> Vec<String> {
        o.processing_order().unwrap().into_iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_trims_entries() {
        let o = Order::parse(" A1 ,C5,  B3");
        assert_eq!(o.requests(), ["A1", "C5", "B3"]);
    }

    #[test]
    fn largest_size_first() {
        assert_eq!(order_of(&Order::parse("A1,C5,B3")), vec!["C5", "B3", "A1"]);
    }

    #[test]
    fn equal_sizes_keep_input_order() {
        assert_eq!(order_of(&Order::parse("B2,A2,C9,A2,Z2")), vec!["C9", "B2", "A2", "A2", "Z2"]);
    }

    #[test]
    fn sizes_wider_than_u64_sort_first() {
        assert_eq!(
            order_of(&Order::parse("A1, B99999999999, C18446744073709551616, D5")),
            vec!["C18446744073709551616", "B99999999999", "D5", "A1"]
        );
    }

    #[test]
    fn one_bad_entry_fails_everything() {
        let err = Order::parse("A1, X, B3").processing_order().unwrap_err();
        assert!(matches!(err, DomainError::MalformedSku { ref sku, .. } if sku == "X"));
    }

    #[test]
    fn blank_entry_is_malformed() {
        assert!(Order::parse("A1,,B3").processing_order().is_err());
        assert!(Order::parse("").processing_order().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the processing order is a permutation sorted by size
        /// descending, and equal sizes keep their relative input positions.
        #[test]
        fn processing_order_is_stable_descending(
            items in prop::collection::vec((prop::sample::select(vec!['A', 'B', 'C']), 0u32..6), 1..30)
        ) {
            let raw: Vec<String> = items.iter().map(|(f, s)| format!("{f}{s}")).collect();
            let order = Order::new(&raw);
            let processed = order.processing_order().unwrap();

            prop_assert_eq!(processed.len(), raw.len());

            let sizes: Vec<SkuSize> = processed.iter().map(|s| s.standard().unwrap().size().clone()).collect();
            prop_assert!(sizes.windows(2).all(|w| w[0] >= w[1]));

            for size in (0u64..6).map(SkuSize::from) {
                let input: Vec<&str> = raw
                    .iter()
                    .filter(|r| StandardSku::parse(r).unwrap().size() == &size)
                    .map(String::as_str)
                    .collect();
                let output: Vec<&str> = processed
                    .iter()
                    .filter(|s| s.standard().unwrap().size() == &size)
                    .map(Sku::as_str)
                    .collect();
                prop_assert_eq!(input, output);
            }
        }
    }
}
