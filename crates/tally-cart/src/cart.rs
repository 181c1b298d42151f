use serde::{Deserialize, Serialize};
use tally_types::Item;
use tracing::debug;

/// Sum `price * quantity` over `items`, left to right from `0.0`.
///
/// ```
/// use tally_cart::calculate_total;
/// use tally_types::Item;
///
/// let items = [Item::new(10.0, 2.0), Item::new(0.5, 3.0)];
/// assert_eq!(calculate_total(&items), 21.5);
/// assert_eq!(calculate_total(std::iter::empty()), 0.0);
/// ```
pub fn calculate_total<'a, I>(items: I) -> f64
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut count = 0usize;
    let total = items.into_iter().fold(0.0, |sum, item| {
        count += 1;
        sum + item.line_total()
    });
    debug!(items = count, total, "cart total computed");
    total
}

/// An ordered list of cart lines.
///
/// Serializes as a bare JSON array of items.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line totals.
    pub fn total(&self) -> f64 {
        calculate_total(&self.items)
    }

    /// Sum of quantities, ignoring price.
    pub fn total_quantity(&self) -> f64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

impl From<Vec<Item>> for Cart {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl FromIterator<Item> for Cart {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Item> for Cart {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_total_is_zero() {
        assert_eq!(calculate_total(std::iter::empty()), 0.0);
        assert_eq!(Cart::new().total(), 0.0);
    }

    #[test]
    fn total_sums_products() {
        let items = vec![
            Item::new(12.5, 2.0),
            Item::new(3.0, 1.0),
            Item::new(0.25, 4.0),
        ];
        assert_eq!(calculate_total(&items), 29.0);
    }

    #[test]
    fn total_accepts_iterators() {
        let items = [Item::new(1.0, 1.0), Item::new(100.0, 0.0), Item::new(2.0, 2.0)];
        let priced = items.iter().filter(|i| i.quantity > 0.0);
        assert_eq!(calculate_total(priced), 5.0);
    }

    #[test]
    fn cart_push_and_total() {
        let mut cart = Cart::new();
        assert!(cart.is_empty());
        cart.push(Item::new(4.0, 2.0));
        cart.push(Item::new(1.5, 2.0));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 11.0);
        assert_eq!(cart.total_quantity(), 4.0);
    }

    #[test]
    fn cart_collects_and_extends() {
        let mut cart: Cart = vec![Item::new(1.0, 1.0)].into_iter().collect();
        cart.extend([Item::new(2.0, 3.0)]);
        assert_eq!(cart.items(), &[Item::new(1.0, 1.0), Item::new(2.0, 3.0)]);
        assert_eq!((&cart).into_iter().count(), 2);
    }

    #[test]
    fn cart_is_a_json_array() {
        let cart: Cart =
            serde_json::from_str(r#"[{"price": 2, "quantity": 3}, {"price": 0.5, "quantity": 2}]"#)
                .unwrap();
        assert_eq!(cart.total(), 7.0);
        let json = serde_json::to_string(&Cart::from(vec![Item::new(1.0, 2.0)])).unwrap();
        assert_eq!(json, r#"[{"price":1.0,"quantity":2.0}]"#);
    }

    proptest! {
        // Integer-valued lines keep the float sum exact.
        #[test]
        fn total_matches_sum_of_products(
            lines in prop::collection::vec((0u32..10_000, 0u32..100), 0..50)
        ) {
            let items: Vec<Item> = lines
                .iter()
                .map(|&(p, q)| Item::new(p as f64, q as f64))
                .collect();
            let expected: u64 = lines.iter().map(|&(p, q)| p as u64 * q as u64).sum();
            prop_assert_eq!(calculate_total(&items), expected as f64);
        }

        #[test]
        fn total_is_order_independent_for_integers(
            lines in prop::collection::vec((0u32..1_000, 0u32..100), 0..30)
        ) {
            let mut items: Vec<Item> = lines
                .iter()
                .map(|&(p, q)| Item::new(p as f64, q as f64))
                .collect();
            let forward = calculate_total(&items);
            items.reverse();
            prop_assert_eq!(calculate_total(&items), forward);
        }
    }
}
