use rust_decimal::Decimal;

/// The part of the host basket this method looks at.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Basket {
    /// Sum of all item prices in the basket.
    pub item_sum: Decimal,
}

impl Basket {
    /// Creates a basket with the given item sum.
    pub fn new(item_sum: Decimal) -> Self {
        Self { item_sum }
    }
}
