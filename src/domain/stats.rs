use serde::Serialize;

use crate::domain::product::Product;

/// Placeholder shown when the catalog has no products.
pub const NO_BEST_SELLER: &str = "N/A";

/// Dashboard counters derived from the full product table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    /// Number of product rows.
    pub total_products: usize,
    /// Sum of `price * sales` across products, a revenue proxy.
    pub total_sales: i64,
    /// Always zero: there is no sales ledger to count from.
    pub todays_sales: i64,
    /// Name of the first product with the highest sales counter.
    pub best_seller: String,
}

impl CatalogStats {
    pub fn from_products(products: &[Product]) -> Self {
        let total_sales = products
            .iter()
            .map(|product| product.price.saturating_mul(product.sales))
            .fold(0i64, i64::saturating_add);

        let mut best: Option<&Product> = None;
        for product in products {
            match best {
                Some(current) if product.sales <= current.sales => {}
                _ => best = Some(product),
            }
        }

        Self {
            total_products: products.len(),
            total_sales,
            todays_sales: 0,
            best_seller: best
                .map(|product| product.name.clone())
                .unwrap_or_else(|| NO_BEST_SELLER.to_string()),
        }
    }
}
