//! Singleton challenge: a process-wide shopping cart registry
//!
//! One mutable, ordered list of products shared by everyone in the process.
//! `lazy_static` + `Mutex` replace the static-field-on-the-class idiom and
//! keep first creation and mutation safe under concurrent hosts.
//!
//! Run with: cargo run --bin singleton_cart

use lazy_static::lazy_static;
use serde::Serialize;
use std::sync::Mutex;

// =============================================================================
// Registry records
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Product {
    id: u32,
    name: String,
    cost: u32,
}

impl Product {
    fn new(id: u32, name: &str, cost: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            cost,
        }
    }
}

// =============================================================================
// The cart itself: plain struct, testable without the global
// =============================================================================

#[derive(Debug, Default)]
struct ShoppingCart {
    products: Vec<Product>,
}

impl ShoppingCart {
    fn new() -> Self {
        Self::default()
    }

    fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes the first product with the given id. Ids are not unique, so
    /// duplicates after the first survive. Returns `false` when no product
    /// matches; nothing is removed in that case.
    fn delete_by_id(&mut self, id: u32) -> bool {
        match self.products.iter().position(|product| product.id == id) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    fn products(&self) -> &[Product] {
        &self.products
    }
}

lazy_static! {
    static ref SHOPPING_CART: Mutex<ShoppingCart> = Mutex::new(ShoppingCart::new());
}

fn main() {
    // Both handles are the same cart; there is exactly one in the process.
    {
        let mut cart = SHOPPING_CART.lock().unwrap();
        cart.add_product(Product::new(2, "juguete", 30));
        cart.add_product(Product::new(3, "arepa", 5));
        cart.add_product(Product::new(1, "carrito", 20));
    }

    {
        let mut cart = SHOPPING_CART.lock().unwrap();
        cart.delete_by_id(2);
    }

    let cart = SHOPPING_CART.lock().unwrap();
    println!("=== Cart contents ===");
    match serde_json::to_string_pretty(cart.products()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize cart: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cart() -> ShoppingCart {
        let mut cart = ShoppingCart::new();
        cart.add_product(Product::new(1, "carrito", 20));
        cart.add_product(Product::new(2, "juguete", 30));
        cart.add_product(Product::new(3, "arepa", 5));
        cart
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut cart = sample_cart();
        assert!(cart.delete_by_id(2));

        let ids: Vec<u32> = cart.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn delete_of_absent_id_is_a_no_op() {
        let mut cart = sample_cart();
        assert!(!cart.delete_by_id(42));
        assert_eq!(cart.products().len(), 3);
    }

    #[test]
    fn duplicate_ids_delete_first_match_only() {
        let mut cart = ShoppingCart::new();
        cart.add_product(Product::new(7, "first", 10));
        cart.add_product(Product::new(7, "second", 11));

        assert!(cart.delete_by_id(7));
        assert_eq!(cart.products().len(), 1);
        assert_eq!(cart.products()[0].name, "second");
    }

    #[test]
    fn global_cart_is_shared_across_accesses() {
        {
            let mut cart = SHOPPING_CART.lock().unwrap();
            cart.add_product(Product::new(900, "shared", 1));
        }

        let cart = SHOPPING_CART.lock().unwrap();
        assert!(cart.products().iter().any(|p| p.id == 900));
    }
}
