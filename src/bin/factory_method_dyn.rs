//! Factory Method, dynamic-dispatch variant
//!
//! Each concrete creator returns one concrete car behind `Box<dyn BaseCar>`.
//! The string-tag lookup that picked a creator class at runtime is kept, but
//! an unrecognized tag is a descriptive validation error instead of a crash
//! on an absent constructor.
//!
//! Run with: cargo run --bin factory_method_dyn

use colored::Colorize;
use thiserror::Error;

// =============================================================================
// Product contract and concrete products
// =============================================================================

trait BaseCar {
    fn name(&self) -> &str;
    fn year(&self) -> u16;
    fn show_cost(&self) -> String;
}

struct MastodonCar {
    name: String,
    year: u16,
}

impl MastodonCar {
    fn new() -> Self {
        Self {
            name: "mastodon".to_string(),
            year: 2024,
        }
    }
}

impl BaseCar for MastodonCar {
    fn name(&self) -> &str {
        &self.name
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn show_cost(&self) -> String {
        "Mastodon Car cost: 300,000 MXN".to_string()
    }
}

struct RhinoCar {
    name: String,
    year: u16,
}

impl RhinoCar {
    fn new() -> Self {
        Self {
            name: "rhino".to_string(),
            year: 2023,
        }
    }
}

impl BaseCar for RhinoCar {
    fn name(&self) -> &str {
        &self.name
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn show_cost(&self) -> String {
        "Rhino Car cost: 100,000 MXN".to_string()
    }
}

// =============================================================================
// Creators
// =============================================================================

trait CarFactory: std::fmt::Debug {
    fn make_car(&self) -> Box<dyn BaseCar>;
}

#[derive(Debug)]
struct MastodonCarFactory;

impl CarFactory for MastodonCarFactory {
    fn make_car(&self) -> Box<dyn BaseCar> {
        Box::new(MastodonCar::new())
    }
}

#[derive(Debug)]
struct RhinoCarFactory;

impl CarFactory for RhinoCarFactory {
    fn make_car(&self) -> Box<dyn BaseCar> {
        Box::new(RhinoCar::new())
    }
}

// =============================================================================
// Tag lookup: unknown tags fail loudly, not with an unusable object
// =============================================================================

const KNOWN_TAGS: &[&str] = &["mastodon", "rhino"];

#[derive(Debug, Error, PartialEq, Eq)]
enum FactoryError {
    #[error("unknown car factory tag '{tag}' (known tags: mastodon, rhino)")]
    UnknownTag { tag: String },
}

fn create_factory(tag: &str) -> Result<Box<dyn CarFactory>, FactoryError> {
    match tag {
        "mastodon" => Ok(Box::new(MastodonCarFactory)),
        "rhino" => Ok(Box::new(RhinoCarFactory)),
        other => Err(FactoryError::UnknownTag {
            tag: other.to_string(),
        }),
    }
}

fn app_factory(factory: &dyn CarFactory) {
    let car = factory.make_car();
    println!("{}", car.show_cost());
    println!("name: {}, year: {}", car.name(), car.year());
}

fn main() {
    println!("=== Direct creators ===");
    app_factory(&MastodonCarFactory);
    app_factory(&RhinoCarFactory);

    println!("\n=== Tag-selected creators ===");
    for &tag in KNOWN_TAGS {
        match create_factory(tag) {
            Ok(factory) => app_factory(factory.as_ref()),
            Err(err) => println!("{} {err}", "error:".red().bold()),
        }
    }

    println!("\n=== Unknown tag ===");
    if let Err(err) = create_factory("elephant") {
        println!("{} {err}", "error:".red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creators_return_their_own_variant() {
        assert_eq!(MastodonCarFactory.make_car().name(), "mastodon");
        assert_eq!(RhinoCarFactory.make_car().name(), "rhino");
    }

    #[test]
    fn known_tags_resolve_to_matching_factories() {
        let mastodon = create_factory("mastodon").unwrap().make_car();
        assert_eq!(mastodon.name(), "mastodon");
        assert_eq!(mastodon.year(), 2024);

        let rhino = create_factory("rhino").unwrap().make_car();
        assert_eq!(rhino.name(), "rhino");
        assert_eq!(rhino.year(), 2023);
    }

    #[test]
    fn unknown_tag_is_a_descriptive_error() {
        let err = create_factory("elephant").unwrap_err();
        assert_eq!(
            err,
            FactoryError::UnknownTag {
                tag: "elephant".to_string()
            }
        );
        assert!(err.to_string().contains("elephant"));
        assert!(err.to_string().contains("mastodon"));
    }

    #[test]
    fn costs_match_the_catalog() {
        assert!(MastodonCar::new().show_cost().contains("300,000"));
        assert!(RhinoCar::new().show_cost().contains("100,000"));
    }
}
