//! Factory Method, static-dispatch variant
//!
//! The discriminator is an enumerated tag parsed once at the string boundary;
//! after that, dispatch is a total `match` and an unknown tag cannot exist.
//!
//! Run with: cargo run --bin factory_method_static

use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Product contract and concrete products
// =============================================================================

trait BaseCar {
    fn name(&self) -> &'static str;
    fn year(&self) -> u16;
    fn show_cost(&self) -> String;
}

struct MastodonCar;

impl BaseCar for MastodonCar {
    fn name(&self) -> &'static str {
        "mastodon"
    }

    fn year(&self) -> u16 {
        2024
    }

    fn show_cost(&self) -> String {
        "Mastodon Car cost: 300,000 MXN".to_string()
    }
}

struct RhinoCar;

impl BaseCar for RhinoCar {
    fn name(&self) -> &'static str {
        "rhino"
    }

    fn year(&self) -> u16 {
        2023
    }

    fn show_cost(&self) -> String {
        "Rhino Car cost: 100,000 MXN".to_string()
    }
}

// =============================================================================
// Creators with an associated product type
// =============================================================================

trait CarFactory {
    type Output: BaseCar;

    fn make_car(&self) -> Self::Output;
}

struct MastodonCarFactory;

impl CarFactory for MastodonCarFactory {
    type Output = MastodonCar;

    fn make_car(&self) -> MastodonCar {
        MastodonCar
    }
}

struct RhinoCarFactory;

impl CarFactory for RhinoCarFactory {
    type Output = RhinoCar;

    fn make_car(&self) -> RhinoCar {
        RhinoCar
    }
}

// =============================================================================
// Enumerated tag: parsing is the single validation boundary
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CarTag {
    Mastodon,
    Rhino,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown car tag '{0}' (known tags: mastodon, rhino)")]
struct TagParseError(String);

impl FromStr for CarTag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mastodon" => Ok(CarTag::Mastodon),
            "rhino" => Ok(CarTag::Rhino),
            other => Err(TagParseError(other.to_string())),
        }
    }
}

fn app_factory<F: CarFactory>(factory: &F) {
    let car = factory.make_car();
    println!("{}", car.show_cost());
    println!("name: {}, year: {}", car.name(), car.year());
}

// Total match: adding a CarTag variant without a creator arm is a compile
// error, the runtime "undefined constructor" hole of the source is gone.
fn run_factory(tag: CarTag) {
    match tag {
        CarTag::Mastodon => app_factory(&MastodonCarFactory),
        CarTag::Rhino => app_factory(&RhinoCarFactory),
    }
}

fn main() {
    println!("=== Direct creators ===");
    app_factory(&MastodonCarFactory);
    app_factory(&RhinoCarFactory);

    println!("\n=== Tag-selected creators ===");
    for raw in ["mastodon", "rhino", "elephant"] {
        match raw.parse::<CarTag>() {
            Ok(tag) => run_factory(tag),
            Err(err) => println!("error: {err}"),
        }
    }
}
