//! Abstract Factory, dynamic-dispatch variant
//! Car catalog: Mastodon and Rhino products, Sedan and Hatchback families.
//!
//! Run with: cargo run --bin abstract_factory_dyn

// =============================================================================
// Product contracts, one per catalog entry
// =============================================================================

// The capability trait replaces the base class whose methods threw
// "not implemented": a type without `use_gps` simply does not compile.
trait MastodonCar {
    fn use_gps(&self) -> String;
}

trait RhinoCar {
    fn use_gps(&self) -> String;
}

// =============================================================================
// Concrete products, one per catalog entry and family
// =============================================================================

struct MastodonSedanCar;

impl MastodonCar for MastodonSedanCar {
    fn use_gps(&self) -> String {
        "[SEDAN] Mastodon GPS".to_string()
    }
}

struct MastodonHatchbackCar;

impl MastodonCar for MastodonHatchbackCar {
    fn use_gps(&self) -> String {
        "[HATCHBACK] Mastodon GPS".to_string()
    }
}

struct RhinoSedanCar;

impl RhinoCar for RhinoSedanCar {
    fn use_gps(&self) -> String {
        "[SEDAN] Rhino GPS".to_string()
    }
}

struct RhinoHatchbackCar;

impl RhinoCar for RhinoHatchbackCar {
    fn use_gps(&self) -> String {
        "[HATCHBACK] Rhino GPS".to_string()
    }
}

// =============================================================================
// Abstract factory: one creation method per product in the catalog
// =============================================================================

trait CarFactory {
    fn create_mastodon_car(&self) -> Box<dyn MastodonCar>;
    fn create_rhino_car(&self) -> Box<dyn RhinoCar>;
}

struct SedanCarFactory;

impl CarFactory for SedanCarFactory {
    fn create_mastodon_car(&self) -> Box<dyn MastodonCar> {
        Box::new(MastodonSedanCar)
    }

    fn create_rhino_car(&self) -> Box<dyn RhinoCar> {
        Box::new(RhinoSedanCar)
    }
}

struct HatchbackCarFactory;

impl CarFactory for HatchbackCarFactory {
    fn create_mastodon_car(&self) -> Box<dyn MastodonCar> {
        Box::new(MastodonHatchbackCar)
    }

    fn create_rhino_car(&self) -> Box<dyn RhinoCar> {
        Box::new(RhinoHatchbackCar)
    }
}

// One driver handles every family through the trait object.
fn app_car_factory(factory: &dyn CarFactory) {
    let mastodon = factory.create_mastodon_car();
    let rhino = factory.create_rhino_car();

    println!("{}", mastodon.use_gps());
    println!("{}", rhino.use_gps());
}

fn main() {
    println!("=== Sedan family ===");
    app_car_factory(&SedanCarFactory);

    println!("\n=== Hatchback family ===");
    app_car_factory(&HatchbackCarFactory);

    // Trait objects also allow iterating heterogeneous factories.
    println!("\n=== All families ===");
    let factories: Vec<Box<dyn CarFactory>> =
        vec![Box::new(SedanCarFactory), Box::new(HatchbackCarFactory)];
    for factory in &factories {
        app_car_factory(factory.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sedan_factory_products_report_sedan() {
        let factory = SedanCarFactory;
        assert_eq!(factory.create_mastodon_car().use_gps(), "[SEDAN] Mastodon GPS");
        assert_eq!(factory.create_rhino_car().use_gps(), "[SEDAN] Rhino GPS");
    }

    #[test]
    fn hatchback_factory_products_report_hatchback() {
        let factory = HatchbackCarFactory;
        assert_eq!(
            factory.create_mastodon_car().use_gps(),
            "[HATCHBACK] Mastodon GPS"
        );
        assert_eq!(factory.create_rhino_car().use_gps(), "[HATCHBACK] Rhino GPS");
    }

    #[test]
    fn every_factory_family_is_consistent() {
        let factories: Vec<(Box<dyn CarFactory>, &str)> = vec![
            (Box::new(SedanCarFactory), "[SEDAN]"),
            (Box::new(HatchbackCarFactory), "[HATCHBACK]"),
        ];

        for (factory, family) in &factories {
            assert!(factory.create_mastodon_car().use_gps().starts_with(family));
            assert!(factory.create_rhino_car().use_gps().starts_with(family));
        }
    }
}
