//! Abstract Factory, static-dispatch variant
//!
//! Same car catalog as `abstract_factory_dyn`, but the factory trait uses
//! associated types so each family's concrete products are known at compile
//! time and no boxing happens.
//!
//! Run with: cargo run --bin abstract_factory_static

// =============================================================================
// Product contracts
// =============================================================================

trait MastodonCar {
    fn use_gps(&self) -> String;
}

trait RhinoCar {
    fn use_gps(&self) -> String;
}

// =============================================================================
// Concrete products
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
// Abstract factory with associated product types
// =============================================================================

trait CarFactory {
    type Mastodon: MastodonCar;
    type Rhino: RhinoCar;

    fn create_mastodon_car(&self) -> Self::Mastodon;
    fn create_rhino_car(&self) -> Self::Rhino;
}

struct SedanCarFactory;

impl CarFactory for SedanCarFactory {
    type Mastodon = MastodonSedanCar;
    type Rhino = RhinoSedanCar;

    fn create_mastodon_car(&self) -> MastodonSedanCar {
        MastodonSedanCar
    }

    fn create_rhino_car(&self) -> RhinoSedanCar {
        RhinoSedanCar
    }
}

struct HatchbackCarFactory;

impl CarFactory for HatchbackCarFactory {
    type Mastodon = MastodonHatchbackCar;
    type Rhino = RhinoHatchbackCar;

    fn create_mastodon_car(&self) -> MastodonHatchbackCar {
        MastodonHatchbackCar
    }

    fn create_rhino_car(&self) -> RhinoHatchbackCar {
        RhinoHatchbackCar
    }
}

// Monomorphized per family: one copy of this function per concrete factory.
fn app_car_factory<F: CarFactory>(factory: &F) {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family_lines<F: CarFactory>(factory: &F) -> (String, String) {
        (
            factory.create_mastodon_car().use_gps(),
            factory.create_rhino_car().use_gps(),
        )
    }

    #[test]
    fn sedan_family_is_consistent() {
        let (mastodon, rhino) = family_lines(&SedanCarFactory);
        assert_eq!(mastodon, "[SEDAN] Mastodon GPS");
        assert_eq!(rhino, "[SEDAN] Rhino GPS");
    }

    #[test]
    fn hatchback_family_is_consistent() {
        let (mastodon, rhino) = family_lines(&HatchbackCarFactory);
        assert_eq!(mastodon, "[HATCHBACK] Mastodon GPS");
        assert_eq!(rhino, "[HATCHBACK] Rhino GPS");
    }
}
