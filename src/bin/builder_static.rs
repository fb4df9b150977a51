//! Builder, static-dispatch variant
//!
//! The production-line trait returns `&mut Self` from every setter, so it is
//! not object-safe; the director is generic over the line instead of holding
//! a `dyn` box. Because the director cannot be constructed without a line,
//! the "production line hasn't been set" failure of the dynamic variant is
//! impossible here by construction.
//!
//! Run with: cargo run --bin builder_static

use serde::Serialize;

/* ============================================================
 * Product
 * ============================================================
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Color {
    Red,
    Black,
    Gray,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum CarCatalog {
    Mastodon,
    Rhino,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Car {
    brand: CarCatalog,
    model: String,
    edition: String,
    air_bags: u32,
    color: Color,
}

impl Car {
    fn new(brand: CarCatalog) -> Self {
        Self {
            brand,
            model: String::new(),
            edition: String::new(),
            air_bags: 2,
            color: Color::Black,
        }
    }
}

/* ============================================================
 * Builder contract
 * ============================================================
 */

trait CarProductionLine: Sized {
    fn set_air_bags(&mut self, count: u32) -> &mut Self;
    fn set_color(&mut self, color: Color) -> &mut Self;
    fn set_edition(&mut self, edition: &str) -> &mut Self;
    fn reset_production_line(&mut self);
    fn build(&mut self) -> Car;
}

struct SedanProductionLine {
    internal_model: CarCatalog,
    car: Car,
}

impl SedanProductionLine {
    fn new(internal_model: CarCatalog) -> Self {
        Self {
            internal_model,
            car: Car::new(internal_model),
        }
    }
}

impl CarProductionLine for SedanProductionLine {
    fn set_air_bags(&mut self, count: u32) -> &mut Self {
        self.car.air_bags = count;
        self
    }

    fn set_color(&mut self, color: Color) -> &mut Self {
        self.car.color = color;
        self
    }

    fn set_edition(&mut self, edition: &str) -> &mut Self {
        self.car.edition = edition.to_string();
        self
    }

    fn reset_production_line(&mut self) {
        self.car = Car::new(self.internal_model);
    }

    fn build(&mut self) -> Car {
        self.car.model = "sedan".to_string();
        std::mem::replace(&mut self.car, Car::new(self.internal_model))
    }
}

/* ============================================================
 * Director, generic over the production line
 * ============================================================
 */

struct Director<L: CarProductionLine> {
    production_line: L,
}

impl<L: CarProductionLine> Director<L> {
    fn new(production_line: L) -> Self {
        Self { production_line }
    }

    fn construct_cvt_edition(&mut self) {
        self.production_line
            .set_air_bags(4)
            .set_color(Color::Blue)
            .set_edition("CVT");
    }

    fn construct_signature_edition(&mut self) {
        self.production_line
            .set_air_bags(8)
            .set_color(Color::Red)
            .set_edition("Signature");
    }

    fn build(&mut self) -> Car {
        self.production_line.build()
    }
}

fn main() {
    let mut director = Director::new(SedanProductionLine::new(CarCatalog::Mastodon));

    println!("=== Mastodon sedan, CVT edition ===");
    director.construct_cvt_edition();
    let cvt = director.build();
    println!("{}", serde_json::to_string_pretty(&cvt).unwrap());

    println!("\n=== Mastodon sedan, Signature edition ===");
    director.construct_signature_edition();
    let signature = director.build();
    println!("{}", serde_json::to_string_pretty(&signature).unwrap());

    // No `set_production_line` step exists to forget: a Director is born
    // with its line.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_deterministic() {
        let mut director = Director::new(SedanProductionLine::new(CarCatalog::Mastodon));

        director.construct_cvt_edition();
        let cvt = director.build();
        assert_eq!((cvt.air_bags, cvt.color), (4, Color::Blue));
        assert_eq!(cvt.edition, "CVT");

        director.construct_signature_edition();
        let signature = director.build();
        assert_eq!((signature.air_bags, signature.color), (8, Color::Red));
        assert_eq!(signature.edition, "Signature");
    }

    #[test]
    fn build_starts_a_fresh_car() {
        let mut line = SedanProductionLine::new(CarCatalog::Rhino);
        line.set_air_bags(6).set_edition("Limited");
        let first = line.build();
        let second = line.build();

        assert_eq!(first.air_bags, 6);
        assert_eq!(first.edition, "Limited");
        assert_eq!(second.air_bags, 2);
        assert_eq!(second.edition, "");
        assert_eq!(second.brand, CarCatalog::Rhino);
    }

    #[test]
    fn chained_setters_accumulate_on_one_car() {
        let mut line = SedanProductionLine::new(CarCatalog::Mastodon);
        line.set_air_bags(4).set_color(Color::Gray).set_edition("Base");
        let car = line.build();

        assert_eq!(car.air_bags, 4);
        assert_eq!(car.color, Color::Gray);
        assert_eq!(car.edition, "Base");
        assert_eq!(car.model, "sedan");
    }

    #[test]
    fn reset_discards_pending_configuration() {
        let mut line = SedanProductionLine::new(CarCatalog::Mastodon);
        line.set_air_bags(8);
        line.reset_production_line();
        assert_eq!(line.build().air_bags, 2);
    }
}
