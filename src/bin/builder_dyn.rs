//! Builder, dynamic-dispatch variant
//!
//! A production line accumulates a car's configuration through chained
//! setters; `build` freezes the configuration and resets the line for the
//! next car. A director drives any line through `&mut dyn` with two named
//! preset sequences.
//!
//! Run with: cargo run --bin builder_dyn

use colored::Colorize;
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Product
// =============================================================================

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

// =============================================================================
// Builder contract and concrete production lines
// =============================================================================

trait CarProductionLine {
    fn set_air_bags(&mut self, count: u32) -> &mut dyn CarProductionLine;
    fn set_color(&mut self, color: Color) -> &mut dyn CarProductionLine;
    fn set_edition(&mut self, edition: &str) -> &mut dyn CarProductionLine;
    fn reset_production_line(&mut self);

    /// Freezes the accumulated configuration into a car and leaves the line
    /// ready to accumulate a fresh, independent product.
    fn build(&mut self) -> Car;
}

struct SedanProductionLine {
    internal_model: CarCatalog,
    car: Car,
}

impl SedanProductionLine {
    fn new(internal_model: CarCatalog) -> Self {
        // Constructor-time initialization: there is no window where a setter
        // could touch an absent car.
        Self {
            internal_model,
            car: Car::new(internal_model),
        }
    }
}

impl CarProductionLine for SedanProductionLine {
    fn set_air_bags(&mut self, count: u32) -> &mut dyn CarProductionLine {
        self.car.air_bags = count;
        self
    }

    fn set_color(&mut self, color: Color) -> &mut dyn CarProductionLine {
        self.car.color = color;
        self
    }

    fn set_edition(&mut self, edition: &str) -> &mut dyn CarProductionLine {
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

struct HatchbackProductionLine {
    internal_model: CarCatalog,
    car: Car,
}

impl HatchbackProductionLine {
    fn new(internal_model: CarCatalog) -> Self {
        Self {
            internal_model,
            car: Car::new(internal_model),
        }
    }
}

impl CarProductionLine for HatchbackProductionLine {
    fn set_air_bags(&mut self, count: u32) -> &mut dyn CarProductionLine {
        self.car.air_bags = count;
        self
    }

    fn set_color(&mut self, color: Color) -> &mut dyn CarProductionLine {
        self.car.color = color;
        self
    }

    fn set_edition(&mut self, edition: &str) -> &mut dyn CarProductionLine {
        self.car.edition = edition.to_string();
        self
    }

    fn reset_production_line(&mut self) {
        self.car = Car::new(self.internal_model);
    }

    fn build(&mut self) -> Car {
        self.car.model = "hatchback".to_string();
        std::mem::replace(&mut self.car, Car::new(self.internal_model))
    }
}

// =============================================================================
// Director: fixed call sequences for named presets
// =============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
enum DirectorError {
    #[error("production line hasn't been set")]
    NoProductionLine,
}

#[derive(Default)]
struct Director {
    production_line: Option<Box<dyn CarProductionLine>>,
}

impl Director {
    fn new() -> Self {
        Self::default()
    }

    fn set_production_line(&mut self, production_line: Box<dyn CarProductionLine>) {
        self.production_line = Some(production_line);
    }

    fn construct_cvt_edition(&mut self) -> Result<(), DirectorError> {
        let line = self.line_mut()?;
        line.set_air_bags(4).set_color(Color::Blue).set_edition("CVT");
        Ok(())
    }

    fn construct_signature_edition(&mut self) -> Result<(), DirectorError> {
        let line = self.line_mut()?;
        line.set_air_bags(8)
            .set_color(Color::Red)
            .set_edition("Signature");
        Ok(())
    }

    fn build(&mut self) -> Result<Car, DirectorError> {
        Ok(self.line_mut()?.build())
    }

    fn line_mut(&mut self) -> Result<&mut (dyn CarProductionLine + 'static), DirectorError> {
        self.production_line
            .as_deref_mut()
            .ok_or(DirectorError::NoProductionLine)
    }
}

fn print_car(car: &Car) {
    match serde_json::to_string_pretty(car) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("{} {err}", "failed to serialize car:".red()),
    }
}

fn main() {
    let mut director = Director::new();

    println!("=== Director without a production line ===");
    if let Err(err) = director.construct_cvt_edition() {
        println!("{} {err}", "error:".red().bold());
    }

    println!("\n=== Mastodon sedan, CVT edition ===");
    director.set_production_line(Box::new(SedanProductionLine::new(CarCatalog::Mastodon)));
    director.construct_cvt_edition().unwrap();
    let mastodon_cvt = director.build().unwrap();
    print_car(&mastodon_cvt);

    println!("\n=== Mastodon sedan, Signature edition ===");
    director.construct_signature_edition().unwrap();
    let mastodon_signature = director.build().unwrap();
    print_car(&mastodon_signature);

    println!("\n=== Rhino hatchback, Signature edition ===");
    director.set_production_line(Box::new(HatchbackProductionLine::new(CarCatalog::Rhino)));
    director.construct_signature_edition().unwrap();
    let rhino_signature = director.build().unwrap();
    print_car(&rhino_signature);
}
