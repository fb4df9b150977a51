//! Abstract Factory challenge: device pieces
//!
//! Three product kinds (CPU, memory, display) across three device families
//! (phone, laptop, tablet). Every piece a family's factory produces must
//! report that family's label.
//!
//! Run with: cargo run --bin abstract_factory_devices

use colored::Colorize;

// =============================================================================
// Product contracts
// =============================================================================

trait Cpu {
    fn set_series(&self, series: &str) -> String;
}

trait Memory {
    fn set_capacity_gb(&self, capacity: u32) -> String;
}

trait Display {
    fn set_resolution(&self) -> String;
}

// =============================================================================
// Concrete products per family
// =============================================================================

struct PhoneCpu;

impl Cpu for PhoneCpu {
    fn set_series(&self, series: &str) -> String {
        format!("PHONE CPU series: {series}")
    }
}

struct LaptopCpu;

impl Cpu for LaptopCpu {
    fn set_series(&self, series: &str) -> String {
        format!("LAPTOP CPU series: {series}")
    }
}

struct TabletCpu;

impl Cpu for TabletCpu {
    fn set_series(&self, series: &str) -> String {
        format!("TABLET CPU series: {series}")
    }
}

struct PhoneMemory;

impl Memory for PhoneMemory {
    fn set_capacity_gb(&self, capacity: u32) -> String {
        format!("PHONE MEMORY capacity: {capacity}GB")
    }
}

struct LaptopMemory;

impl Memory for LaptopMemory {
    fn set_capacity_gb(&self, capacity: u32) -> String {
        format!("LAPTOP MEMORY capacity: {capacity}GB")
    }
}

struct TabletMemory;

impl Memory for TabletMemory {
    fn set_capacity_gb(&self, capacity: u32) -> String {
        format!("TABLET MEMORY capacity: {capacity}GB")
    }
}

struct PhoneDisplay;

impl Display for PhoneDisplay {
    fn set_resolution(&self) -> String {
        "PHONE DISPLAY resolution has been set".to_string()
    }
}

struct LaptopDisplay;

impl Display for LaptopDisplay {
    fn set_resolution(&self) -> String {
        "LAPTOP DISPLAY resolution has been set".to_string()
    }
}

struct TabletDisplay;

impl Display for TabletDisplay {
    fn set_resolution(&self) -> String {
        "TABLET DISPLAY resolution has been set".to_string()
    }
}

// =============================================================================
// Abstract factory: one creation method per product kind
// =============================================================================

trait DevicePiecesFactory {
    fn family(&self) -> &str;
    fn make_cpu(&self) -> Box<dyn Cpu>;
    fn make_memory(&self) -> Box<dyn Memory>;
    fn make_display(&self) -> Box<dyn Display>;
}

struct PhonePiecesFactory;

impl DevicePiecesFactory for PhonePiecesFactory {
    fn family(&self) -> &str {
        "PHONE"
    }

    fn make_cpu(&self) -> Box<dyn Cpu> {
        Box::new(PhoneCpu)
    }

    fn make_memory(&self) -> Box<dyn Memory> {
        Box::new(PhoneMemory)
    }

    fn make_display(&self) -> Box<dyn Display> {
        Box::new(PhoneDisplay)
    }
}

struct LaptopPiecesFactory;

impl DevicePiecesFactory for LaptopPiecesFactory {
    fn family(&self) -> &str {
        "LAPTOP"
    }

    fn make_cpu(&self) -> Box<dyn Cpu> {
        Box::new(LaptopCpu)
    }

    fn make_memory(&self) -> Box<dyn Memory> {
        Box::new(LaptopMemory)
    }

    fn make_display(&self) -> Box<dyn Display> {
        Box::new(LaptopDisplay)
    }
}

struct TabletPiecesFactory;

impl DevicePiecesFactory for TabletPiecesFactory {
    fn family(&self) -> &str {
        "TABLET"
    }

    fn make_cpu(&self) -> Box<dyn Cpu> {
        Box::new(TabletCpu)
    }

    fn make_memory(&self) -> Box<dyn Memory> {
        Box::new(TabletMemory)
    }

    fn make_display(&self) -> Box<dyn Display> {
        Box::new(TabletDisplay)
    }
}

// Assembles one device worth of pieces through a single factory.
fn app_pieces_factory(factory: &dyn DevicePiecesFactory) {
    let cpu = factory.make_cpu();
    let memory = factory.make_memory();
    let display = factory.make_display();

    println!("{}", format!("--- {} ---", factory.family()).bold());
    println!("{}", cpu.set_series("i5"));
    println!("{}", memory.set_capacity_gb(8));
    println!("{}", display.set_resolution());
}

fn main() {
    let factories: Vec<Box<dyn DevicePiecesFactory>> = vec![
        Box::new(PhonePiecesFactory),
        Box::new(LaptopPiecesFactory),
        Box::new(TabletPiecesFactory),
    ];

    for factory in &factories {
        app_pieces_factory(factory.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Family conformance: every piece from one factory carries its label.
    #[test]
    fn all_pieces_report_their_family() {
        let factories: Vec<Box<dyn DevicePiecesFactory>> = vec![
            Box::new(PhonePiecesFactory),
            Box::new(LaptopPiecesFactory),
            Box::new(TabletPiecesFactory),
        ];

        for factory in &factories {
            let family = factory.family().to_string();
            assert!(factory.make_cpu().set_series("i5").starts_with(&family));
            assert!(factory.make_memory().set_capacity_gb(8).starts_with(&family));
            assert!(factory.make_display().set_resolution().starts_with(&family));
        }
    }

    #[test]
    fn cpu_line_carries_the_series() {
        assert_eq!(PhoneCpu.set_series("i5"), "PHONE CPU series: i5");
        assert_eq!(LaptopCpu.set_series("M3"), "LAPTOP CPU series: M3");
    }

    #[test]
    fn memory_line_carries_the_capacity() {
        assert_eq!(TabletMemory.set_capacity_gb(16), "TABLET MEMORY capacity: 16GB");
    }
}
