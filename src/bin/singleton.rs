//! Singleton: process-wide instance behind an init-once cell
//!
//! The instance is created lazily on first access; the argument of every
//! later access is silently ignored. `OnceLock` makes the first creation
//! safe even if a host ever calls from several threads, which the original
//! single-threaded idiom could not promise.
//!
//! Run with: cargo run --bin singleton

use std::sync::OnceLock;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();

#[derive(Debug)]
struct Singleton {
    version: String,
}

impl Singleton {
    fn get_instance(version: &str) -> &'static Singleton {
        INSTANCE.get_or_init(|| Singleton {
            version: version.to_string(),
        })
    }

    fn version(&self) -> &str {
        &self.version
    }
}

fn main() {
    let singleton1 = Singleton::get_instance("Version-1");
    let singleton2 = Singleton::get_instance("Version-2");

    println!("same instance: {}", std::ptr::eq(singleton1, singleton2));
    println!("version: {}", singleton2.version());
}
