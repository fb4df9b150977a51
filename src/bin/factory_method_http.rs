//! Factory Method challenge: HTTP adapters
//!
//! The abstract `HttpAdapter` base class whose verbs threw "not implemented"
//! becomes a capability trait: an adapter that misses a verb does not
//! compile, so the runtime guard disappears.
//!
//! Run with: cargo run --bin factory_method_http

trait HttpAdapter {
    fn kind(&self) -> &str;

    fn get(&self) -> String;
    fn post(&self) -> String;
    fn put(&self) -> String;
    fn delete(&self) -> String;
}

struct RestHttpAdapter {
    kind: &'static str,
}

impl RestHttpAdapter {
    fn new() -> Self {
        Self { kind: "REST" }
    }
}

impl HttpAdapter for RestHttpAdapter {
    fn kind(&self) -> &str {
        self.kind
    }

    fn get(&self) -> String {
        format!("GET. Adapter type: {}", self.kind)
    }

    fn post(&self) -> String {
        format!("POST. Adapter type: {}", self.kind)
    }

    fn put(&self) -> String {
        format!("PUT. Adapter type: {}", self.kind)
    }

    fn delete(&self) -> String {
        format!("DELETE. Adapter type: {}", self.kind)
    }
}

trait HttpAdapterFactory {
    fn make_adapter(&self) -> Box<dyn HttpAdapter>;
}

struct RestHttpAdapterFactory;

impl HttpAdapterFactory for RestHttpAdapterFactory {
    fn make_adapter(&self) -> Box<dyn HttpAdapter> {
        Box::new(RestHttpAdapter::new())
    }
}

fn app_factory(factory: &dyn HttpAdapterFactory) {
    let adapter = factory.make_adapter();
    println!("Http Adapter is {}\n", adapter.kind());

    println!("{}", adapter.get());
    println!("{}", adapter.post());
    println!("{}", adapter.put());
    println!("{}", adapter.delete());
}

fn main() {
    println!("=== REST adapter ===");
    app_factory(&RestHttpAdapterFactory);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_produces_a_rest_adapter() {
        let adapter = RestHttpAdapterFactory.make_adapter();
        assert_eq!(adapter.kind(), "REST");
    }

    #[test]
    fn every_verb_reports_the_adapter_kind() {
        let adapter = RestHttpAdapter::new();
        for line in [adapter.get(), adapter.post(), adapter.put(), adapter.delete()] {
            assert!(line.ends_with("Adapter type: REST"));
        }
    }

    #[test]
    fn verbs_are_distinct() {
        let adapter = RestHttpAdapter::new();
        assert!(adapter.get().starts_with("GET."));
        assert!(adapter.post().starts_with("POST."));
        assert!(adapter.put().starts_with("PUT."));
        assert!(adapter.delete().starts_with("DELETE."));
    }
}
