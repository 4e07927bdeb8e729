use std::cell::RefCell;
use std::collections::HashMap;
use std::net::IpAddr;

/// Reverse lookup of a client address for display.
///
/// Lookups are best-effort: `None` means "show the raw address".
pub trait HostResolver {
    fn lookup(&self, address: &str) -> Option<String>;
}

/// Uses the system resolver (`getnameinfo`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn lookup(&self, address: &str) -> Option<String> {
        // The grammar only checks the dotted-quad shape, "999.1.1.1" gets here too.
        let ip: IpAddr = address.parse().ok()?;

        match dns_lookup::lookup_addr(&ip) {
            // getnameinfo hands back the numeric form when there is no PTR record
            Ok(name) if name != address => Some(name),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(address, error = %err, "reverse lookup failed");
                None
            }
        }
    }
}

/// Never resolves; used when resolution is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoResolver;

impl HostResolver for NoResolver {
    fn lookup(&self, _address: &str) -> Option<String> {
        None
    }
}

/// Remembers every answer, including failures, so each address is looked up once.
pub struct CachingResolver<R> {
    inner: R,
    cache: RefCell<HashMap<String, Option<String>>>,
}

impl<R: HostResolver> CachingResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<R: HostResolver> HostResolver for CachingResolver<R> {
    fn lookup(&self, address: &str) -> Option<String> {
        if let Some(hit) = self.cache.borrow().get(address) {
            return hit.clone();
        }

        let answer = self.inner.lookup(address);
        self.cache
            .borrow_mut()
            .insert(address.to_string(), answer.clone());
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct CountingResolver {
        calls: Cell<usize>,
    }

    impl HostResolver for CountingResolver {
        fn lookup(&self, address: &str) -> Option<String> {
            self.calls.set(self.calls.get() + 1);
            (address == "10.0.0.1").then(|| "gateway.lan".to_string())
        }
    }

    #[test]
    fn caching_resolver_asks_once_per_address() {
        // Arrange
        let resolver = CachingResolver::new(CountingResolver {
            calls: Cell::new(0),
        });

        // Act
        let first = resolver.lookup("10.0.0.1");
        let second = resolver.lookup("10.0.0.1");
        let miss = resolver.lookup("10.0.0.2");
        let miss_again = resolver.lookup("10.0.0.2");

        // Assert
        assert_eq!(first.as_deref(), Some("gateway.lan"));
        assert_eq!(second.as_deref(), Some("gateway.lan"));
        assert_eq!(miss, None);
        assert_eq!(miss_again, None);
        assert_eq!(resolver.inner.calls.get(), 2);
        assert_eq!(resolver.cached(), 2);
    }

    #[test]
    fn system_resolver_skips_addresses_that_are_not_ips() {
        assert_eq!(SystemResolver.lookup("999.1.1.1"), None);
    }

    #[test]
    fn no_resolver_never_answers() {
        assert_eq!(NoResolver.lookup("127.0.0.1"), None);
    }
}
