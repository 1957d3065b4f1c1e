// Singleton: one lazily built instance behind an explicit accessor.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

static INIT_CALLS: AtomicU32 = AtomicU32::new(0);

#[derive(Debug)]
pub struct Singleton {
    x: u32,
}

impl Singleton {
    /// Returns the shared instance, building it on first use.
    pub fn instance() -> &'static Singleton {
        static INSTANCE: OnceLock<Singleton> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let calls = INIT_CALLS.fetch_add(1, Ordering::SeqCst) + 1;
            log::debug!("initializing singleton (call {calls})");
            Singleton { x: 1 + calls }
        })
    }

    pub fn x(&self) -> u32 {
        self.x
    }
}

/// How many times the initializer has run. Never more than one.
pub fn init_count() -> u32 {
    INIT_CALLS.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_instance() {
        let first = Singleton::instance();
        let second = Singleton::instance();
        let third = Singleton::instance();

        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(second, third));
        assert_eq!(first.x(), 2);
        assert_eq!(init_count(), 1);
    }

    #[test]
    fn test_initialized_once_across_threads() {
        let addresses: Vec<usize> = (0..8)
            .map(|_| thread::spawn(|| Singleton::instance() as *const Singleton as usize))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(init_count(), 1);
    }
}
