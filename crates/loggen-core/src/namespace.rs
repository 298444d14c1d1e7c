//! Registration targets for a bound logger
//!
//! `bind` hands the logger to any [`Namespace`]: a plain map, a host's
//! service registry, or a dependency-injection container.

use crate::logger::Logger;
use std::collections::{BTreeMap, HashMap};

/// Something a logger can be registered into under a key
pub trait Namespace {
    fn register(&mut self, key: &str, logger: Logger);
}

impl Namespace for HashMap<String, Logger> {
    fn register(&mut self, key: &str, logger: Logger) {
        self.insert(key.to_string(), logger);
    }
}

impl Namespace for BTreeMap<String, Logger> {
    fn register(&mut self, key: &str, logger: Logger) {
        self.insert(key.to_string(), logger);
    }
}

/// Holds at most one logger, whatever the key
impl Namespace for Option<Logger> {
    fn register(&mut self, _key: &str, logger: Logger) {
        *self = Some(logger);
    }
}
