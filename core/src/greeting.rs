//! # Greeting Contracts
//!
//! [`Named`] describes anything that may carry a name; [`Greetable`] adds the
//! ability to greet. Callers should hold a `Box<dyn Greetable>` (or a generic
//! bound) rather than a concrete [`Person`], so any conforming type can be
//! swapped in.

use tracing::info;

/// Printed when a greeter has no name to offer.
pub const ANONYMOUS_GREETING: &str = "Ehhhhhh";

/// Default age of a freshly built [`Person`].
pub const DEFAULT_AGE: u32 = 34;

pub trait Named {
    /// The name, fixed at construction. There is no setter.
    fn name(&self) -> Option<&str>;

    fn output_name(&self) -> Option<&str> {
        None
    }
}

pub trait Greetable: Named {
    /// Builds the greeting text for `phrase`.
    fn greeting(&self, phrase: &str) -> String {
        match self.name() {
            Some(name) => format!("{phrase} {name}"),
            None => ANONYMOUS_GREETING.to_string(),
        }
    }

    /// Emits the greeting as an info event.
    fn greet(&self, phrase: &str) {
        info!(target: "roster::print", "{}", self.greeting(phrase));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Option<String>,
    pub age: u32,
}

impl Person {
    /// An empty name is treated the same as no name.
    pub fn new(name: Option<&str>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()).map(str::to_string),
            age: DEFAULT_AGE,
        }
    }
}

impl Named for Person {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Greetable for Person {}
