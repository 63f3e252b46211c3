use roster_common::config::Config;
use roster_core::greeting::{Greetable, Person};

use crate::terminal::print;

pub fn greet(name: Option<&str>, phrase: &str, cfg: &Config) {
    print::section("greeting", cfg);

    let user: Box<dyn Greetable> = Box::new(Person::new(name));
    user.greet(phrase);
}
