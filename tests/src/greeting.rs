#![cfg(test)]
use roster_core::calculator::{AddFunction, add};
use roster_core::greeting::{ANONYMOUS_GREETING, Greetable, Named, Person};

fn greeters() -> Vec<Box<dyn Greetable>> {
    vec![
        Box::new(Person::new(Some("Geo"))),
        Box::new(Person::new(Some("Kallyn"))),
        Box::new(Person::new(None)),
    ]
}

#[test]
fn every_named_greeter_includes_its_name() {
    for user in greeters() {
        let text = user.greeting("Hi");
        match user.name() {
            Some(name) => assert_eq!(text, format!("Hi {name}")),
            None => assert_eq!(text, ANONYMOUS_GREETING),
        }
    }
}

#[test]
fn add_function_contract() {
    let f: AddFunction = add;
    assert_eq!(f(40.0, 2.0), 42.0);
}
