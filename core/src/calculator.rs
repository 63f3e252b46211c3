/// Shape of any two-operand addition.
pub type AddFunction = fn(f64, f64) -> f64;

pub fn add(n1: f64, n2: f64) -> f64 {
    n1 + n2
}
