// gate library: fixed single- and two-qubit unitaries

pub mod single_qubit;
pub mod two_qubit;

use crate::statevector::Operator;

/// Every parameter-free gate in the library, with its display name.
pub fn named_gates() -> Vec<(&'static str, Operator)> {
    vec![
        ("I", single_qubit::identity()),
        ("X", single_qubit::x()),
        ("Y", single_qubit::y()),
        ("Z", single_qubit::z()),
        ("H", single_qubit::h()),
        ("CNOT", two_qubit::cnot()),
        ("CZ", two_qubit::cz()),
        ("SWAP", two_qubit::swap()),
    ]
}

/// Rotation gates at a given angle, with display names.
pub fn rotation_gates(theta: f64) -> Vec<(String, Operator)> {
    vec![
        (format!("RX({})", theta), single_qubit::rx(theta)),
        (format!("RY({})", theta), single_qubit::ry(theta)),
        (format!("RZ({})", theta), single_qubit::rz(theta)),
    ]
}
