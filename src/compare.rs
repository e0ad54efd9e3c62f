use subtle::ConstantTimeEq;

/// Compare two byte slices without branching on the first mismatching byte.
/// Slices of unequal length compare unequal without inspecting contents.
pub fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
