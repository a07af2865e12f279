// THEORY (single-cell heuristics):
// The `cell` module answers the only two questions asked about an individual cell,
// with no knowledge of its neighbors:
// - is the value a usable number at all (present and finite)?
// - does it qualify as "hot" (usable and strictly above the threshold)?
//
// Grids arrive in many numeric flavors (raw `u8` luma, `f32` sensor maps, `f64`
// with NaN holes, JSON with `null` cells), so the classifier works through the
// `SignalValue` trait rather than a single concrete type.

/// A grid cell that can be read as a signal strength.
///
/// `signal` returns `None` for an absent cell. NaN and infinities are returned
/// as-is and rejected by [`is_valid_value`].
pub trait SignalValue {
    fn signal(&self) -> Option<f64>;
}

impl SignalValue for f64 {
    fn signal(&self) -> Option<f64> {
        Some(*self)
    }
}

impl SignalValue for f32 {
    fn signal(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl SignalValue for u8 {
    fn signal(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl SignalValue for u16 {
    fn signal(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl SignalValue for i32 {
    fn signal(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl<T: SignalValue> SignalValue for Option<T> {
    fn signal(&self) -> Option<f64> {
        self.as_ref().and_then(SignalValue::signal)
    }
}

/// The cell's value if it is present and finite.
pub fn valid_value<T: SignalValue + ?Sized>(value: &T) -> Option<f64> {
    value.signal().filter(|v| v.is_finite())
}

pub fn is_valid_value<T: SignalValue + ?Sized>(value: &T) -> bool {
    valid_value(value).is_some()
}

/// Valid and strictly greater than `threshold`.
pub fn qualifies<T: SignalValue + ?Sized>(value: &T, threshold: f64) -> bool {
    valid_value(value).is_some_and(|v| v > threshold)
}
