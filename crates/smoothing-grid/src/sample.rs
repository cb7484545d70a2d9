/// Trait for sample types that can be processed in the `f64` working representation.
///
/// Widening must be lossless. Narrowing is where quantized types round and clamp.
pub trait Sample: Copy + Send + Sync {
    /// Convert the sample to f64
    fn to_f64(self) -> f64;
    /// Convert the sample from f64
    fn from_f64(val: f64) -> Self;
}

impl Sample for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(val: f64) -> Self {
        val
    }
}

impl Sample for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(val: f64) -> Self {
        val as f32
    }
}

impl Sample for u8 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    /// Round half to even, then clamp to `[0, 255]`. NaN maps to 0.
    fn from_f64(val: f64) -> Self {
        val.round_ties_even().clamp(0.0, 255.0) as u8
    }
}
