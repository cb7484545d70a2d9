/// A border type used to read samples outside of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderMode {
    /// This border type reflects the sample values at the boundary, starting with the edge sample itself.
    ///
    /// Example: ...d c b a | a b c d...
    #[default]
    Reflect,

    /// This border type takes the outermost sample and repeats it into the border region.
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,

    /// This border type reflects the sample values at the boundary, starting with the sample 'next' to the edge.
    ///
    /// Example: ...d c b a | b c d e...
    Reflect101,

    /// This border type wraps the content from the opposite side to fill the border.
    ///
    /// Example: ...d c b a | w x y z...
    Wrap,
}

/// Mirror `p` about the grid boundary without repeating the edge sample.
///
/// `-1` maps to `0`, `-2` to `1`, `len` to `len - 1`. Offsets further than one
/// grid length away keep reflecting until they land in `[0, len)`.
///
/// # Examples
///
/// ```
/// use smoothing_filter::padding::reflect;
///
/// assert_eq!(reflect(-1, 5), 0);
/// assert_eq!(reflect(5, 5), 4);
/// assert_eq!(reflect(2, 5), 2);
/// assert_eq!(reflect(-6, 5), 4);
/// ```
#[inline]
pub fn reflect(p: isize, len: usize) -> usize {
    let len = len as isize;
    if (0..len).contains(&p) {
        return p as usize;
    }
    // the mirrored sequence is periodic with period 2 * len
    let m = p.rem_euclid(2 * len);
    if m < len {
        m as usize
    } else {
        (2 * len - m - 1) as usize
    }
}

#[inline]
fn reflect101(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let len = len as isize;
    let m = i.rem_euclid(2 * len - 2);
    if m < len {
        m as usize
    } else {
        (2 * len - 2 - m) as usize
    }
}

#[inline]
fn wrap(i: isize, len: usize) -> usize {
    i.rem_euclid(len as isize) as usize
}

impl BorderMode {
    /// Maps index `i` to a valid index i.e. within `[0, len)` according to the border mode.
    ///
    /// - `Reflect`: mirror including edge
    /// - `Replicate`: clamp to edge
    /// - `Reflect101`: mirror excluding edge
    /// - `Wrap`: circular wrap
    ///
    /// # Arguments
    /// - `i`: The (possibly out-of-range) coordinate index.
    /// - `len`: The valid length of the dimension, at least 1.
    ///
    /// # Returns
    /// A valid mapped index within `[0, len)`.
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> usize {
        match self {
            BorderMode::Reflect => reflect(i, len),
            BorderMode::Replicate => i.clamp(0, len as isize - 1) as usize,
            BorderMode::Reflect101 => reflect101(i, len),
            BorderMode::Wrap => wrap(i, len),
        }
    }
}
