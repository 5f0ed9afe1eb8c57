//! Seed values and accumulators for min/max reductions.
//!
//! A minimum is seeded with the largest possible value and a maximum with
//! the smallest, so that the first real value always replaces the seed.
//! Types with reserved sentinels (like [`Timestamp`](crate::Timestamp))
//! override the seeds to stay inside their meaningful range.

/// Types that provide start values for min/max reductions.
pub trait MinMaxSeed: Copy + PartialOrd {
    /// Start value for a minimum: ordered after every other value.
    fn min_op_start_value() -> Self;

    /// Start value for a maximum: ordered before every other value.
    fn max_op_start_value() -> Self;
}

macro_rules! impl_seed_for_int {
    ($($t:ty),*) => {
        $(
            impl MinMaxSeed for $t {
                #[inline]
                fn min_op_start_value() -> Self {
                    <$t>::MAX
                }

                #[inline]
                fn max_op_start_value() -> Self {
                    <$t>::MIN
                }
            }
        )*
    };
}

impl_seed_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Running minimum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinOp<T: MinMaxSeed> {
    value: T,
}

impl<T: MinMaxSeed> MinOp<T> {
    /// Start at the seed value.
    pub fn new() -> Self {
        Self { value: T::min_op_start_value() }
    }

    /// Fold one value in.
    #[inline]
    pub fn update(&mut self, value: T) {
        if value < self.value {
            self.value = value;
        }
    }

    /// Current minimum (the seed if nothing smaller was seen).
    #[inline]
    pub fn get(&self) -> T {
        self.value
    }
}

impl<T: MinMaxSeed> Default for MinOp<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MinMaxSeed> Extend<T> for MinOp<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.update(value);
        }
    }
}

/// Running maximum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaxOp<T: MinMaxSeed> {
    value: T,
}

impl<T: MinMaxSeed> MaxOp<T> {
    /// Start at the seed value.
    pub fn new() -> Self {
        Self { value: T::max_op_start_value() }
    }

    /// Fold one value in.
    #[inline]
    pub fn update(&mut self, value: T) {
        if value > self.value {
            self.value = value;
        }
    }

    /// Current maximum (the seed if nothing larger was seen).
    #[inline]
    pub fn get(&self) -> T {
        self.value
    }
}

impl<T: MinMaxSeed> Default for MaxOp<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MinMaxSeed> Extend<T> for MaxOp<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.update(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_seeds() {
        assert_eq!(u32::min_op_start_value(), u32::MAX);
        assert_eq!(u32::max_op_start_value(), 0);
        assert_eq!(i64::max_op_start_value(), i64::MIN);
    }

    #[test]
    fn test_min_max_ops() {
        let mut min = MinOp::<i32>::new();
        let mut max = MaxOp::<i32>::new();
        for v in [5, -3, 12, 0] {
            min.update(v);
            max.update(v);
        }
        assert_eq!(min.get(), -3);
        assert_eq!(max.get(), 12);
    }

    #[test]
    fn test_empty_reduction_keeps_seed() {
        assert_eq!(MinOp::<u16>::default().get(), u16::MAX);
        assert_eq!(MaxOp::<u16>::default().get(), u16::MIN);
    }

    #[test]
    fn test_extend() {
        let mut min = MinOp::<u64>::new();
        min.extend([9, 4, 7]);
        assert_eq!(min.get(), 4);
    }
}
