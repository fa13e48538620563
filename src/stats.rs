use serde::Serialize;

use crate::error::{Error, Result};

/// Lossy conversion used to accumulate sums without overflowing `T`.
pub trait AsF64 {
    fn as_f64(&self) -> f64;
}

macro_rules! impl_as_f64 {
    ($($ty:ty),*) => {
        $(
            impl AsF64 for $ty {
                fn as_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_as_f64!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatResult<T> {
    pub min: T,
    pub max: T,
    pub avg: f64,
}

/// Computes the minimum, maximum and mean of `data`.
///
/// Ties resolve to the first occurrence for both extremes. The mean is always
/// summed in `f64`.
pub fn stat<T>(data: &[T]) -> Result<StatResult<T>>
where
    T: Ord + Copy + AsF64,
{
    let (first, rest) = data.split_first().ok_or(Error::EmptyInput)?;
    tracing::debug!(len = data.len(), "computing statistics");

    let (min, max) = rest.iter().fold((*first, *first), |(min, max), &value| {
        (
            if value < min { value } else { min },
            if value > max { value } else { max },
        )
    });
    let sum: f64 = data.iter().map(AsF64::as_f64).sum();

    Ok(StatResult {
        min,
        max,
        avg: sum / data.len() as f64,
    })
}
