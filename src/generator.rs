use std::{fmt, str::FromStr};

use rand::{
    distributions::{uniform::SampleUniform, Distribution, Uniform},
    rngs::StdRng,
    SeedableRng,
};
use serde::Serialize;

use crate::error::{Error, Result};

/// Distribution of the values produced by [`generate_vec`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenMode {
    /// Uniform draws from `[1, len]`.
    #[default]
    Random,
    /// `1, 2, ..., len`
    Sorted,
    /// `len, len - 1, ..., 1`
    RevSorted,
}

impl fmt::Display for GenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenMode::Random => "random",
            GenMode::Sorted => "sorted",
            GenMode::RevSorted => "rev-sorted",
        };
        f.write_str(name)
    }
}

impl FromStr for GenMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(GenMode::Random),
            "sorted" => Ok(GenMode::Sorted),
            "rev-sorted" | "revsorted" | "reversed" => Ok(GenMode::RevSorted),
            other => Err(format!(
                "unknown generation mode `{}`, expected one of: random, sorted, rev-sorted",
                other
            )),
        }
    }
}

fn to_element<T: TryFrom<usize>>(value: usize, len: usize) -> Result<T> {
    T::try_from(value).map_err(|_| Error::InvalidLength { len })
}

/// Generates `len` values following `mode`, seeding the random engine from OS
/// entropy.
pub fn generate_vec<T>(len: usize, mode: GenMode) -> Result<Vec<T>>
where
    T: TryFrom<usize> + SampleUniform,
{
    generate_vec_seeded(len, mode, None)
}

/// Like [`generate_vec`], but `Some(seed)` makes [`GenMode::Random`]
/// reproducible. `None` falls back to OS entropy.
pub fn generate_vec_seeded<T>(len: usize, mode: GenMode, seed: Option<u64>) -> Result<Vec<T>>
where
    T: TryFrom<usize> + SampleUniform,
{
    if len == 0 {
        return Ok(Vec::new());
    }
    let upper: T = to_element(len, len)?;
    tracing::debug!(len, %mode, ?seed, "generating vector");

    match mode {
        GenMode::Random => {
            let dist = Uniform::new_inclusive(to_element::<T>(1, len)?, upper);
            let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
            Ok(dist.sample_iter(&mut rng).take(len).collect())
        }
        GenMode::Sorted => (1..=len).map(|i| to_element(i, len)).collect(),
        GenMode::RevSorted => (1..=len).rev().map(|i| to_element(i, len)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sorted_counts_up() {
        assert_eq!(
            generate_vec::<usize>(5, GenMode::Sorted),
            Ok(vec![1, 2, 3, 4, 5])
        );
    }

    #[test]
    fn rev_sorted_counts_down() {
        assert_eq!(
            generate_vec::<usize>(5, GenMode::RevSorted),
            Ok(vec![5, 4, 3, 2, 1])
        );
    }

    #[test]
    fn zero_length_is_empty_for_every_mode() {
        for mode in [GenMode::Random, GenMode::Sorted, GenMode::RevSorted] {
            assert_eq!(generate_vec::<u32>(0, mode), Ok(Vec::new()));
        }
    }

    #[test]
    fn default_mode_is_random() {
        assert_eq!(GenMode::default(), GenMode::Random);
    }

    #[test]
    fn length_must_fit_element_type() {
        assert_eq!(
            generate_vec::<u8>(300, GenMode::Sorted),
            Err(Error::InvalidLength { len: 300 })
        );
        assert_eq!(generate_vec::<u8>(255, GenMode::RevSorted).unwrap()[0], 255);
    }

    #[test]
    fn single_random_element_is_one() {
        assert_eq!(generate_vec::<u64>(1, GenMode::Random), Ok(vec![1]));
    }

    #[test]
    fn same_seed_same_output() {
        let a = generate_vec_seeded::<u32>(1000, GenMode::Random, Some(42)).unwrap();
        let b = generate_vec_seeded::<u32>(1000, GenMode::Random, Some(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mode_names_round_trip() {
        for mode in [GenMode::Random, GenMode::Sorted, GenMode::RevSorted] {
            assert_eq!(mode.to_string().parse::<GenMode>(), Ok(mode));
        }
        assert_eq!("Reversed".parse::<GenMode>(), Ok(GenMode::RevSorted));
        assert!("shuffled".parse::<GenMode>().is_err());
    }

    proptest! {
        #[test]
        fn random_values_stay_in_range(len in 0usize..2000, seed in any::<Option<u64>>()) {
            let v = generate_vec_seeded::<usize>(len, GenMode::Random, seed).unwrap();
            prop_assert_eq!(v.len(), len);
            prop_assert!(v.iter().all(|x| (1..=len).contains(x)));
        }

        #[test]
        fn ordered_modes_are_exact_ranges(len in 0usize..2000) {
            let up = generate_vec::<u64>(len, GenMode::Sorted).unwrap();
            let down = generate_vec::<u64>(len, GenMode::RevSorted).unwrap();
            prop_assert!(up.iter().copied().eq(1..=len as u64));
            prop_assert!(down.iter().copied().eq((1..=len as u64).rev()));
        }
    }
}
