//! Size Calculator Module
//!
//! Assigns a weight to each cached entry. Capacity is measured in these units.

// == Size Calculator ==
/// Computes the weight of a key-value pair.
///
/// Implementations must be pure and total, and must return 0 when the value
/// is absent (`None`). The engine relies on this to make removal of a
/// missing key a no-op on its running size.
pub trait SizeCalculator<K, V> {
    fn size_of(&self, key: &K, value: Option<&V>) -> usize;
}

// == Simple Size Calculator ==
/// Counts presence: every stored value weighs 1.
///
/// With this calculator the capacity is simply the maximum number of entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleSizeCalculator;

impl<K, V> SizeCalculator<K, V> for SimpleSizeCalculator {
    #[inline]
    fn size_of(&self, _key: &K, value: Option<&V>) -> usize {
        usize::from(value.is_some())
    }
}

// == String Length Size Calculator ==
/// Weighs textual values by their length in characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringLengthSizeCalculator;

impl<K, V: AsRef<str>> SizeCalculator<K, V> for StringLengthSizeCalculator {
    fn size_of(&self, _key: &K, value: Option<&V>) -> usize {
        value.map_or(0, |v| v.as_ref().chars().count())
    }
}

// == Closure Size Calculator ==
/// A calculator backed by a closure over present values.
///
/// Absent values always weigh 0, so the closure never sees them.
#[derive(Debug, Clone, Copy)]
pub struct FnSizeCalculator<F>(pub F);

impl<K, V, F> SizeCalculator<K, V> for FnSizeCalculator<F>
where
    F: Fn(&K, &V) -> usize,
{
    #[inline]
    fn size_of(&self, key: &K, value: Option<&V>) -> usize {
        value.map_or(0, |v| (self.0)(key, v))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_counts_presence() {
        let calc = SimpleSizeCalculator;
        let value = "anything".to_string();
        assert_eq!(calc.size_of(&"k", Some(&value)), 1);
        assert_eq!(SizeCalculator::<&str, String>::size_of(&calc, &"k", None), 0);
    }

    #[test]
    fn test_string_length() {
        let calc = StringLengthSizeCalculator;
        assert_eq!(calc.size_of(&1u32, Some(&"Boxer".to_string())), 5);
        assert_eq!(calc.size_of(&1u32, Some(&"")), 0);
        assert_eq!(SizeCalculator::<u32, String>::size_of(&calc, &1, None), 0);
    }

    #[test]
    fn test_string_length_counts_characters() {
        let calc = StringLengthSizeCalculator;
        assert_eq!(calc.size_of(&0u8, Some(&"héllo")), 5);
    }

    #[test]
    fn test_closure_calculator() {
        let calc = FnSizeCalculator(|_: &u32, v: &Vec<u8>| v.len() * 2);
        assert_eq!(calc.size_of(&1, Some(&vec![0u8; 3])), 6);
        assert_eq!(calc.size_of(&1, None), 0);
    }
}
