use enum_map::Enum;

/// Iterates over every variant of an `Enum`, in declaration order.
pub fn enum_iter<E>() -> impl Iterator<Item = E>
where
    E: Enum,
{
    (0..E::LENGTH).map(|i| E::from_usize(i))
}

/// Moves every element `by` places forward, wrapping around the end.
pub fn shifted<T: Copy, const N: usize>(items: [T; N], by: usize) -> [T; N] {
    std::array::from_fn(|i| items[(i + N - by % N) % N])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_wraps() {
        assert_eq!(shifted([1, 2, 3, 4], 1), [4, 1, 2, 3]);
        assert_eq!(shifted([1, 2, 3, 4], 3), [2, 3, 4, 1]);
        assert_eq!(shifted([1, 2, 3, 4], 4), [1, 2, 3, 4]);
        assert_eq!(shifted([1, 2, 3, 4], 6), [3, 4, 1, 2]);
    }
}
