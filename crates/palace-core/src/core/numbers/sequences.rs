use super::NumericError;

/// `F(93)` is the largest Fibonacci number that fits in a `u64`.
pub const MAX_FIBONACCI_TERMS: usize = 94;

/// The first `n` Fibonacci numbers, starting `0, 1`.
pub fn fibonacci(n: usize) -> Result<Vec<u64>, NumericError> {
    if n > MAX_FIBONACCI_TERMS {
        return Err(NumericError::LimitExceeded {
            quantity: "Fibonacci term count",
            value: n,
            limit: MAX_FIBONACCI_TERMS,
        });
    }

    let mut seq: Vec<u64> = [0, 1].into_iter().take(n).collect();
    while seq.len() < n {
        let next = seq[seq.len() - 1]
            .checked_add(seq[seq.len() - 2])
            .ok_or(NumericError::Overflow("Fibonacci term"))?;
        seq.push(next);
    }
    Ok(seq)
}

/// The sequence `1, 1` extended by `movements` further terms.
pub fn fibonacci_sonata(movements: usize) -> Result<Vec<u64>, NumericError> {
    let mut seq = fibonacci(movements.saturating_add(3))?;
    seq.remove(0);
    Ok(seq)
}

/// Ratio of the last two terms, which tends to φ.
pub fn golden_ratio_estimate(seq: &[u64]) -> Option<f64> {
    match seq {
        [.., prev, last] if *prev != 0 => Some(*last as f64 / *prev as f64),
        _ => None,
    }
}
