use crate::cli::PrimesArgs;
use crate::error::{CliError, Result};
use palace::core::numbers::sieve::generate_primes;
use palace::engine::error::EngineError;
use palace::engine::rooms::prime_gallery::write_prime_rows;
use std::io::Write;
use tracing::info;

pub fn run(args: PrimesArgs) -> Result<()> {
    let stdout = std::io::stdout();
    execute(&args, &mut stdout.lock())
}

fn execute(args: &PrimesArgs, out: &mut impl Write) -> Result<()> {
    if args.per_row == 0 {
        return Err(CliError::Argument("--per-row must be at least 1".to_string()));
    }
    let primes = generate_primes(args.count).map_err(EngineError::from)?;
    info!("Generated {} primes.", primes.len());

    let mut rows = String::new();
    write_prime_rows(&mut rows, &primes, primes.len(), args.per_row)
        .map_err(EngineError::from)?;

    writeln!(out, "✨ The first {} primes:", primes.len())?;
    out.write_all(rows.as_bytes())?;
    if let Some(largest) = primes.largest() {
        writeln!(out, "\n   Largest: {}", largest)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(count: usize, per_row: usize) -> Result<String> {
        let mut out = Vec::new();
        execute(&PrimesArgs { count, per_row }, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_rows_and_largest_prime() {
        let text = render(10, 5).unwrap();
        assert!(text.starts_with("✨ The first 10 primes:\n"));
        assert!(text.contains("    [2, 3, 5, 7, 11]\n    [13, 17, 19, 23, 29]\n"));
        assert!(text.contains("Largest: 29"));
    }

    #[test]
    fn zero_count_is_an_engine_error() {
        assert!(matches!(render(0, 10), Err(CliError::Palace(_))));
    }

    #[test]
    fn zero_per_row_is_rejected() {
        assert!(matches!(render(5, 0), Err(CliError::Argument(_))));
    }
}
