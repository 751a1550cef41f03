use crate::cli::SpiralArgs;
use crate::error::Result;
use palace::core::numbers::sieve::generate_primes;
use palace::core::numbers::spiral::build_and_annotate_spiral;
use palace::engine::error::EngineError;
use palace::engine::rooms::prime_gallery::write_spiral;
use std::io::Write;
use tracing::info;

pub fn run(args: SpiralArgs) -> Result<()> {
    let stdout = std::io::stdout();
    execute(&args, &mut stdout.lock())
}

fn execute(args: &SpiralArgs, out: &mut impl Write) -> Result<()> {
    // size² primes always reach past the largest value in the grid.
    let prime_count = args
        .primes
        .unwrap_or_else(|| args.size.saturating_mul(args.size).max(1));
    let primes = generate_primes(prime_count).map_err(EngineError::from)?;
    let grid = build_and_annotate_spiral(args.size, &primes).map_err(EngineError::from)?;
    info!(
        size = grid.size(),
        primes = grid.prime_count(),
        "Built Ulam spiral."
    );

    let mut body = String::new();
    write_spiral(&mut body, &grid).map_err(EngineError::from)?;

    writeln!(
        out,
        "🌀 Ulam Spiral ({0}×{0}), {1} prime cells:",
        grid.size(),
        grid.prime_count()
    )?;
    out.write_all(body.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn render(size: usize, primes: Option<usize>) -> Result<String> {
        let mut out = Vec::new();
        execute(&SpiralArgs { size, primes }, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn three_by_three_marks_every_prime() {
        let text = render(3, None).unwrap();
        assert!(text.starts_with("🌀 Ulam Spiral (3×3), 4 prime cells:\n"));
        // [[5,4,3],[6,1,2],[7,8,9]]
        assert!(text.contains("   ⭐ ·  ⭐ \n   ·  ·  ⭐ \n   ⭐ ·  ·  \n"));
    }

    #[test]
    fn limited_prime_count_marks_fewer_cells() {
        let text = render(3, Some(2)).unwrap();
        assert!(text.contains("2 prime cells"));
    }

    #[test]
    fn zero_size_is_an_engine_error() {
        assert!(matches!(render(0, None), Err(CliError::Palace(_))));
    }
}
