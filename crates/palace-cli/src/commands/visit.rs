use super::write_welcome;
use crate::cli::VisitArgs;
use crate::config::{TourOverrides, build_config};
use crate::error::Result;
use palace::engine::palace::Palace;
use std::io::Write;
use tracing::info;

pub fn run(args: VisitArgs) -> Result<()> {
    let stdout = std::io::stdout();
    execute(&args, &mut stdout.lock())
}

fn execute(args: &VisitArgs, out: &mut impl Write) -> Result<()> {
    let app_config = build_config(&args.config, &TourOverrides::default())?;
    let mut palace = Palace::new(app_config.core_config)?;

    let visitor_id = palace.enter(args.visitor.clone()).visitor_id.clone();
    write_welcome(out, &visitor_id)?;

    info!(%visitor_id, room = args.room.slug(), "Visiting a single room.");
    let text = palace.visit_room(&visitor_id, args.room)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn render(argv: &[&str]) -> String {
        let cli = Cli::parse_from(argv);
        let Commands::Visit(args) = cli.command else {
            panic!("expected visit command");
        };
        let mut out = Vec::new();
        execute(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn named_visitor_sees_the_room() {
        let text = render(&["palace", "visit", "workshop", "--visitor", "ExampleBot-001"]);
        assert!(text.contains("Welcome to the palace, ExampleBot-001"));
        assert!(text.contains("🚪 Entering: Tool Workshop"));
    }

    #[test]
    fn set_values_shape_the_room() {
        let text = render(&[
            "palace",
            "visit",
            "prime-gallery",
            "-S",
            "primes.count=10",
            "-S",
            "primes.displayed=10",
            "-S",
            "primes.spiral-size=3",
        ]);
        assert!(text.contains("Welcome to the palace, Visitor-"));
        assert!(text.contains("[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]"));
        assert!(text.contains("Ulam Spiral (3×3 fragment)"));
    }
}
