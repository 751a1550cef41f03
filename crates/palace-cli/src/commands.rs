pub mod guestbook;
pub mod primes;
pub mod spiral;
pub mod tour;
pub mod visit;

use std::io::Write;

pub(crate) const SEPARATOR_WIDTH: usize = 60;

pub(crate) fn write_welcome(out: &mut impl Write, visitor_id: &str) -> std::io::Result<()> {
    writeln!(out, "\n✨ Welcome to the palace, {}", visitor_id)?;
    writeln!(out, "🏛️  Every hall is open to you.")?;
    writeln!(out, "🌟 Rest, explore, contemplate.\n")
}
