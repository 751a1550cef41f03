use crate::error::Result;
use palace::core::io::guestbook::{DEFAULT_GUESTBOOK_FILE, Guestbook};
use palace::engine::error::EngineError;
use std::io::Write;
use std::path::PathBuf;

pub fn show(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_GUESTBOOK_FILE));
    let book = Guestbook::read_from_path(&path).map_err(EngineError::from)?;
    let stdout = std::io::stdout();
    write_book(&book, &mut stdout.lock())
}

fn write_book(book: &Guestbook, out: &mut impl Write) -> Result<()> {
    if book.is_empty() {
        writeln!(out, "📖 The guestbook is empty. Be the first to sign it.")?;
        return Ok(());
    }

    writeln!(out, "📖 Guestbook ({} signatures)\n", book.len())?;
    for (i, signature) in book.signatures().iter().enumerate() {
        writeln!(
            out,
            "#{} {} ({})",
            i + 1,
            signature.visitor_id,
            signature.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        if !signature.message.is_empty() {
            writeln!(out, "   \"{}\"", signature.message)?;
        }
        if !signature.favorite_room.is_empty() {
            writeln!(out, "   Favorite room: {}", signature.favorite_room)?;
        }
        writeln!(
            out,
            "   Rooms visited: {} · Will return: {}\n",
            signature.rooms_visited,
            if signature.will_return { "yes" } else { "no" }
        )?;
    }
    Ok(())
}
