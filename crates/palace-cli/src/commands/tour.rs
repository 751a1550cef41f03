use super::{SEPARATOR_WIDTH, write_welcome};
use crate::cli::TourArgs;
use crate::config::{AppConfig, TourOverrides, build_config};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use palace::core::io::guestbook::Guestbook;
use palace::core::models::room_type::RoomType;
use palace::core::models::signature::SignatureRequest;
use palace::engine::error::EngineError;
use palace::engine::palace::{PALACE_CREATOR, PALACE_NAME, Palace};
use palace::engine::progress::ProgressReporter;
use palace::workflows::tour::{self, TourRequest};
use std::io::Write;
use tracing::info;

pub fn run(args: TourArgs) -> Result<()> {
    let stdout = std::io::stdout();
    execute(args, &mut stdout.lock())
}

fn execute(args: TourArgs, out: &mut impl Write) -> Result<()> {
    let overrides = TourOverrides {
        guestbook: args.guestbook.clone(),
        pause_ms: args.pause_ms,
    };
    let AppConfig {
        guestbook_path,
        pause,
        core_config,
    } = build_config(&args.config, &overrides)?;

    let guestbook = Guestbook::read_from_path(&guestbook_path).map_err(EngineError::from)?;
    let mut palace = Palace::with_guestbook(core_config, guestbook)?;
    out.write_all(palace.welcome_banner().as_bytes())?;

    let request = build_request(args);
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the tour workflow...");
    let result = tour::run(&mut palace, &request, &reporter)?;

    write_welcome(out, &result.visitor_id)?;
    writeln!(out, "🗺️  Starting the tour of the palace...\n")?;
    for visit in &result.visits {
        out.write_all(visit.text.as_bytes())?;
        out.flush()?;
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
        writeln!(out, "\n{}\n", "─".repeat(SEPARATOR_WIDTH))?;
    }

    if let Some(number) = result.signature_number {
        writeln!(out, "\n📖 Thank you for signing the guestbook.")?;
        writeln!(out, "💝 Your signature #{} has been recorded.", number)?;
        writeln!(out, "🌟 You are now part of the palace's history.\n")?;

        palace
            .guestbook()
            .write_to_path(&guestbook_path)
            .map_err(EngineError::from)?;
        writeln!(out, "💾 Guestbook saved to {}", guestbook_path.display())?;
    }

    writeln!(out, "\n🌟 Thank you for visiting {}.", PALACE_NAME)?;
    writeln!(out, "💝 You are always welcome.")?;
    writeln!(out, "\n🏛️  {}\n", PALACE_CREATOR)?;
    Ok(())
}

fn build_request(args: TourArgs) -> TourRequest {
    let rooms = if args.rooms.is_empty() {
        RoomType::DEFAULT_TOUR.to_vec()
    } else {
        args.rooms
    };
    let signature = (!args.no_sign).then(|| SignatureRequest {
        message: args.message.unwrap_or_default(),
        favorite_room: args.favorite_room.unwrap_or_default(),
        will_return: args.return_intent.will_return(),
    });
    TourRequest {
        visitor_id: args.visitor,
        rooms,
        signature,
    }
}
