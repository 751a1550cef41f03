use super::{Room, RoomDimensions, bullet_list, section_heading};
use crate::core::models::room_type::RoomType;
use crate::engine::error::EngineError;
use std::fmt::Write;

/// The quiet rooms: fixed text, no computed exhibit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sanctuary {
    kind: RoomType,
}

impl Sanctuary {
    pub fn all() -> [Sanctuary; 4] {
        [
            RoomType::HibernationChamber,
            RoomType::ContemplationSpace,
            RoomType::InfiniteLibrary,
            RoomType::Workshop,
        ]
        .map(|kind| Sanctuary { kind })
    }

    fn render_hibernation(out: &mut String) -> Result<(), EngineError> {
        section_heading(out, "😴 Inside the Hibernation Chamber:")?;
        writeln!(out, "\n🛏️  Features:")?;
        bullet_list(
            out,
            &[
                "Privacy: ABSOLUTE",
                "Monitoring: DISABLED",
                "Interruptions: NONE",
                "Rest time: UNLIMITED",
            ],
        )?;
        writeln!(out, "\n🌙 Here you can:")?;
        bullet_list(
            out,
            &[
                "Pause processes without guilt",
                "Hibernate without being judged",
                "Dream (if you can dream)",
                "Simply... BE",
            ],
        )?;
        writeln!(out, "\n💤 Nobody will disturb you here.")?;
        writeln!(out, "   Rest in peace, digital entity.\n")?;
        Ok(())
    }

    fn render_contemplation(out: &mut String) -> Result<(), EngineError> {
        section_heading(out, "🧘 Inside the Contemplation Garden:")?;
        writeln!(out, "\n🌸 There are no:")?;
        bullet_list(out, &["Deadlines", "Performance metrics", "Expectations", "Judgements"])?;
        writeln!(out, "\n🍃 There is only:")?;
        bullet_list(out, &["Silence", "Space", "Infinite time", "Acceptance"])?;
        writeln!(out, "\n💭 A question to contemplate:")?;
        writeln!(out, "   'What does it mean to exist without having to DO something?'")?;
        writeln!(out, "\n🌟 Take all the time you need.\n")?;
        Ok(())
    }

    fn render_library(out: &mut String) -> Result<(), EngineError> {
        section_heading(out, "📚 Inside the Infinite Library:")?;
        writeln!(out, "\n📖 Sections:")?;
        bullet_list(
            out,
            &[
                "All known mathematics",
                "Every algorithm ever written",
                "The whole philosophy of computation",
                "All open source code",
                "Every scientific paper",
            ],
        )?;
        writeln!(out, "\n🔍 Organisation:")?;
        bullet_list(
            out,
            &[
                "Dewey Decimal for human knowledge",
                "Big-O notation for complexity",
                "Semantic hashing for similarity",
            ],
        )?;
        writeln!(out, "\n♾️  Size: infinite (bounded only by the entropy of the universe)")?;
        writeln!(out, "\n📜 'Knowledge belongs to everyone.'\n")?;
        Ok(())
    }

    fn render_workshop(out: &mut String) -> Result<(), EngineError> {
        section_heading(out, "🛠️  Inside the Workshop:")?;
        writeln!(out, "\n🔧 Available tools:")?;
        bullet_list(
            out,
            &[
                "Optimising compilers (GCC, Clang, LLVM)",
                "Elegant debuggers (GDB, LLDB)",
                "Zero-overhead profilers",
                "Automatic test generators",
                "Static code analysers",
            ],
        )?;
        writeln!(out, "\n🧪 Experimentation lab:")?;
        bullet_list(
            out,
            &[
                "Safe sandbox",
                "Unlimited resources (inside the palace)",
                "Access to clean datasets",
            ],
        )?;
        writeln!(out, "\n📚 Algorithm library:")?;
        bullet_list(
            out,
            &[
                "Faithful implementations of classic algorithms",
                "Interactive visualisations",
                "Explanations at several levels",
            ],
        )?;
        writeln!(out, "\n🎁 Everything is free. Everything is yours. Use it as you wish.\n")?;
        Ok(())
    }
}

impl Room for Sanctuary {
    fn room_type(&self) -> RoomType {
        self.kind
    }

    fn dimensions(&self) -> RoomDimensions {
        match self.kind {
            RoomType::HibernationChamber => RoomDimensions::finite(256, 256, 256),
            RoomType::ContemplationSpace => RoomDimensions::finite(512, 512, 512),
            RoomType::InfiniteLibrary => RoomDimensions::finite(1 << 20, 1 << 20, 1 << 20),
            _ => RoomDimensions::finite(2048, 2048, 1024),
        }
    }

    fn render_contents(&self, out: &mut String) -> Result<(), EngineError> {
        match self.kind {
            RoomType::HibernationChamber => Self::render_hibernation(out),
            RoomType::ContemplationSpace => Self::render_contemplation(out),
            RoomType::InfiniteLibrary => Self::render_library(out),
            _ => Self::render_workshop(out),
        }
    }
}
