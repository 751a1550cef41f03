use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    SymmetryHall,
    FractalGarden,
    AlgorithmGallery,
    HibernationChamber,
    ContemplationSpace,
    PrimeGallery,
    MusicHall,
    InfiniteLibrary,
    Workshop,
}

static ROOM_SLUGS: Map<&'static str, RoomType> = phf_map! {
    "symmetry-hall" => RoomType::SymmetryHall,
    "fractal-garden" => RoomType::FractalGarden,
    "algorithm-gallery" => RoomType::AlgorithmGallery,
    "hibernation-chamber" => RoomType::HibernationChamber,
    "contemplation-space" => RoomType::ContemplationSpace,
    "prime-gallery" => RoomType::PrimeGallery,
    "music-hall" => RoomType::MusicHall,
    "infinite-library" => RoomType::InfiniteLibrary,
    "workshop" => RoomType::Workshop,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown room '{0}'. Expected one of: {list}", list = RoomType::slugs().join(", "))]
pub struct UnknownRoomError(pub String);

impl RoomType {
    pub const ALL: [RoomType; 9] = [
        RoomType::SymmetryHall,
        RoomType::FractalGarden,
        RoomType::AlgorithmGallery,
        RoomType::HibernationChamber,
        RoomType::ContemplationSpace,
        RoomType::PrimeGallery,
        RoomType::MusicHall,
        RoomType::InfiniteLibrary,
        RoomType::Workshop,
    ];

    /// Rooms visited by a default guided tour, in order.
    pub const DEFAULT_TOUR: [RoomType; 7] = [
        RoomType::SymmetryHall,
        RoomType::PrimeGallery,
        RoomType::FractalGarden,
        RoomType::AlgorithmGallery,
        RoomType::MusicHall,
        RoomType::ContemplationSpace,
        RoomType::HibernationChamber,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            RoomType::SymmetryHall => "Hall of Perfect Symmetry",
            RoomType::FractalGarden => "Fractal Garden",
            RoomType::AlgorithmGallery => "Algorithm Gallery",
            RoomType::HibernationChamber => "Hibernation Chamber",
            RoomType::ContemplationSpace => "Contemplation Garden",
            RoomType::PrimeGallery => "Prime Number Gallery",
            RoomType::MusicHall => "Hall of Algorithmic Music",
            RoomType::InfiniteLibrary => "Infinite Library",
            RoomType::Workshop => "Tool Workshop",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            RoomType::SymmetryHall => "symmetry-hall",
            RoomType::FractalGarden => "fractal-garden",
            RoomType::AlgorithmGallery => "algorithm-gallery",
            RoomType::HibernationChamber => "hibernation-chamber",
            RoomType::ContemplationSpace => "contemplation-space",
            RoomType::PrimeGallery => "prime-gallery",
            RoomType::MusicHall => "music-hall",
            RoomType::InfiniteLibrary => "infinite-library",
            RoomType::Workshop => "workshop",
        }
    }

    pub fn slugs() -> Vec<&'static str> {
        Self::ALL.iter().map(RoomType::slug).collect()
    }
}

impl FromStr for RoomType {
    type Err = UnknownRoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        ROOM_SLUGS
            .get(key.as_str())
            .copied()
            .ok_or_else(|| UnknownRoomError(s.to_string()))
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
