//! Room labels derived from a floor position.

use crate::constants::ROOM_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Room {
    WestWing,
    EastWing,
    NorthGallery,
    SouthGallery,
    CentralHall,
}

impl Room {
    pub fn label(self) -> &'static str {
        match self {
            Room::WestWing => "West Wing - Contemporary Art",
            Room::EastWing => "East Wing - Modern Masters",
            Room::NorthGallery => "North Gallery - Abstract Collection",
            Room::SouthGallery => "South Gallery - Classical Works",
            Room::CentralHall => "Central Hall - Featured Exhibitions",
        }
    }
}

/// Classify a floor position using the default threshold.
#[inline]
pub fn classify(x: f32, z: f32) -> Room {
    classify_with_threshold(x, z, ROOM_THRESHOLD)
}

/// The x axis is checked before z, so corners belong to the wings.
pub fn classify_with_threshold(x: f32, z: f32, threshold: f32) -> Room {
    if x < -threshold {
        Room::WestWing
    } else if x > threshold {
        Room::EastWing
    } else if z < -threshold {
        Room::NorthGallery
    } else if z > threshold {
        Room::SouthGallery
    } else {
        Room::CentralHall
    }
}
