use eframe::egui::Color32;

/// One gallery entry. `src` doubles as the persisted identifier.
#[derive(Debug, PartialEq, Eq)]
pub struct Artwork {
    pub src: &'static str,
    pub title: &'static str,
    pub accent: Color32,
}

pub const ARTWORKS: &[Artwork] = &[
    Artwork {
        src: "art/IMG_0467.jpg",
        title: "zyn homies",
        accent: Color32::from_rgb(0xff, 0x6b, 0x6b),
    },
    Artwork {
        src: "art/IMG_0468.jpg",
        title: "gran sueño",
        accent: Color32::from_rgb(0xff, 0xd4, 0x3b),
    },
    Artwork {
        src: "art/IMG_0469.jpg",
        title: "Mao",
        accent: Color32::from_rgb(0xb1, 0x97, 0xfc),
    },
    Artwork {
        src: "art/IMG_0470.jpg",
        title: "figura",
        accent: Color32::from_rgb(0x51, 0xcf, 0x66),
    },
    Artwork {
        src: "art/IMG_0471.jpg",
        title: "sonder",
        accent: Color32::from_rgb(0xff, 0x87, 0x87),
    },
    Artwork {
        src: "art/IMG_0472.jpg",
        title: "mindChatter",
        accent: Color32::from_rgb(0x74, 0xc0, 0xfc),
    },
    Artwork {
        src: "art/IMG_0473.jpg",
        title: "falll",
        accent: Color32::from_rgb(0xff, 0xaf, 0xcc),
    },
    Artwork {
        src: "art/IMG_0474.jpg",
        title: "love",
        accent: Color32::from_rgb(0xf4, 0xa2, 0x61),
    },
    Artwork {
        src: "art/IMG_0475.jpg",
        title: "reverie",
        accent: Color32::from_rgb(0x4d, 0xd0, 0xe1),
    },
];
