/// One released project shown in the portfolio browser.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub genre: &'static str,
    pub year: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub credits: Vec<(&'static str, &'static str)>,
    pub tracks: Vec<&'static str>,
}

pub fn released_list() -> Vec<Project> {
    vec![
        Project {
            id: "synthwave-dreams",
            title: "Synthwave Dreams",
            artist: "Neon Horizon",
            genre: "Electronic",
            year: "2024",
            category: "electronic",
            description: "A retro-futuristic journey through 80s-inspired soundscapes, featuring \
                analog synthesizers, driving basslines, and nostalgic melodies that transport \
                listeners to a neon-soaked digital world.",
            credits: vec![
                ("Producer", "Alex Chen"),
                ("Engineer", "Sarah Martinez"),
                ("Mixing", "Resonance Studios"),
                ("Mastering", "Resonance Studios"),
                ("Equipment", "Moog Grandmother, Nord Stage 3, SSL Console"),
            ],
            tracks: vec![
                "Midnight Drive",
                "Neon Nights",
                "Digital Dreams",
                "Retro Wave",
                "Future Past",
            ],
        },
        Project {
            id: "intimate-sessions",
            title: "Intimate Sessions",
            artist: "Sarah Moon",
            genre: "Acoustic",
            year: "2024",
            category: "acoustic",
            description: "Raw and authentic acoustic recordings that capture the pure emotion \
                and vulnerability of live performance. Each track showcases the artist's \
                intimate storytelling and musical craftsmanship.",
            credits: vec![
                ("Producer", "Sarah Moon"),
                ("Engineer", "Mike Johnson"),
                ("Recording", "Resonance Studios"),
                ("Mixing", "Resonance Studios"),
                ("Equipment", "Neumann U87, API Preamps, ADAM Monitors"),
            ],
            tracks: vec![
                "Whispered Secrets",
                "Moonlight Serenade",
                "Gentle Rain",
                "Acoustic Memories",
                "Quiet Moments",
            ],
        },
    ]
}
