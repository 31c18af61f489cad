/// One piece of studio gear shown in the equipment showcase.
/// `specs` and `features` keep their authored order for display.
#[derive(Debug, Clone)]
pub struct Equipment {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub kind: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub specs: Vec<(&'static str, &'static str)>,
    pub features: Vec<&'static str>,
}

pub fn stock_list() -> Vec<Equipment> {
    vec![
        Equipment {
            id: "neumann-u87",
            name: "Neumann U87",
            price: "$3,500",
            kind: "Condenser Microphone",
            category: "microphones",
            description: "The Neumann U87 is a legendary condenser microphone known for its warm, \
                rich sound and exceptional detail. Used on countless hit records, it features \
                three switchable polar patterns (cardioid, omnidirectional, and figure-8) making \
                it incredibly versatile for various recording applications.",
            specs: vec![
                ("Polar Patterns", "Cardioid, Omni, Figure-8"),
                ("Frequency Response", "20Hz - 20kHz"),
                ("Sensitivity", "28 mV/Pa"),
                ("Self Noise", "12 dB-A"),
                ("Max SPL", "117 dB"),
            ],
            features: vec![
                "Three switchable polar patterns",
                "Classic Neumann transformer-balanced circuit",
                "Low self-noise and high SPL handling",
                "Includes shock mount and wooden case",
                "Industry-standard vocal microphone",
            ],
        },
        Equipment {
            id: "akg-c414",
            name: "AKG C414 XLII",
            price: "$1,100",
            kind: "Multi-Pattern Condenser",
            category: "microphones",
            description: "The AKG C414 XLII is a highly versatile condenser microphone featuring \
                nine selectable polar patterns. Its bright, modern sound makes it ideal for \
                vocals and solo instruments, while its flexibility allows it to excel in any \
                recording situation.",
            specs: vec![
                ("Polar Patterns", "9 selectable patterns"),
                ("Frequency Response", "20Hz - 20kHz"),
                ("Sensitivity", "23 mV/Pa"),
                ("Self Noise", "6 dB-A"),
                ("Max SPL", "140 dB"),
            ],
            features: vec![
                "Nine polar patterns including hypercardioid",
                "Peak hold LED for overload detection",
                "Three bass-cut filters and pre-attenuation pads",
                "Exceptional dynamic range and clarity",
                "Perfect for vocals and instruments",
            ],
        },
        Equipment {
            id: "ssl-4000e",
            name: "SSL 4000E Console",
            price: "Custom Quote",
            kind: "Mixing Console",
            category: "consoles",
            description: "The SSL 4000E is a legendary mixing console that has shaped the sound \
                of countless hit records. Known for its punchy master buss compression and \
                musical EQ, it remains the gold standard for professional mixing and recording.",
            specs: vec![
                ("Channels", "24, 32, 40, or 48 channel configurations"),
                ("EQ", "E-Series \"Black Knob\" 4-band EQ"),
                ("Dynamics", "Compressor/limiter per channel"),
                ("Routing", "Advanced patchbay and routing"),
                ("Automation", "Total Recall automation system"),
            ],
            features: vec![
                "Iconic master buss compression",
                "Musical E-Series EQ sections",
                "Comprehensive routing capabilities",
                "Professional automation system",
                "Used on countless hit records",
            ],
        },
    ]
}
