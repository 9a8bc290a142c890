//! Hand-authored profiles of known contacts.

/// One curated contact. Keys are stored lowercased.
#[derive(Debug)]
pub struct CuratedEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub company: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub experience: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub interests: &'static [&'static str],
    pub communication_style: &'static str,
    pub decision_making: &'static str,
    pub personality_traits: &'static [&'static str],
}

static CURATED: &[CuratedEntry] = &[
    CuratedEntry {
        key: "satya nadella",
        name: "Satya Nadella",
        company: "Microsoft",
        title: "Chairman and CEO",
        location: "Redmond, Washington",
        experience: &[
            "CEO at Microsoft (2014-present)",
            "Executive Vice President, Cloud and Enterprise Group",
            "22+ years at Microsoft in various leadership roles",
        ],
        skills: &[
            "Cloud Computing",
            "Strategic Leadership",
            "Digital Transformation",
            "AI and Machine Learning",
        ],
        interests: &["AI Innovation", "Inclusive Growth", "Cricket", "Reading"],
        communication_style: "Thoughtful and inclusive, focuses on empowerment and growth mindset",
        decision_making: "Collaborative and data-driven, considers long-term impact",
        personality_traits: &[
            "Empathetic Leader",
            "Visionary",
            "Growth-minded",
            "Inclusive",
            "Strategic Thinker",
        ],
    },
    CuratedEntry {
        key: "reid hoffman",
        name: "Reid Hoffman",
        company: "Greylock Partners",
        title: "Partner and Co-founder of LinkedIn",
        location: "San Francisco Bay Area",
        experience: &[
            "Partner at Greylock Partners",
            "Co-founder and Executive Chairman at LinkedIn",
            "Board member at Microsoft, Airbnb",
        ],
        skills: &[
            "Venture Capital",
            "Entrepreneurship",
            "Network Theory",
            "Product Strategy",
        ],
        interests: &[
            "Network Effects",
            "Entrepreneurship",
            "Future of Work",
            "Philosophy",
        ],
        communication_style: "Intellectual and strategic, uses frameworks and analogies",
        decision_making: "Network-thinking approach, considers ecosystem effects",
        personality_traits: &[
            "Strategic Networker",
            "Philosophical",
            "Systems Thinker",
            "Connector",
            "Future-focused",
        ],
    },
];

/// Exact lookup by an already-lowercased key.
pub fn lookup(key: &str) -> Option<&'static CuratedEntry> {
    CURATED.iter().find(|entry| entry.key == key)
}

pub fn entries() -> &'static [CuratedEntry] {
    CURATED
}

/// Display names of every curated contact, in table order.
pub fn names() -> Vec<&'static str> {
    CURATED.iter().map(|entry| entry.name).collect()
}
