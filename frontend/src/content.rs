//! Everything the page displays. Kept as plain `const` data so the components
//! only deal with layout.

pub const TEMPLE_NAME: &str = "Vadakkumpuram Sree Vishnumaya Devasthanam";
pub const SHORT_NAME: &str = "Sree Vishnumaya Devasthanam";
pub const LOCALITY: &str = "Vadakkumpuram";
pub const TAGLINE: &str = "A sanctuary of faith, service, and community.";

/// Anchor ids of the blocks rendered on the home page, in page order.
pub mod ids {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const SEVA: &str = "seva";
    pub const TIMINGS: &str = "timings";
    pub const EVENTS: &str = "events";
    pub const GALLERY: &str = "gallery";
    pub const VISIT: &str = "visit";
    pub const DONATE: &str = "donate";

    pub const ALL: [&str; 8] = [HOME, ABOUT, SEVA, TIMINGS, EVENTS, GALLERY, VISIT, DONATE];
}

pub fn anchor(id: &str) -> String {
    format!("#{}", id)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { label: "About", target: ids::ABOUT },
    NavLink { label: "Seva", target: ids::SEVA },
    NavLink { label: "Timings", target: ids::TIMINGS },
    NavLink { label: "Events", target: ids::EVENTS },
    NavLink { label: "Visit", target: ids::VISIT },
    NavLink { label: "Donate", target: ids::DONATE },
];

pub const FOOTER_LINKS: [NavLink; 4] = [
    NavLink { label: "About", target: ids::ABOUT },
    NavLink { label: "Sevas", target: ids::SEVA },
    NavLink { label: "Timings", target: ids::TIMINGS },
    NavLink { label: "Events", target: ids::EVENTS },
];

// Hero

pub const HERO_EYEBROW: &str = "Divine abode of Sree Vishnumaya";
pub const HERO_INTRO: &str = "A sacred space of devotion and blessings. Experience the vibrant rituals, divine darshan, and serene ambience surrounded by the rich traditions of Kerala.";
pub const HERO_CARD_CAPTION: &str = "Sree Vishnumaya";
pub const HERO_CARD_TITLE: &str = "Divine Presence";

pub const SHRINE_IMAGE: &str = "https://images.unsplash.com/photo-1629380321590-3b3f75d66dec?ixid=M3w3OTkxMTl8MHwxfHNlYXJjaHwxfHxjZXJhbWljJTIwcG90dGVyeSUyMGhhbmRtYWRlfGVufDB8MHx8fDE3NjI4MTk5MTl8MA&ixlib=rb-4.1.0&w=1600&auto=format&fit=crop&q=80";
pub const VISIT_IMAGE: &str = "https://images.unsplash.com/photo-1549298916-b41d501d3772?q=80&w=1470&auto=format&fit=crop";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { label: "Daily Devotees", value: "500+" },
    Stat { label: "Sevas Offered", value: "25+" },
    Stat { label: "Festival Days", value: "30+" },
    Stat { label: "Years of Heritage", value: "200+" },
];

// About

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Vadakkumpuram Sree Vishnumaya Devasthanam is a traditional Kerala temple known for its powerful rituals and compassionate grace of Sree Vishnumaya. Devotees from near and far visit to seek blessings for protection, success, and harmony.",
    "The temple conducts daily poojas, special sevas, and grand festivals in accordance with agamic traditions. The tranquil surroundings and sacred chants offer a deeply spiritual experience.",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        title: "Powerful Sevas",
        desc: "Prasadam, Rahu-Ketu pooja, Udayasthamaya pooja, and more for protection and prosperity.",
    },
    Highlight {
        title: "Traditional Rituals",
        desc: "Daily poojas by experienced thanthris and pujaries in authentic Kerala style.",
    },
    Highlight {
        title: "Festivals",
        desc: "Colorful celebrations with bhajans, annadanam, kavadi, and vibrant decorations.",
    },
    Highlight {
        title: "Community",
        desc: "Service initiatives and cultural programs bringing devotees together.",
    },
];

pub const BLESSING: &str = "Blessings for all who seek with faith and devotion.";

// Sevas

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seva {
    pub name: &'static str,
    pub desc: &'static str,
}

pub const SEVAS: [Seva; 6] = [
    Seva { name: "Udayasthamaya Pooja", desc: "Full-day worship for prosperity and success." },
    Seva { name: "Rahu-Ketu Pooja", desc: "For relief from doshas and obstacles." },
    Seva { name: "Guruthi Pooja", desc: "Powerful ritual for protection and strength." },
    Seva { name: "Bhagavathi Seva", desc: "Divine blessings for family harmony." },
    Seva { name: "Ayilya Pooja", desc: "Seek healing and well-being." },
    Seva { name: "Annadanam", desc: "Offer food to devotees as sacred service." },
];

// Darshan timings

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingBlock {
    pub title: &'static str,
    pub slots: &'static [&'static str],
}

pub const TIMINGS: [TimingBlock; 2] = [
    TimingBlock {
        title: "Morning",
        slots: &[
            "05:30 AM – Nirmalya Darshan",
            "06:00 AM – Usha Pooja",
            "07:30 AM – Ucha Pooja",
        ],
    },
    TimingBlock {
        title: "Evening",
        slots: &["05:30 PM – Deeparadhana", "07:00 PM – Athazha Pooja"],
    },
];

pub const FESTIVAL_NOTE: &str = "On auspicious days and festivals, special poojas and extended darshan are conducted. Please check announcements below for updates.";

// Events

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventNotice {
    pub date: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const EVENTS: [EventNotice; 4] = [
    EventNotice {
        date: "Nov 24",
        title: "Special Guruthi Pooja",
        desc: "Powerful protection ritual after Deeparadhana.",
    },
    EventNotice {
        date: "Dec 01",
        title: "Annadanam Seva",
        desc: "All devotees are welcome to partake and volunteer.",
    },
    EventNotice {
        date: "Dec 15",
        title: "Bhajan Sandhya",
        desc: "Evening of devotional songs and prayer.",
    },
    EventNotice {
        date: "Dec 29",
        title: "Ulsavam Preparations",
        desc: "Volunteers meeting for annual festival.",
    },
];

// Gallery

pub const GALLERY_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1523419409543-a9a1161a8fd9?q=80&w=1470&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1623966370206-996f51022635?q=80&w=1470&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1548013146-c6838f3d3be9?q=80&w=1470&auto=format&fit=crop",
];

// Visit & contact

pub const LOCATION: &str = "Vadakkumpuram, Kerala, India";
pub const MAPS_URL: &str =
    "https://www.google.com/maps/search/?api=1&query=Vadakkumpuram+Sree+Vishnumaya+Devasthanam";
pub const PHONE_DISPLAY: &str = "+91 90000 00000";
pub const PHONE_LINK: &str = "tel:+919000000000";
pub const EMAIL: &str = "info@vishnumaya-temple.org";

pub fn mailto() -> String {
    format!("mailto:{}", EMAIL)
}

// Donations

pub const DONATE_INTRO: &str = "Contribute towards poojas, annadanam, and temple development. Every bit counts and is gratefully acknowledged.";
pub const UPI_ID: &str = "vishnumaya@upi";
pub const BANK_ACCOUNT_NAME: &str = TEMPLE_NAME;
pub const BANK_ACCOUNT_NUMBER: &str = "1234567890";
pub const BANK_IFSC: &str = "ABCD0123456";
pub const BANK_BRANCH: &str = LOCALITY;

pub fn bank_details_line() -> String {
    format!(
        "A/C: {} • IFSC: {} • Branch: {}",
        BANK_ACCOUNT_NUMBER, BANK_IFSC, BANK_BRANCH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<'a>(keys: impl IntoIterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(seen.insert(key), "duplicate key {:?}", key);
        }
    }

    #[test]
    fn list_keys_are_unique() {
        assert_unique(STATS.iter().map(|s| s.label));
        assert_unique(HIGHLIGHTS.iter().map(|h| h.title));
        assert_unique(SEVAS.iter().map(|s| s.name));
        assert_unique(TIMINGS.iter().map(|t| t.title));
        assert_unique(TIMINGS.iter().flat_map(|t| t.slots.iter().copied()));
        assert_unique(EVENTS.iter().map(|e| e.title));
        assert_unique(GALLERY_IMAGES.iter().copied());
        assert_unique(ids::ALL.iter().copied());
    }

    #[test]
    fn nav_targets_exist_on_the_page() {
        for link in NAV_LINKS.iter().chain(FOOTER_LINKS.iter()) {
            assert!(
                ids::ALL.contains(&link.target),
                "{} points at missing section {}",
                link.label,
                link.target
            );
        }
    }

    #[test]
    fn anchors_and_contact_links_are_well_formed() {
        assert_eq!(anchor(ids::DONATE), "#donate");
        assert_eq!(mailto(), "mailto:info@vishnumaya-temple.org");
        assert!(PHONE_LINK.starts_with("tel:+91"));
        assert_eq!(
            bank_details_line(),
            "A/C: 1234567890 • IFSC: ABCD0123456 • Branch: Vadakkumpuram"
        );
    }

    #[test]
    fn timing_blocks_have_slots() {
        assert!(TIMINGS.iter().all(|t| !t.slots.is_empty()));
        assert_eq!(TIMINGS[0].slots.len(), 3);
        assert_eq!(TIMINGS[1].slots.len(), 2);
    }
}
