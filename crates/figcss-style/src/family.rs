//! Font family stacks.
//!
//! A family gets a generic fallback when its name says so (`"Roboto Mono"`,
//! `"PT Serif"`, `"Open Sans"`) or when it is a well-known family of that
//! category.

struct FamilyRule {
    generic: &'static str,
    marker: &'static str,
    known: &'static [&'static str],
}

impl FamilyRule {
    fn matches(&self, family: &str) -> bool {
        family.to_lowercase().contains(self.marker) || self.known.contains(&family)
    }
}

pub const MONO_FONTS: &[&str] = &[
    "Anonymous Pro",
    "Azeret Mono",
    "B612 Mono",
    "Cascadia Code",
    "Chivo Mono",
    "Consolas",
    "Courier New",
    "Courier Prime",
    "Cousine",
    "Cutive Mono",
    "DM Mono",
    "Fira Code",
    "Fira Mono",
    "Geist Mono",
    "Hack",
    "IBM Plex Mono",
    "Inconsolata",
    "JetBrains Mono",
    "Major Mono Display",
    "Martian Mono",
    "Menlo",
    "Monaco",
    "Nanum Gothic Coding",
    "Noto Sans Mono",
    "Overpass Mono",
    "Oxygen Mono",
    "PT Mono",
    "Red Hat Mono",
    "Roboto Mono",
    "Share Tech Mono",
    "Source Code Pro",
    "Space Mono",
    "Spline Sans Mono",
    "Syne Mono",
    "Ubuntu Mono",
    "VT323",
    "Victor Mono",
    "Xanh Mono",
];

pub const SERIF_FONTS: &[&str] = &[
    "Abril Fatface",
    "Alegreya",
    "Arvo",
    "Bitter",
    "Bodoni Moda",
    "Cardo",
    "Cormorant",
    "Cormorant Garamond",
    "Crimson Pro",
    "Crimson Text",
    "DM Serif Display",
    "DM Serif Text",
    "Domine",
    "EB Garamond",
    "Frank Ruhl Libre",
    "Fraunces",
    "Gelasio",
    "Georgia",
    "IBM Plex Serif",
    "Instrument Serif",
    "Josefin Slab",
    "Libre Baskerville",
    "Libre Caslon Text",
    "Literata",
    "Lora",
    "Merriweather",
    "Newsreader",
    "Noticia Text",
    "Noto Serif",
    "Old Standard TT",
    "PT Serif",
    "Playfair Display",
    "Prata",
    "Roboto Slab",
    "Rokkitt",
    "Source Serif 4",
    "Source Serif Pro",
    "Spectral",
    "Times New Roman",
    "Tinos",
    "Vollkorn",
    "Young Serif",
    "Zilla Slab",
];

pub const SANS_FONTS: &[&str] = &[
    "Albert Sans",
    "Archivo",
    "Arial",
    "Arimo",
    "Assistant",
    "Barlow",
    "Be Vietnam Pro",
    "Cabin",
    "DM Sans",
    "Dosis",
    "Exo 2",
    "Figtree",
    "Fira Sans",
    "Geist",
    "Heebo",
    "Helvetica",
    "Helvetica Neue",
    "Hind",
    "IBM Plex Sans",
    "Inter",
    "Jost",
    "Josefin Sans",
    "Kanit",
    "Karla",
    "Lato",
    "Lexend",
    "Manrope",
    "Montserrat",
    "Mukta",
    "Mulish",
    "Noto Sans",
    "Nunito",
    "Nunito Sans",
    "Onest",
    "Open Sans",
    "Oswald",
    "Outfit",
    "Oxygen",
    "PT Sans",
    "Plus Jakarta Sans",
    "Poppins",
    "Prompt",
    "Public Sans",
    "Quicksand",
    "Raleway",
    "Red Hat Display",
    "Red Hat Text",
    "Roboto",
    "Rubik",
    "SF Pro Display",
    "SF Pro Text",
    "Sora",
    "Source Sans 3",
    "Source Sans Pro",
    "Space Grotesk",
    "Titillium Web",
    "Ubuntu",
    "Urbanist",
    "Verdana",
    "Work Sans",
];

/// Checked in order; the first matching rule supplies the fallback.
const FAMILY_RULES: &[FamilyRule] = &[
    FamilyRule {
        generic: "monospace",
        marker: " mono",
        known: MONO_FONTS,
    },
    FamilyRule {
        generic: "serif",
        marker: " serif",
        known: SERIF_FONTS,
    },
    FamilyRule {
        generic: "sans-serif",
        marker: " sans",
        known: SANS_FONTS,
    },
];

/// CSS `font-family` value: the quoted family plus a generic fallback when
/// one can be guessed.
pub fn classify_font_family(family: &str) -> String {
    match FAMILY_RULES.iter().find(|rule| rule.matches(family)) {
        Some(rule) => format!("'{family}', {}", rule.generic),
        None => format!("'{family}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_sans() {
        assert_eq!(classify_font_family("Inter"), "'Inter', sans-serif");
    }

    #[test]
    fn test_known_serif() {
        assert_eq!(classify_font_family("Merriweather"), "'Merriweather', serif");
    }

    #[test]
    fn test_known_mono() {
        assert_eq!(classify_font_family("Fira Code"), "'Fira Code', monospace");
    }

    #[test]
    fn test_marker_in_name() {
        assert_eq!(classify_font_family("Acme Mono"), "'Acme Mono', monospace");
        assert_eq!(classify_font_family("Acme Serif Display"), "'Acme Serif Display', serif");
        assert_eq!(classify_font_family("Acme SANS"), "'Acme SANS', sans-serif");
    }

    #[test]
    fn test_mono_checked_before_sans() {
        assert_eq!(classify_font_family("Noto Sans Mono"), "'Noto Sans Mono', monospace");
        assert_eq!(classify_font_family("IBM Plex Sans"), "'IBM Plex Sans', sans-serif");
    }

    #[test]
    fn test_marker_needs_leading_space() {
        assert_eq!(classify_font_family("Monoton"), "'Monoton'");
        assert_eq!(classify_font_family("Sansita"), "'Sansita'");
    }

    #[test]
    fn test_known_list_is_case_sensitive() {
        assert_eq!(classify_font_family("inter"), "'inter'");
    }

    #[test]
    fn test_unknown_family() {
        assert_eq!(classify_font_family("Brand Display"), "'Brand Display'");
    }
}
