//! Built-in catalog of jazz standards, in display order.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Standard {
    pub title: &'static str,
    pub changes: &'static str,
}

/// Find a standard by title, ignoring ASCII case
pub fn find(title: &str) -> Option<&'static Standard> {
    STANDARDS
        .iter()
        .find(|standard| standard.title.eq_ignore_ascii_case(title.trim()))
}

pub fn titles() -> impl Iterator<Item = &'static str> {
    STANDARDS.iter().map(|standard| standard.title)
}

pub static STANDARDS: &[Standard] = &[
    Standard {
        title: "By Intervals",
        changes: "Bm B C D F A D Ab Eb B Ab Gb F",
    },
    Standard {
        title: "Recorda Me",
        changes: " Am6 | Am6 | Am6 | Am6 |
 Cm6 | Cm6 | Cm6 | Cm6 F7 |
 BbM7 | Bbm7 Eb7 | AbM7 | Abm7 Db7 |
 GbM7 | Gm7 C7 | FM7 FM7 FM7 E7#9 | E7#9 |",
    },
    Standard {
        title: "Giant Steps",
        changes: " BM7 D9 | GM7 Bb9 | EbM7 | Am9 D9 |
 GM7 Bb9 | EbM7 Gb9 | BM7 | Fm9 Bb9 |
 EbM9 | Am9 D9 | GM7 | Dbm7 Gb9 |
 BM7 | Fm9 Bb9 | EbM7 | Dbm7 Gb9 |",
    },
    Standard {
        title: "Tune Up",
        changes: " Em7 | A7 | DM7 | DM7 |
 Dm7 | G7 | CM7 | CM7 |
 Cm7 | F7 | BbM7 | BbM7 |
 Em7 | F7 | Bb | A7 |
 Em7 | A7 | DM7 | DM7 |
 Dm7 | G7 | CM7 | CM7 |
 Cm7 | F7 | BbM7 | BbM7 |
 Em7 | A7 | DM7 | DM7 |",
    },
    Standard {
        title: "Ceora",
        changes: " AbM7 | Bbm7 Eb7 | AbM7 | Ebm7 Ab7 |
DbM7 | Dm7 G7 | Cm7 | F7alt |
Bbm7 | Eb7 | Cm7 | F7 |
Dm7 | G7 | Cm7 F7 | Bbm7 Eb7 |
AbM7 | Bbm7 Eb7 | AbM7 | Ebm7 Ab7 |
DbM7 | Dm7 G7 | Cm7 | F7alt |
Bbm7 | Eb7 | Cm7b5 | F7 |
Bbm7 | Eb7sus4 | AbM7 | Bbm7 Eb7b9 |",
    },
    Standard {
        title: "Satin Doll",
        changes: " Dm7 G7 | Dm7 G7 | Em7 A7 | Em7 A7 |
 D7 | Db7 | C | A7 |
 Dm7 G7 | Dm7 G7 | Em7 A7 | Em7 A7 |
 D7 | Db7 | C | C |
 Gm7 | C7 | F | F |
 Am7 | D7 | G7 | A7 |
 Dm7 G7 | Dm7 G7 | Em7 A7 | Em7 A7 |
 D7 | Db7 | C | C |",
    },
    Standard {
        title: "Blue Bossa",
        changes: " Cm69 | Cm69 | Fm9 | Fm9 |
Dm7b5 | G7#5#9 | Cm69 | Cm69 |
Ebm9 | Ab13 | DbM9 | DbM9 |
Dm7b5 | G7#5#9 | Cm69 | Dm7b5 G7#5#9 |",
    },
    Standard {
        title: "Autumn Leaves",
        changes: "Cm7 | F7 | BbM7 | EbM7 |
 Am7b5 | D7 | Gm7 | Gm6 |
 Cm7 | F7 | BbM7 | EbM7 |
 Am7b5 | D7 | Gm6 | Gm6 |
 D7 | D7 | Gm6 | Gm6 |
 Cm7 | F7 | BbM7 | BbM7 |
 Am7b5 | D7 | Gm7 C7 | Fm7 Bb7 |
 Am7b5 | D7 | Gm6 | G7 |",
    },
    Standard {
        title: "I Fall in Love Too Easily",
        changes: " Dm7 G7 | C F | Bm7b5 E7 | Am |
Bm7b5 E7+ | Am | F#m7 B7 | Bm7b5 E7 |
F#m7b5 B7 | E7 | Em7 A7 | Dm |
Dm7 G7 | C A7 | Dm7 G7 | C C Em7b5 A7alt |",
    },
    Standard {
        title: "Alice in Wonderland",
        changes: " Dm7 | G7 | CM7 | FM7 |
Bm7b5 | E7 | Am7 | Eb7 |
Dm7 | G7 | Em7 | Am7 |
Dm7 | G7 | Em7 | A7 |
Dm7 | G7 | CM7 | FM7 |
Bm7b5 | E7 | Am7 | Eb7 |
Dm7 | G7 | Em7 | Am7 |
Dm7 | G7 | CM7 | CM7 CM7 A7 |
D7 | G7 | Em7 | Am7 |
Dm7 | G7 | CM7 | FM7 |
F#m7b5 | B7b9 | Em7 | A7 |
Dm7 Dm7 A7 | Dm7 Dm7 A7 | Dm7 Dm7 Ab7 | G7 |
Dm7 | G7 | CM7 | FM7 |
Bm7b5 | E7 | Am7 | Eb7 |
Dm7 | G7 | Em7 | Am7 |
Dm7 | G7 | CM7 | A7alt |",
    },
    Standard {
        title: "Love for Sale",
        changes: " EbM7 | EbM7 | Bbm7 | Bbm7 |
EbM7 | EbM7 | Bbm7 | Bbm7 |
Ebm7 | Ab7 | DbM7 | Gb7 |
Cm7 | F7alt | Bbm7 | Bbm7 |
EbM7 | EbM7 | BbM7 | BbM7 |
EbM7 | EbM7 | BbM7 | BbM7 |
Ebm7 | Ab7 | DbM7 | Gb7 |
Cm7 | F7+ | Bbm7 | Bbm7 |",
    },
    Standard {
        title: "Stella by Starlight",
        changes: " Em7b5 | A7 | Cm7 | F7 |
 Fm7 | Bb7 | EbM7 | Ab7#11 |
 BbM7 | Em7b5 A7#5#9 | Dm7 | Bbm7 Eb7 |
 FM7 | Gm7 C7 | Am7b5 | D7#5#9 |
 G7#5 | G7#5 | Cm7 | Cm7 |
 Ab7#11 | Ab7#11 | BbM7 | BbM7 |
 Em7b5 | A7#5#9 | Dm7b5 | G7#5#9 |
 Cm7b5 | F7#5#9 | BbM7 | BbM7 |",
    },
    Standard {
        title: "Misty",
        changes: " EbM7 | Bbm7 Eb7 | AbM7 | Abm7 Db7 |
EbM7 Cm7 | Fm7 Bb7 | Gm7 C7 | Fm7 Bb7 |
EbM7 | Bbm7 Eb7 | AbM7 | Abm7 Db7 |
EbM7 Cm7 | Fm7 Bb7 | EbM7 Abm | EbM7 |
Bbm7 | Eb7 | AbM7 | AbM7 |
Am7 | D7 F7 | Bb7 C7 | F7 Bb7 |
EbM7 | Bbm7 Eb7 | AbM7 | Abm7 Db7 |
EbM7 Cm7 | Fm7 Bb7 | EbM7 | Bb7sus4 |",
    },
    Standard {
        title: "How High The Moon",
        changes: " GM7 | GM7 | Gm7 | C7 |
FM7 | FM7 | Fm7 | Bb7 |
Eb7 | Am7b5 D7b9 | Gm7 | Am7b5 D7 |
Bm7 | Am7 D7 | Bm7 Bb7 | Am7 D7 |
GM7 | GM7 | Gm7 | C7 |
FM7 | FM7 | Fm7 | Bb7 |
Eb7 | Am7b5 D7b9 | GM7 | Am7b5 D7b9 |
Bm7 Bb7 | Am7 D7 | GM7 E7alt | Am7 D7 |",
    },
    Standard {
        title: "I'll Remember April",
        changes: " GM7 | GM7 | GM7 | GM7 |
Gm | Gm+ | Gm6 | Gm+ |
Am7b5 | D7 | Bm7b5 | E7 |
Am7 | D7 | GM7 | GM7 G7alt |
Cm7 | F7 | BbM7 | Dm7 G7 |
Cm7 | F7 | BbM7 | BbM7 |
Am7 | D7 | GM7 | GM7 |
F#m7 | B7 | EM7 | Am7 D7 |
GM7 | GM7 | GM7 | GM7 |
Gm | Gm+ | Gm6 | Gm+ |
Am7b5 | D7 | Bm7b5 | E7 |
Am7 | D7 | GM7 | Am7 D7 |",
    },
    Standard {
        title: "Yardbird Suite",
        changes: " CM7 | Fm7 Bb7 | CM7 Bb7 | A13b9 |
D7 | G7 | Em7 A7alt | Dm7 G13b9 |
CM7 | Fm7 Bb7 | CM7 Bb7 | A13b9 |
D7 | G7 | CM7 | F#m7b5 B7alt |
Em | F#m7b5 B7alt | Em | A7alt |
Dm | Em7b5 A7alt | D7 | Dm7 G13b9 |
CM7 | Fm7 Bb7 | CM7 Bb7 | A13b9 |
D7 | G7 | CM7 A7alt | Dm7 G13b9 |",
    },
    Standard {
        title: "Star Eyes",
        changes: " EbM7 | Fm7 Bb13 | EbM7 | Ebm7 Ab7 |
DbM7 | Gm7b5 C7 | FM7 | B13 Bb13 |
EbM7 | Fm7 Bb13 | EbM7 | Ebm7 Ab7 |
DbM7 | Gm7b5 C7 | FM7 | B13 Bb13 |
AbM7 | AbM7 | Abm7 | Db13 |
GbM7 | GbM7 | Fm7 | Bb9sus Bb13 |
EbM7 | Fm7 Bb13 | EbM7 | Ebm7 Ab7 |
DbM7 | Gm7b5 C7 | FM7 | B13 Bb13 |
Eb7#9 D7#5#9 | Db7#9 C7#9 | Fm7 Bb9sus | EbM7 EbM7 Fm7 Bb7 |",
    },
    Standard {
        title: "Solar",
        changes: " Cm69 | Cm69 | Gm7 | C7 |
FM9 | FM9 | Fm7 | Bb7 |
EbM9 | Ebm7 Ab7 | DbM9 | Dm7b5 G7alt |",
    },
    Standard {
        title: "Afternoon In Paris",
        changes: " CM7 | Cm7 F7 | BbM7 | Bbm7 Eb7 |
AbM7 | Dm7 G7b9 | CM7 Am7 | Dm7 G7 |
CM7 | Cm7 F7 | BbM7 | Bbm7 Eb7 |
AbM7 | Dm7 G7b9 | CM7 | Am7 |
Dm7 | G7 | CM7 | Am7 |
Dm7 | G7 | C#m7 F#7 | Dm7 G7 |
CM7 | Cm7 F7 | BbM7 | Bbm7 Eb7 |
AbM7 | Dm7 G7b9 | CM7 Am7 | Dm7 G7 |",
    },
    Standard {
        title: "Aint Misbehavin",
        changes: " Eb6 Eo7 | Fm7 F#o7 | Gm7 G7 | AbM7 Abm7 |
Gm7 C7 | Fm7 Bb7 | G7 C7 | F7 Bb7 |
Eb6 Eo7 | Fm7 F#o7 | Gm7 G7 | AbM7 Abm7 |
Gm7 C7 | Fm7 Bb7 | Eb6 Abm | Eb6 G7 |
Cm | Cm+ | Cm6 | C7 |
Bb6 G7 | Cm7 F7 | Bb7 C7 | F7 Bb7 |
Eb6 Eo7 | Fm7 F#o7 | Gm7 G7 | AbM7 Abm7 |
Gm7 C7 | Fm7 Bb7 | Eb6 | Fm7 Bb7 |",
    },
    Standard {
        title: "Oleo",
        changes: " Bb6 Gm7 | Cm7 F7 | Bb6 Gm7 | Cm7 F7 |
Fm7 Bb7 | EbM7 Ebm7 | Dm7 G7 | Cm7 F7 |
Bb6 Gm7 | Cm7 F7 | Bb6 Gm7 | Cm7 F7 |
Fm7 Bb7 | EbM7 Ebm7 | Dm7 G7 | Cm7 F7 Bb6 Bb6 |
D7 | D7 | G7 | G7 |
C7 | C7 | F7 | F7 |
Bb6 Gm7 | Cm7 F7 | Bb6 Gm7 | Cm7 F7 |
Fm7 Bb7 | EbM7 Ebm7 | Dm7 G7 | Cm7 F7 Bb6 Bb6 |",
    },
    Standard {
        title: "Cottontail",
        changes: " Ab Fm7 | Bbm7 Eb7 | Ab Fm7 | Bbm7 Eb7 |
Ab7b5 | Db Do | Ab Fm7 | Bbm7 Eb7 |
Ab Fm7 | Bbm7 Eb7 | Ab Fm7 | Bbm7 Eb7 |
Ab7b5 | Db Do | Ab Fm7 | Eb7 Ab |
C7 | C7 | F7 | F7 |
Bb7 | Bb7 | Eb7 | Eb7 |
Ab Fm7 | Bbm7 Eb7 | Ab Fm7 | Bbm7 Eb7 |
Ab7b5 | Db Do | Ab Fm7 | Eb7 Ab |",
    },
    Standard {
        title: "Crazeology",
        changes: " Bb | Cm7 F7 | Bb Bbo | Cm7 F7 |
Abm7 Db7 | Gb | Cm7 F7 | Bb |
Bb | Cm7 F7 | Bb Bbo | Cm7 F7 |
Abm7 Db7 | Gb | Cm7 F7 | Bb |
D7 | D7 | Dm7 | G7 |
C7 | C7 | Cm7 | F7 |
Bb | Cm7 F7 | Bb Bbo | Cm7 F7 |
Abm7 Db7 | Gb | Cm7 F7 | Bb |",
    },
    Standard {
        title: "Dexterity",
        changes: " BbM7 | Cm7 F7 | BbM7 | Cm7 F7 |
BbM7 Bb7 | Eb6 Ab7 | Dm7 G7 | Cm7 F7 |
BbM7 | Cm7 F7 | BbM7 | Cm7 F7 |
BbM7 Bb7 | Eb6 Ab7 | Cm7 F7 | BbM7 |
Am7 | D7 | Dm7 | G7 |
Gm7 | C7 | Cm7 | F7 |
BbM7 | Cm7 F7 | BbM7 | Cm7 F7 |
BbM7 Bb7 | Eb6 Ab7 | Cm7 F7 | BbM7 |",
    },
    Standard {
        title: "Anthropology",
        changes: " Bb G7 | Cm7 F7 | Bb G7 | Cm7 F7 |
Bb7 | Eb Ebm6 | Dm7 G7 | Cm7 F7 |
Bb G7 | Cm7 F7 | Bb G7 | Cm7 F7 |
Bb7 | Eb Ebm6 | Dm7 G7 | Cm7 F7 Bb Bb |
D7 | D7 | G7 | G7 |
C7 | C7 | F7 | F7 |
Bb G7 | Cm7 F7 | Bb G7 | Cm7 F7 |
Bb7 | Eb Ebm6 | Dm7 G7 | Cm7 F7 Bb Bb |",
    },
    Standard {
        title: "Moose the Mooche",
        changes: " Bb | Cm7 F7 | Bb | Cm7 F7 |
Fm7 Bb7 | Eb7 | Bb | Cm7 F7 |
Bb | Cm7 F7 | Bb | Cm7 F7 |
Fm7 Bb7 | Eb7 Ab7 | Bb | Bb |
Am7b5 | D7 | Dm7 | G7 |
Gm7 | C7 | Cm7 | F7 |
Bb | Cm7 F7 | Bb | Cm7 F7 |
Fm7 Bb7 | Eb7 | Bb | Cm7 F7 |",
    },
    Standard {
        title: "Passport",
        changes: " Bb | Cm7 F7 | Bb | Cm7 F7 |
Fm7 Bb7 | Eb | Bb G7 | Cm7 F7 |
Bb | Cm7 F7 | Bb | Cm7 F7 |
Fm7 Bb7 | Eb | Bb | Bb |
D7 | D7 | G7 | G7 |
C7 | C7 | F7 | F7 |
Bb | Cm7 F7 | Bb | Cm7 F7 |
Fm7 Bb7 | Eb | Bb G7 | Cm7 F7 |",
    },
    Standard {
        title: "All of You",
        changes: " Fm7b5 | Eb6 | Fm7b5 | Fm7b5 |
Fm7b5 | Eb6 | Abm7 | Db7 |
Gm7 | C7#5 | Fm7 | Bb7 |
EbM7 Db9 | C7b9 | Fm7 | Bb7 |
Fm7b5 | Eb6 | Fm7b5 | Fm7b5 |
Fm7b5 | Eb6 | Gm7 | C7b9 |
AbM7 | Am7b5 D7b9 | Gm7 Db7#11 | C7 |
Fm7 C7b9 | Fm7 Bb7 | Eb6 | Bb9sus4 |",
    },
    Standard {
        title: "All of Me",
        changes: " C6 | C6 | E7 | E7 |
A7 | A7 | A7 Dm | Dm |
E7 | E7 | Am | Am |
D7 | D7 | G7 | G7 |
C6 | C6 | E7 | E7 |
A7 | A7 | A7 Dm | Dm |
F6 | Fm | C6 Em7b5/Bb | A7 |
Dm7b5 | G7 | C6 Ebo7 | Dm7 G7 |",
    },
    Standard {
        title: "All the Things You Are",
        changes: " Fm7 | Bbm7 | Eb7 | AbM7 |
DbM7 | Dm7 G7 | CM7 | CM7 |
Cm7 | Fm7 | Bb7 | EbM7 |
AbM7 | Am7 D7 | GM7 | E7alt |
Am7 | D7 | GM7 | GM7 |
F#m7 | B7 | EM7 | C7alt |
Fm7 | Bbm7 | Eb7 | AbM7 |
DbM7 | Dbm7 | Cm7 | Bm7 |
Bbm7 | Eb7 | AbM7 | Gm7 C7alt |",
    },
    Standard {
        title: "Cherokee",
        changes: " BbM7 | BbM7 | Fm7 | Bb7 |
EbM7 | EbM7 | Ab9 | Ab9 |
BbM7 | BbM7 | C7 | C7 |
Cm7 | G7b9 | Cm7 | F7+ |
BbM7 | BbM7 | Fm7 | Bb7 |
EbM7 | EbM7 | Ab9 | Ab9 |
BbM7 | BbM7 | C7 | C7 |
Cm7 | F7 | BbM7 | BbM7 |
C#m7 | F#7 | BM7 | BM7 |
Bm7 | E7 | AM7 | AM7 |
Am7 | D7 | GM7 | GM7 |
Gm7 | C7 | Cm7 | F7+ |
BbM7 | BbM7 | Fm7 | Bb7 |
EbM7 | EbM7 | Ab9 | Ab9 |
BbM7 | BbM7 | C7 | C7 |
Cm7 | F7 | BbM7 | F7#5#9 |",
    },
];
