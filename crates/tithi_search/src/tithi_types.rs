//! Tithi value type.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};

/// Names of the 15 tithis of a paksha. The 15th of Krishna paksha is Amavasya instead.
const TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half: separation growing from 0 to 180 degrees.
    Shukla,
    /// Waning half: separation shrinking from 180 back to 0 degrees.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The start of a lunar day: the instant the elongation crossed a cell boundary.
///
/// Equality and hashing cover the full `(index, timestamp, angle)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tithi {
    /// 1-based cell index (1..=30 for 12-degree cells).
    pub index: u8,
    /// UTC instant at which this tithi begins.
    pub timestamp: DateTime<Utc>,
    /// Direction-adjusted elongation at `timestamp`, integer degrees [0, 360).
    pub angle: u16,
}

impl Tithi {
    pub fn new(index: u8, timestamp: DateTime<Utc>, angle: u16) -> Self {
        Self {
            index,
            timestamp,
            angle,
        }
    }

    /// Fortnight this tithi belongs to.
    pub fn paksha(&self) -> Paksha {
        if self.angle < 180 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 0-based traditional tithi (0..=29) whose 12-degree cell contains `angle`.
    fn traditional_cell(&self) -> u16 {
        (self.angle % 360) / 12
    }

    /// 1-based position within the paksha (1..=15).
    pub fn index_in_paksha(&self) -> u8 {
        (self.traditional_cell() % 15) as u8 + 1
    }

    /// Traditional name of the tithi containing `angle`.
    pub fn name(&self) -> &'static str {
        match self.traditional_cell() {
            29 => "Amavasya",
            cell => TITHI_NAMES[usize::from(cell % 15)],
        }
    }
}

impl Display for Tithi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:02} {} {} @ {} ({} deg)",
            self.index,
            self.paksha().name(),
            self.name(),
            self.timestamp.format("%Y-%m-%dT%H:%M:%SZ"),
            self.angle
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 9, 7, h, 0, 0).unwrap()
    }

    #[test]
    fn shukla_pratipada() {
        let t = Tithi::new(1, at(0), 0);
        assert_eq!(t.paksha(), Paksha::Shukla);
        assert_eq!(t.index_in_paksha(), 1);
        assert_eq!(t.name(), "Pratipada");
    }

    #[test]
    fn purnima_and_krishna_pratipada() {
        let purnima = Tithi::new(15, at(0), 168);
        assert_eq!(purnima.paksha(), Paksha::Shukla);
        assert_eq!(purnima.name(), "Purnima");
        assert_eq!(purnima.index_in_paksha(), 15);

        let k1 = Tithi::new(16, at(0), 180);
        assert_eq!(k1.paksha(), Paksha::Krishna);
        assert_eq!(k1.name(), "Pratipada");
        assert_eq!(k1.index_in_paksha(), 1);
    }

    #[test]
    fn amavasya() {
        let t = Tithi::new(30, at(0), 348);
        assert_eq!(t.paksha(), Paksha::Krishna);
        assert_eq!(t.name(), "Amavasya");
        assert_eq!(t.index_in_paksha(), 15);
    }

    #[test]
    fn ekadashi_krishna() {
        let t = Tithi::new(26, at(0), 300);
        assert_eq!(t.name(), "Ekadashi");
        assert_eq!(t.paksha(), Paksha::Krishna);
    }

    #[test]
    fn equality_covers_all_fields() {
        let a = Tithi::new(11, at(5), 120);
        assert_eq!(a, Tithi::new(11, at(5), 120));
        assert_ne!(a, Tithi::new(12, at(5), 120));
        assert_ne!(a, Tithi::new(11, at(6), 120));
        assert_ne!(a, Tithi::new(11, at(5), 132));

        let set: HashSet<Tithi> = [a, a, Tithi::new(11, at(5), 132)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display() {
        let s = Tithi::new(11, at(5), 120).to_string();
        assert_eq!(s, "#11 Shukla Ekadashi @ 2023-09-07T05:00:00Z (120 deg)");
    }
}
