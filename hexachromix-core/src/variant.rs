//! Team variants
//!
//! A variant groups colors into teams that share one outcome. It never
//! changes which moves are legal.

use crate::color::{Color, COLOR_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How colors are grouped into teams
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Two teams of three around R and C: MRY against GCB
    #[default]
    #[serde(rename = "MRY")]
    Mry,
    /// Three pairs: MR, YG, CB
    #[serde(rename = "MR")]
    Mr,
    /// No teams, every color plays for itself
    #[serde(rename = "R")]
    Solo,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Mry, Variant::Mr, Variant::Solo];

    /// HFEN token
    pub const fn token(self) -> &'static str {
        match self {
            Variant::Mry => "MRY",
            Variant::Mr => "MR",
            Variant::Solo => "R",
        }
    }

    /// Team `color` plays for
    pub fn team(self, color: Color) -> Team {
        match self {
            Variant::Mry => {
                let anchor = match color {
                    Color::Magenta | Color::Red | Color::Yellow => Color::Red,
                    _ => Color::Cyan,
                };
                Team::of(&[anchor.previous(), anchor, anchor.next()])
            }
            Variant::Mr => {
                let pair = (color.index() + 1) % COLOR_COUNT / 2;
                let first = Color::from_index(pair * 2 + COLOR_COUNT - 1);
                Team::of(&[first, first.next()])
            }
            Variant::Solo => Team::of(&[color]),
        }
    }

    /// Every team in this variant, in order of first member
    pub fn teams(self) -> Vec<Team> {
        let mut teams: Vec<Team> = Vec::new();
        for color in Color::ALL {
            let team = self.team(color);
            if !teams.contains(&team) {
                teams.push(team);
            }
        }
        teams
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.token() == s)
            .ok_or_else(|| s.to_string())
    }
}

// ============================================================================
// TEAM
// ============================================================================

/// Set of colors sharing an outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Team {
    members: u8,
}

impl Team {
    fn of(colors: &[Color]) -> Self {
        Self {
            members: colors.iter().fold(0, |m, c| m | c.bit()),
        }
    }

    pub fn contains(self, color: Color) -> bool {
        self.members & color.bit() != 0
    }

    /// Members in rotation order, starting from the first one whose
    /// predecessor is not on the team (so MRY, not RYM)
    pub fn colors(self) -> impl Iterator<Item = Color> {
        let start = Color::ALL
            .into_iter()
            .find(|&c| self.contains(c) && !self.contains(c.previous()))
            .unwrap_or(Color::Red);
        (0..COLOR_COUNT)
            .map(move |step| start.offset(step))
            .filter(move |&c| self.contains(c))
    }

    pub fn len(self) -> usize {
        self.members.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.members == 0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.colors().try_for_each(|c| write!(f, "{}", c.letter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_names(variant: Variant) -> Vec<String> {
        Color::ALL
            .iter()
            .map(|&c| variant.team(c).to_string())
            .collect()
    }

    #[test]
    fn test_mry_teams() {
        assert_eq!(team_names(Variant::Mry), ["MRY", "MRY", "GCB", "GCB", "GCB", "MRY"]);
    }

    #[test]
    fn test_mr_teams() {
        assert_eq!(team_names(Variant::Mr), ["MR", "YG", "YG", "CB", "CB", "MR"]);
    }

    #[test]
    fn test_solo_teams() {
        assert_eq!(team_names(Variant::Solo), ["R", "Y", "G", "C", "B", "M"]);
    }

    #[test]
    fn test_teams_partition_colors() {
        for variant in Variant::ALL {
            let teams = variant.teams();
            assert_eq!(teams.iter().map(|t| t.len()).sum::<usize>(), COLOR_COUNT);
            for color in Color::ALL {
                assert_eq!(teams.iter().filter(|t| t.contains(color)).count(), 1);
            }
        }
        assert_eq!(Variant::Mry.teams().len(), 2);
        assert_eq!(Variant::Mr.teams().len(), 3);
        assert_eq!(Variant::Solo.teams().len(), 6);
    }

    #[test]
    fn test_variant_tokens() {
        for variant in Variant::ALL {
            assert_eq!(variant.token().parse::<Variant>(), Ok(variant));
        }
        assert!("GCB".parse::<Variant>().is_err());
        assert!("".parse::<Variant>().is_err());
    }

    #[test]
    fn test_variant_serde() {
        assert_eq!(serde_json::to_string(&Variant::Mr).unwrap(), "\"MR\"");
        let v: Variant = serde_json::from_str("\"R\"").unwrap();
        assert_eq!(v, Variant::Solo);
    }
}
