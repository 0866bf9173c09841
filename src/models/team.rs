// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Team selection model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// The fixed set of sports a user can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Soccer,
    Basketball,
    Baseball,
    AmericanFootball,
    Cricket,
    Hockey,
    Rugby,
    Volleyball,
    WaterPolo,
}

impl Sport {
    /// All sports, in the order they are presented.
    pub const ALL: [Sport; 9] = [
        Sport::Soccer,
        Sport::Basketball,
        Sport::Baseball,
        Sport::AmericanFootball,
        Sport::Cricket,
        Sport::Hockey,
        Sport::Rugby,
        Sport::Volleyball,
        Sport::WaterPolo,
    ];

    /// Value stored in Firestore and used in search queries.
    pub fn value(self) -> &'static str {
        match self {
            Sport::Soccer => "soccer",
            Sport::Basketball => "basketball",
            Sport::Baseball => "baseball",
            Sport::AmericanFootball => "american_football",
            Sport::Cricket => "cricket",
            Sport::Hockey => "hockey",
            Sport::Rugby => "rugby",
            Sport::Volleyball => "volleyball",
            Sport::WaterPolo => "water_polo",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Sport::Soccer => "Soccer",
            Sport::Basketball => "Basketball",
            Sport::Baseball => "Baseball",
            Sport::AmericanFootball => "American Football",
            Sport::Cricket => "Cricket",
            Sport::Hockey => "Hockey",
            Sport::Rugby => "Rugby",
            Sport::Volleyball => "Volleyball",
            Sport::WaterPolo => "Water Polo",
        }
    }

    pub fn options() -> Vec<SportOption> {
        Sport::ALL
            .iter()
            .map(|sport| SportOption {
                value: sport.value().to_string(),
                label: sport.label().to_string(),
            })
            .collect()
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sport: {0}")]
pub struct UnknownSport(pub String);

impl FromStr for Sport {
    type Err = UnknownSport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sport::ALL
            .into_iter()
            .find(|sport| sport.value() == s)
            .ok_or_else(|| UnknownSport(s.to_string()))
    }
}

/// A sport as presented in the picker.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "shell/src/lib/generated/")
)]
pub struct SportOption {
    pub value: String,
    pub label: String,
}

/// Stored team selection in Firestore (`sports_teams` collection).
///
/// `sport` stays a plain string: the store does not enforce the candidate
/// set, so records written elsewhere may carry any value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSelection {
    /// Owner (Firebase uid)
    pub user_id: String,
    /// Sport value, e.g. "soccer"
    pub sport: String,
    /// Team name as entered (trimmed)
    #[serde(rename = "team")]
    pub team_name: String,
    /// When the selection was added
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// A validated team selection ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeamSelection {
    pub user_id: String,
    pub sport: Sport,
    pub team_name: String,
}

impl NewTeamSelection {
    /// Stamp the selection with its creation time.
    pub fn into_record(self, created_at: DateTime<Utc>) -> TeamSelection {
        TeamSelection {
            user_id: self.user_id,
            sport: self.sport.value().to_string(),
            team_name: self.team_name,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sport_round_trips_through_value() {
        for sport in Sport::ALL {
            assert_eq!(sport.value().parse::<Sport>(), Ok(sport));
        }
    }

    #[test]
    fn test_unknown_sport_rejected() {
        assert!("curling".parse::<Sport>().is_err());
        assert!("Soccer".parse::<Sport>().is_err());
        assert!("".parse::<Sport>().is_err());
    }

    #[test]
    fn test_options_keep_presentation_order() {
        let options = Sport::options();
        assert_eq!(options.len(), 9);
        assert_eq!(options[0].value, "soccer");
        assert_eq!(options[3].label, "American Football");
        assert_eq!(options[8].value, "water_polo");
    }

    #[test]
    fn test_into_record_uses_wire_value() {
        let now = Utc::now();
        let record = NewTeamSelection {
            user_id: "uid-1".to_string(),
            sport: Sport::AmericanFootball,
            team_name: "Packers".to_string(),
        }
        .into_record(now);

        assert_eq!(record.sport, "american_football");
        assert_eq!(record.team_name, "Packers");
        assert_eq!(record.created_at, now);
    }
}
