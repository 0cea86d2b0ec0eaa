// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ParseLabelError;
use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Text layout of the `Timestamp` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

// Labels compare on lowercase alphanumerics, so "Break-Even", "break_even"
// and "BreakEven" all name the same outcome.
fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseLabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_label(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize_label(v.as_str()) == wanted)
                    .ok_or_else(|| ParseLabelError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

labelled_enum!(Direction, "direction" {
    Long => "Long",
    Short => "Short",
});

labelled_enum!(
    /// Setup the trade was taken on.
    Strategy, "strategy" {
        TrendBreak => "TrendBreak",
        SupportResistanceFlip => "SupportResistanceFlip",
        SupplyDemand => "SupplyDemand",
        Fakeout => "Fakeout",
        RsiDivergence => "RsiDivergence",
        Other => "Other",
    }
);

labelled_enum!(Outcome, "outcome" {
    Win => "Win",
    Loss => "Loss",
    BreakEven => "BreakEven",
});

labelled_enum!(
    /// Emotional state at entry.
    Emotion, "emotion" {
        Calm => "Calm",
        Fomo => "FOMO",
        Revenge => "Revenge",
        Hesitant => "Hesitant",
        Overconfident => "Overconfident",
    }
);

/// One journal row. Created once when a trade is logged and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRecord {
    pub timestamp: NaiveDateTime,
    pub symbol: String,
    pub direction: Direction,
    pub strategy: Strategy,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    pub outcome: Outcome,
    pub pnl: Decimal,
    pub emotion: Emotion,
    pub notes: String,
    /// Path relative to the data directory, e.g. `images/20250102_093000.png`.
    pub image_path: Option<String>,
}

impl TradeRecord {
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Truncates a clock reading to the minute precision the journal stores.
pub fn journal_timestamp(now: NaiveDateTime) -> NaiveDateTime {
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}
