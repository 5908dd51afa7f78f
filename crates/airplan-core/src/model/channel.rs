// ── Band and channel domain types ──
//
// Channel sets are static configuration, never derived from the
// facility. 2.4 GHz channels are 5 MHz apart but 20 MHz wide, so only
// combinations with >= 25 MHz of center separation are mutually clean;
// the 5 GHz set is gridded and non-overlapping by construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PlanError;

/// Frequency band a radio operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    /// 2.4 GHz -- three non-overlapping channels, long reach, crowded.
    Band24,
    /// 5 GHz -- larger channel set, shorter reach, cleaner spectrum.
    Band5,
}

impl Band {
    /// The default non-overlapping channel set for this band.
    ///
    /// 5 GHz is the common non-DFS enterprise set; DFS channels stay
    /// out because the engine has no radar-event model.
    pub fn default_channels(&self) -> &'static [u16] {
        match self {
            Self::Band24 => &[1, 6, 11],
            Self::Band5 => &[36, 40, 44, 48, 149, 153, 157, 161],
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Band24 => write!(f, "2.4GHz"),
            Self::Band5 => write!(f, "5GHz"),
        }
    }
}

/// Channel center frequency in MHz.
pub fn center_frequency_mhz(band: Band, channel: u16) -> u16 {
    match band {
        // Channel 1 sits at 2412 MHz, 5 MHz per channel step.
        Band::Band24 => 2407 + 5 * channel,
        Band::Band5 => 5000 + 5 * channel,
    }
}

/// Spectral overlap between two channels of the same band, in percent.
///
/// 2.4 GHz: 20 MHz-wide channels need >= 25 MHz of center separation to
/// be clean; anything closer overlaps proportionally. 5 GHz channels
/// either coincide or are clean.
pub fn overlap_pct(band: Band, a: u16, b: u16) -> f64 {
    match band {
        Band::Band24 => {
            let separation_mhz = f64::from(a.abs_diff(b)) * 5.0;
            if separation_mhz >= 25.0 {
                0.0
            } else {
                (25.0 - separation_mhz) / 25.0 * 100.0
            }
        }
        Band::Band5 => {
            if a == b {
                100.0
            } else {
                0.0
            }
        }
    }
}

/// Ordered set of mutually non-overlapping channels configured for one
/// band. The order is the rotation order the channel assigner uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSet {
    pub band: Band,
    pub channels: Vec<u16>,
}

impl ChannelSet {
    /// Validate and build a channel set.
    ///
    /// 2.4 GHz accepts any mutually clean subset of channels 1-11;
    /// 5 GHz accepts members of the non-DFS enterprise set.
    pub fn new(band: Band, channels: Vec<u16>) -> Result<Self, PlanError> {
        let field = format!("{band} channel set");

        if channels.is_empty() {
            return Err(PlanError::InvalidConfig {
                field,
                reason: "must contain at least one channel".into(),
            });
        }

        for (i, &ch) in channels.iter().enumerate() {
            let legal = match band {
                Band::Band24 => (1..=11).contains(&ch),
                Band::Band5 => band.default_channels().contains(&ch),
            };
            if !legal {
                return Err(PlanError::InvalidConfig {
                    field,
                    reason: format!("channel {ch} is not assignable on {band}"),
                });
            }

            for &other in &channels[..i] {
                let overlap = overlap_pct(band, ch, other);
                if overlap > 0.0 {
                    return Err(PlanError::InvalidConfig {
                        field,
                        reason: format!(
                            "channels {other} and {ch} overlap by {overlap:.0}%"
                        ),
                    });
                }
            }
        }

        Ok(Self { band, channels })
    }

    /// The band's default set.
    pub fn default_for(band: Band) -> Self {
        Self {
            band,
            channels: band.default_channels().to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
