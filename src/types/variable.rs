//! Defines the `Variable` enum, the closed set of measurement channels reported
//! by Envista stations, together with the static catalog describing each one.

use std::fmt;

/// Static description of one Envista measurement channel: its on-wire code,
/// measuring unit, and a human-readable description.
///
/// Descriptors live in a process-wide read-only table; [`describe_variable`]
/// and [`Variable::descriptor`] hand out `'static` references into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableDescriptor {
    /// The channel name as it appears in API payloads (case-sensitive).
    pub code: &'static str,
    /// Measuring unit, e.g. `"°C"` or `"m/s"`.
    pub unit: &'static str,
    /// What the channel measures.
    pub description: &'static str,
}

impl fmt::Display for VariableDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Code: {} - Unit: ({}) - Description: {}",
            self.code, self.unit, self.description
        )
    }
}

/// One of the measurement channels known to be reported by Envista stations.
///
/// The API reports channels by name inside each reading's `channels` array.
/// This enum closes over the known set so the mapping from channel name to
/// [`Reading`](crate::Reading) field is checked at compile time; names that
/// are not in this set are skipped during decoding.
///
/// Use [`Variable::from_channel_name`] to map an on-wire name to a variant.
/// Names are matched exactly, including the inconsistent casing the service
/// uses (`WS1mm` but `Ws10mm`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// `BP`: average pressure at station level, in hPa.
    Bp,
    /// `Diff`: diffused radiation, in w/m².
    Diff,
    /// `Grad`: global radiation, in w/m².
    Grad,
    /// `NIP`: direct radiation, in w/m².
    Nip,
    /// `Rain`: rainfall, in mm.
    Rain,
    /// `Rain_1_min`: rainfall per minute, in mm.
    Rain1Min,
    /// `WSmax`: gust wind speed, in m/s.
    WsMax,
    /// `WDmax`: gust wind direction, in degrees.
    WdMax,
    /// `WS`: wind speed, in m/s.
    Ws,
    /// `WD`: wind direction, in degrees.
    Wd,
    /// `STDwd`: standard deviation of wind direction, in degrees.
    StdWd,
    /// `TD`: dry temperature, in °C.
    Td,
    /// `RH`: relative humidity, in %.
    Rh,
    /// `TDmax`: maximum temperature, in °C.
    TdMax,
    /// `TDmin`: minimum temperature, in °C.
    TdMin,
    /// `WS1mm`: maximum 1 minute wind speed, in m/s.
    Ws1Mm,
    /// `Ws10mm`: maximum 10 minutes wind speed, in m/s.
    Ws10Mm,
    /// `Time`: end time of the `Ws10mm` sample, encoded as HHMM.
    Time,
    /// `TG`: grass minimum temperature, in °C.
    Tg,
    /// `TW`: wet bulb temperature, in °C.
    Tw,
}

/// Catalog of every known channel, indexed by `Variable` discriminant.
static CATALOG: [VariableDescriptor; 20] = [
    VariableDescriptor {
        code: "BP",
        unit: "hPa",
        description: "Average pressure at station level",
    },
    VariableDescriptor {
        code: "Diff",
        unit: "w/m²",
        description: "Diffused radiation",
    },
    VariableDescriptor {
        code: "Grad",
        unit: "w/m²",
        description: "Global radiation",
    },
    VariableDescriptor {
        code: "NIP",
        unit: "w/m²",
        description: "Direct radiation",
    },
    VariableDescriptor {
        code: "Rain",
        unit: "mm",
        description: "Rainfall",
    },
    VariableDescriptor {
        code: "Rain_1_min",
        unit: "mm",
        description: "Rainfall per minute",
    },
    VariableDescriptor {
        code: "WSmax",
        unit: "m/s",
        description: "Gust wind speed",
    },
    VariableDescriptor {
        code: "WDmax",
        unit: "deg",
        description: "Gust wind direction",
    },
    VariableDescriptor {
        code: "WS",
        unit: "m/s",
        description: "Wind speed",
    },
    VariableDescriptor {
        code: "WD",
        unit: "deg",
        description: "Wind direction",
    },
    VariableDescriptor {
        code: "STDwd",
        unit: "deg",
        description: "Standard deviation wind direction",
    },
    VariableDescriptor {
        code: "TD",
        unit: "°C",
        description: "Temperature",
    },
    VariableDescriptor {
        code: "RH",
        unit: "%",
        description: "Relative humidity",
    },
    VariableDescriptor {
        code: "TDmax",
        unit: "°C",
        description: "Maximum temperature",
    },
    VariableDescriptor {
        code: "TDmin",
        unit: "°C",
        description: "Minimum temperature",
    },
    VariableDescriptor {
        code: "WS1mm",
        unit: "m/s",
        description: "Maximum 1 minute wind speed",
    },
    VariableDescriptor {
        code: "Ws10mm",
        unit: "m/s",
        description: "Maximum 10 minutes wind speed",
    },
    VariableDescriptor {
        code: "Time",
        unit: "hhmm",
        description: "End time of Ws10mm",
    },
    VariableDescriptor {
        code: "TG",
        unit: "°C",
        description: "Grass minimum temperature",
    },
    VariableDescriptor {
        code: "TW",
        unit: "°C",
        description: "Wet bulb temperature",
    },
];

impl Variable {
    /// Every known variable, in catalog order.
    pub const ALL: [Variable; 20] = [
        Variable::Bp,
        Variable::Diff,
        Variable::Grad,
        Variable::Nip,
        Variable::Rain,
        Variable::Rain1Min,
        Variable::WsMax,
        Variable::WdMax,
        Variable::Ws,
        Variable::Wd,
        Variable::StdWd,
        Variable::Td,
        Variable::Rh,
        Variable::TdMax,
        Variable::TdMin,
        Variable::Ws1Mm,
        Variable::Ws10Mm,
        Variable::Time,
        Variable::Tg,
        Variable::Tw,
    ];

    /// Maps an on-wire channel name to its variable.
    ///
    /// Matching is exact and case-sensitive, since the service distinguishes
    /// e.g. `WS` from `WSmax`. Returns `None` for names outside the known set.
    pub fn from_channel_name(name: &str) -> Option<Self> {
        match name {
            "BP" => Some(Variable::Bp),
            "Diff" => Some(Variable::Diff),
            "Grad" => Some(Variable::Grad),
            "NIP" => Some(Variable::Nip),
            "Rain" => Some(Variable::Rain),
            "Rain_1_min" => Some(Variable::Rain1Min),
            "WSmax" => Some(Variable::WsMax),
            "WDmax" => Some(Variable::WdMax),
            "WS" => Some(Variable::Ws),
            "WD" => Some(Variable::Wd),
            "STDwd" => Some(Variable::StdWd),
            "TD" => Some(Variable::Td),
            "RH" => Some(Variable::Rh),
            "TDmax" => Some(Variable::TdMax),
            "TDmin" => Some(Variable::TdMin),
            "WS1mm" => Some(Variable::Ws1Mm),
            "Ws10mm" => Some(Variable::Ws10Mm),
            "Time" => Some(Variable::Time),
            "TG" => Some(Variable::Tg),
            "TW" => Some(Variable::Tw),
            _ => None,
        }
    }

    /// Returns the static descriptor for this variable.
    pub fn descriptor(self) -> &'static VariableDescriptor {
        &CATALOG[self as usize]
    }

    /// The channel name as it appears in API payloads.
    pub fn code(self) -> &'static str {
        self.descriptor().code
    }

    /// The measuring unit of this variable.
    pub fn unit(self) -> &'static str {
        self.descriptor().unit
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returns the descriptors of every meteorological variable collected by the
/// stations, in catalog order.
pub fn list_variable_descriptors() -> &'static [VariableDescriptor] {
    &CATALOG
}

/// Looks up the descriptor for a channel name, e.g. `"TD"`.
///
/// Returns `None` for names outside the known set.
pub fn describe_variable(code: &str) -> Option<&'static VariableDescriptor> {
    Variable::from_channel_name(code).map(Variable::descriptor)
}
