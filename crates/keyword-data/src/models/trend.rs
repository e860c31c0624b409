use serde::{Deserialize, Serialize};

/// Device category understood by the trend service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Device {
    #[serde(rename = "pc")]
    Pc,
    #[serde(rename = "mo")]
    Mobile,
}

impl Device {
    /// Wire value sent in the `device` field.
    pub fn as_param(&self) -> &'static str {
        match self {
            Device::Pc => "pc",
            Device::Mobile => "mo",
        }
    }
}

/// One point of a weekly trend series.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendSample {
    pub device: Device,
    pub ratio: f64,
    pub week_index: usize,
}

/// Reduced trend scalars for both devices. `None` means no data.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceTrends {
    pub pc: Option<f64>,
    pub mobile: Option<f64>,
}
