mod decode;
mod envista;
mod error;
mod types;
mod urls;

pub use envista::ImsEnvista;
pub use error::ImsEnvistaError;

pub use decode::error::DecodeError;
pub use decode::{
    region_info_from_json, regions_from_json, station_info_from_json, station_readings_from_json,
    stations_from_json,
};

pub use types::reading::{Reading, StationReadingSet};
pub use types::station::{Location, Monitor, RegionInfo, StationInfo};
pub use types::variable::{
    describe_variable, list_variable_descriptors, Variable, VariableDescriptor,
};
