//! Monitoring API response DTOs.
//!
//! Each type describes one item of a JSON array response and lists only the
//! fields we read. Unknown fields are ignored. Every listed field is
//! required, so an item lacking one (or carrying `null`) fails to decode and
//! is dropped by the conversion layer.

use serde::Deserialize;

use crate::domain::{InstallationId, StationId};

/// One element of the `findAll` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StationDto {
    pub(crate) id: StationId,
    pub(crate) station_name: String,
}

/// One element of the `sensors/<stationId>` response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct InstallationDto {
    pub(crate) id: InstallationId,
    pub(crate) param: ParamDto,
}

/// The measured parameter, nested under `param`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ParamDto {
    /// Short code such as `PM10` or `NO2`.
    pub(crate) param_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_ignores_extra_fields() {
        let json = r#"{
            "id": 114,
            "stationName": "Wrocław - Bartnicza",
            "gegrLat": "51.115933",
            "gegrLon": "17.141125",
            "city": { "id": 1064, "name": "Wrocław" },
            "addressStreet": "ul. Bartnicza"
        }"#;
        let dto: StationDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, StationId(114));
        assert_eq!(dto.station_name, "Wrocław - Bartnicza");
    }

    #[test]
    fn installation_reads_nested_param_code() {
        let json = r#"{
            "id": 642,
            "stationId": 114,
            "param": {
                "paramName": "dwutlenek azotu",
                "paramFormula": "NO2",
                "paramCode": "NO2",
                "idParam": 6
            }
        }"#;
        let dto: InstallationDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, InstallationId(642));
        assert_eq!(dto.param.param_code, "NO2");
    }

    #[test]
    fn missing_or_null_fields_fail() {
        assert!(serde_json::from_str::<StationDto>(r#"{"id": 1}"#).is_err());
        assert!(serde_json::from_str::<StationDto>(r#"{"id": null, "stationName": "A"}"#).is_err());
        assert!(serde_json::from_str::<InstallationDto>(r#"{"id": 1, "param": {}}"#).is_err());
        assert!(serde_json::from_str::<InstallationDto>(r#"{"param": {"paramCode": "CO"}}"#).is_err());
    }
}
