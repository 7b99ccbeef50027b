// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device status snapshot.

/// A polled status snapshot of a physical device.
///
/// All category-specific fields are optional; the cloud only populates the
/// ones relevant to the device type. The snapshot is the sole source of
/// truth for host-visible state until superseded by the next successful poll.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceStatus {
    /// Device identifier.
    pub device_id: String,
    /// Device type string.
    pub device_type: String,
    /// Parent hub identifier.
    pub hub_device_id: String,
    /// On/off state (Bot, Plug, Humidifier). Lowercase `"on"` / `"off"`.
    pub power: Option<String>,
    /// Humidity percentage (Meter, Humidifier).
    pub humidity: Option<f64>,
    /// Temperature in Celsius (Meter, Humidifier).
    pub temperature: Option<f64>,
    /// Atomization efficiency percentage (Humidifier).
    pub nebulization_efficiency: Option<f64>,
    /// Auto mode flag (Humidifier).
    pub auto: Option<bool>,
    /// Safety lock flag (Humidifier).
    pub child_lock: Option<bool>,
    /// Muted flag (Humidifier).
    pub sound: Option<bool>,
    /// Calibration flag (Curtain).
    pub calibrate: Option<bool>,
    /// Grouped-curtain flag (Curtain).
    pub group: Option<bool>,
    /// Movement-in-progress flag (Curtain).
    pub moving: Option<bool>,
    /// Slide position percentage, 0 at the calibrated open side (Curtain).
    pub slide_position: Option<f64>,
    /// Fan mode (Smart Fan).
    pub mode: Option<u8>,
    /// Fan speed (Smart Fan).
    pub speed: Option<u8>,
    /// Swinging flag (Smart Fan).
    pub shaking: Option<bool>,
    /// Swing direction (Smart Fan).
    pub shake_center: Option<String>,
    /// Swing range in degrees (Smart Fan).
    pub shake_range: Option<String>,
}

impl DeviceStatus {
    /// Returns `true` if the reported power string is `"on"`.
    #[must_use]
    pub fn is_powered_on(&self) -> bool {
        self.power.as_deref() == Some("on")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_curtain_status() {
        let status: DeviceStatus = serde_json::from_str(
            r#"{
                "deviceId": "C12345",
                "deviceType": "Curtain",
                "hubDeviceId": "H1",
                "calibrate": true,
                "group": false,
                "moving": true,
                "slidePosition": 30
            }"#,
        )
        .unwrap();

        assert_eq!(status.device_type, "Curtain");
        assert_eq!(status.slide_position, Some(30.0));
        assert_eq!(status.moving, Some(true));
        assert!(status.power.is_none());
    }

    #[test]
    fn parses_humidifier_status() {
        let status: DeviceStatus = serde_json::from_str(
            r#"{
                "deviceId": "HUM1",
                "deviceType": "Humidifier",
                "hubDeviceId": "H1",
                "power": "on",
                "humidity": 52,
                "temperature": 21.5,
                "nebulizationEfficiency": 45,
                "auto": false,
                "childLock": true,
                "sound": false
            }"#,
        )
        .unwrap();

        assert!(status.is_powered_on());
        assert_eq!(status.humidity, Some(52.0));
        assert_eq!(status.nebulization_efficiency, Some(45.0));
        assert_eq!(status.auto, Some(false));
        assert_eq!(status.child_lock, Some(true));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let status: DeviceStatus = serde_json::from_str(r#"{ "deviceId": "B1" }"#).unwrap();
        assert!(!status.is_powered_on());
        assert!(status.humidity.is_none());
        assert!(status.slide_position.is_none());
    }
}
