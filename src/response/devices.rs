// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device inventory types returned by the `/devices` endpoint.

/// The full vendor inventory: physical devices plus infrared remotes.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceInventory {
    /// Physical devices.
    pub device_list: Vec<DeviceRecord>,
    /// Virtual infrared remote devices.
    pub infrared_remote_list: Vec<RemoteRecord>,
}

/// A physical device as enumerated by the cloud.
///
/// Descriptor fields are immutable once discovered.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceRecord {
    /// Device identifier.
    pub device_id: String,
    /// Display name.
    pub device_name: String,
    /// Device type string (e.g. `"Curtain"`).
    pub device_type: String,
    /// Whether the cloud service is enabled for this device.
    pub enable_cloud_service: bool,
    /// Parent hub identifier.
    pub hub_device_id: String,
    /// Paired/grouped curtain device IDs (Curtain only).
    pub curtain_devices_ids: Vec<String>,
    /// Calibration flag (Curtain only).
    pub calibrate: bool,
    /// Grouped flag (Curtain only).
    pub group: bool,
    /// Master-of-group flag (Curtain only).
    pub master: bool,
    /// Opening direction (Curtain only).
    pub open_direction: String,
}

/// A virtual infrared remote as enumerated by the cloud.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteRecord {
    /// Device identifier.
    pub device_id: String,
    /// Display name.
    pub device_name: String,
    /// Remote type string (e.g. `"Air Conditioner"`, `"DIY Fan"`).
    pub remote_type: String,
    /// Parent hub identifier.
    pub hub_device_id: String,
}
