// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One-shot device enumeration at startup.
//!
//! Fetches the vendor inventory, drops hidden and unsupported entries, and
//! maps the rest to [`DeviceDescriptor`]s the host can build drivers from.
//! Discovery runs once; there is no live re-enumeration.

use uuid::Uuid;

use crate::config::PlatformConfig;
use crate::error::Result;
use crate::protocol::CloudClient;
use crate::response::{DeviceRecord, RemoteRecord};
use crate::types::DeviceKind;

/// Immutable identity of a discovered device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    /// Vendor device identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Mapped device category.
    pub kind: DeviceKind,
    /// Parent hub identifier.
    pub hub_id: String,
    /// The raw vendor type string (kept for diagnostics; `DIY ` prefixes
    /// and similar are preserved here).
    pub raw_type: String,
}

impl DeviceDescriptor {
    /// Returns a stable accessory key for this device.
    ///
    /// Derived from name, id, raw type, and hub, so the same physical device
    /// maps to the same host accessory across restarts.
    #[must_use]
    pub fn accessory_uuid(&self) -> Uuid {
        let seed = format!(
            "{}-{}-{}-{}",
            self.name, self.id, self.raw_type, self.hub_id
        );
        Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes())
    }
}

/// Enumerates all supported devices visible to the configured account.
///
/// Hidden devices (by name) and unsupported categories are skipped; skips
/// are logged, never errors. The configuration must have been validated.
///
/// # Errors
///
/// Returns an error if the inventory request fails.
pub async fn discover_devices(
    client: &CloudClient,
    config: &PlatformConfig,
) -> Result<Vec<DeviceDescriptor>> {
    let inventory = client.devices().await?;

    if config.device_discovery {
        tracing::info!(
            devices = inventory.device_list.len(),
            remotes = inventory.infrared_remote_list.len(),
            "Inventory fetched",
        );
        for device in &inventory.device_list {
            tracing::info!(
                id = %device.device_id,
                name = %device.device_name,
                device_type = %device.device_type,
                "Physical device",
            );
        }
        for remote in &inventory.infrared_remote_list {
            tracing::info!(
                id = %remote.device_id,
                name = %remote.device_name,
                remote_type = %remote.remote_type,
                "Infrared remote",
            );
        }
    }

    let mut descriptors = Vec::new();
    for device in inventory.device_list {
        if let Some(descriptor) = map_device(config, &device) {
            descriptors.push(descriptor);
        }
    }
    for remote in inventory.infrared_remote_list {
        if let Some(descriptor) = map_remote(config, &remote) {
            descriptors.push(descriptor);
        }
    }

    tracing::info!(count = descriptors.len(), "Discovery complete");
    Ok(descriptors)
}

fn map_device(config: &PlatformConfig, device: &DeviceRecord) -> Option<DeviceDescriptor> {
    if config.is_hidden(&device.device_name) {
        tracing::debug!(name = %device.device_name, "Device hidden by configuration");
        return None;
    }
    let Some(kind) = DeviceKind::from_device_type(&device.device_type) else {
        tracing::info!(
            name = %device.device_name,
            device_type = %device.device_type,
            "Unsupported device type, skipping",
        );
        return None;
    };
    if !device.enable_cloud_service {
        tracing::warn!(
            name = %device.device_name,
            "Cloud service is disabled for this device; status and commands may fail",
        );
    }
    Some(DeviceDescriptor {
        id: device.device_id.clone(),
        name: device.device_name.clone(),
        kind,
        hub_id: device.hub_device_id.clone(),
        raw_type: device.device_type.clone(),
    })
}

fn map_remote(config: &PlatformConfig, remote: &RemoteRecord) -> Option<DeviceDescriptor> {
    if config.is_hidden(&remote.device_name) {
        tracing::debug!(name = %remote.device_name, "Remote hidden by configuration");
        return None;
    }
    let Some(kind) = DeviceKind::from_remote_type(&remote.remote_type) else {
        tracing::info!(
            name = %remote.device_name,
            remote_type = %remote.remote_type,
            "Unsupported remote type, skipping",
        );
        return None;
    };
    Some(DeviceDescriptor {
        id: remote.device_id.clone(),
        name: remote.device_name.clone(),
        kind,
        hub_id: remote.hub_device_id.clone(),
        raw_type: remote.remote_type.clone(),
    })
}
