// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `SwitchBot` Cloud - A Rust library to control SwitchBot devices through
//! the vendor cloud API.
//!
//! This library provides async drivers for SwitchBot physical devices (Bot,
//! Curtain, Meter, Humidifier, Smart Fan) and hub-trained infrared remotes
//! (air conditioners, fans, lights, speakers, TVs), built for embedding in a
//! smart-home host adapter.
//!
//! # Supported Features
//!
//! - **Discovery**: One-shot account inventory with hide-list filtering and
//!   stable accessory keys
//! - **Control**: Power, cover position, climate setpoint/mode, humidifier
//!   regulation, remote key presses
//! - **State mirroring**: Debounced optimistic writes with rollback, status
//!   polling, and a movement tick for covers
//! - **Projection**: A sink seam that decouples drivers from host
//!   characteristic writes
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use switchbot_cloud::config::PlatformConfig;
//! use switchbot_cloud::discovery;
//! use switchbot_cloud::driver::{DeviceDriver, DriverOptions};
//! use switchbot_cloud::projection::FnSink;
//! use switchbot_cloud::protocol::CloudConfig;
//!
//! #[tokio::main]
//! async fn main() -> switchbot_cloud::Result<()> {
//!     let config: PlatformConfig = serde_json::from_str(
//!         r#"{ "credentials": { "openToken": "secret" }, "refreshRate": 300 }"#,
//!     ).map_err(switchbot_cloud::ParseError::from)?;
//!     config.validate()?;
//!
//!     let client = CloudConfig::new(config.token()?).into_client()?;
//!     let options = DriverOptions::from_config(&config);
//!
//!     let mut drivers = Vec::new();
//!     for descriptor in discovery::discover_devices(&client, &config).await? {
//!         let name = descriptor.name.clone();
//!         let sink = Arc::new(FnSink::new(move |snapshot| {
//!             println!("{name}: {snapshot:?}");
//!         }));
//!         let mut driver =
//!             DeviceDriver::new(client.clone(), descriptor, options.clone(), sink);
//!         driver.start_polling();
//!         drivers.push(driver);
//!     }
//!
//!     // Drivers poll in the background for as long as they are kept alive.
//!     std::future::pending::<()>().await;
//!     Ok(())
//! }
//! ```
//!
//! # Writing to a device
//!
//! Writes mutate the mirrored state immediately and are pushed to the cloud
//! after a short quiet window, so a burst of slider events costs one request:
//!
//! ```no_run
//! # use switchbot_cloud::driver::DeviceDriver;
//! # fn example(driver: DeviceDriver) -> switchbot_cloud::Result<()> {
//! driver.set_target_position(30)?;
//! driver.set_target_position(50)?;
//! driver.set_target_position(70)?; // one setPosition command, carrying 70
//! # Ok(())
//! # }
//! ```

mod capabilities;
pub mod command;
pub mod config;
pub mod discovery;
pub mod driver;
pub mod error;
pub mod projection;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use capabilities::Capabilities;
pub use command::CommandRequest;
pub use config::PlatformConfig;
pub use discovery::{DeviceDescriptor, discover_devices};
pub use driver::{DeviceDriver, DriverOptions};
pub use error::{ConfigError, Error, ParseError, ProtocolError, Result, ValueError};
pub use projection::{FnSink, NullSink, StateSink};
pub use protocol::{CloudClient, CloudConfig};
pub use response::{ApiResponse, DeviceInventory, DeviceStatus};
pub use state::{LocalState, StateSnapshot};
pub use types::{
    ClimateMode, DeviceKind, HumidifierTarget, HumidifierWorkingState, MovementState, Position,
    PowerState, RemoteKey, TemperatureUnit,
};
