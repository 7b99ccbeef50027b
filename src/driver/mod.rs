// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device driver: one parameterized type for every device category.
//!
//! A [`DeviceDriver`] owns the mirrored state of one device and three async
//! tasks: the push pipeline (debounced command writes), the status poll loop,
//! and a faster movement tick for covers. Capability flags decide which write
//! methods a given device accepts; there are no per-category driver types.
//!
//! Writes are optimistic: the mirrored state mutates immediately, a snapshot
//! is projected to the host, and the push pipeline is signalled. If the push
//! later fails, state rolls back to the last confirmed snapshot and is
//! projected again.

mod options;
mod pipeline;
mod poller;

pub use options::{DEFAULT_DEBOUNCE_WINDOW, DEFAULT_MOVEMENT_POLL_INTERVAL, DriverOptions};

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use chrono::Utc;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::capabilities::Capabilities;
use crate::command::CommandRequest;
use crate::discovery::DeviceDescriptor;
use crate::error::{Error, Result, ValueError};
use crate::projection::StateSink;
use crate::protocol::CloudClient;
use crate::state::{LocalState, StateSnapshot};
use crate::types::{
    ClimateMode, HumidifierTarget, Position, PowerState, RemoteKey, TemperatureUnit,
};

/// Mirrored state plus the last push- or poll-confirmed copy.
pub(crate) struct PushState {
    /// The optimistic mirror the host sees.
    pub(crate) local: LocalState,
    /// Rollback point for failed pushes.
    pub(crate) confirmed: LocalState,
}

/// State shared between the driver handle and its async tasks.
pub(crate) struct DriverInner {
    pub(crate) client: CloudClient,
    pub(crate) descriptor: DeviceDescriptor,
    pub(crate) capabilities: Capabilities,
    pub(crate) options: DriverOptions,
    pub(crate) sink: Arc<dyn StateSink>,
    pub(crate) state: Mutex<PushState>,
    /// True while a command POST is in flight. Guards against overlapping
    /// pushes and suspends polling.
    pub(crate) busy: AtomicBool,
    /// Set after a successful push; the next regular poll tick is skipped so
    /// a stale backend read cannot clobber the fresh optimistic state.
    pub(crate) suppress_polls: AtomicBool,
}

impl DriverInner {
    /// Projects a snapshot, applying projection-level options.
    pub(crate) fn project(&self, state: &LocalState) -> StateSnapshot {
        let mut snapshot = StateSnapshot::project(state);
        if self.options.hide_temperature {
            snapshot.current_temperature = None;
        }
        snapshot
    }
}

/// Driver for a single discovered device.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use switchbot_cloud::driver::{DeviceDriver, DriverOptions};
/// use switchbot_cloud::discovery::DeviceDescriptor;
/// use switchbot_cloud::projection::NullSink;
/// use switchbot_cloud::protocol::CloudConfig;
/// use switchbot_cloud::types::DeviceKind;
///
/// # fn example() -> switchbot_cloud::Result<()> {
/// let client = CloudConfig::new("token").into_client()?;
/// let descriptor = DeviceDescriptor {
///     id: "C12345".to_string(),
///     name: "Bedroom Curtain".to_string(),
///     kind: DeviceKind::Curtain,
///     hub_id: "H1".to_string(),
///     raw_type: "Curtain".to_string(),
/// };
/// let mut driver = DeviceDriver::new(
///     client,
///     descriptor,
///     DriverOptions::default(),
///     Arc::new(NullSink),
/// );
/// driver.start_polling();
/// driver.set_target_position(70)?;
/// # Ok(())
/// # }
/// ```
pub struct DeviceDriver {
    inner: Arc<DriverInner>,
    push_tx: mpsc::UnboundedSender<()>,
    tasks: Vec<JoinHandle<()>>,
}

impl DeviceDriver {
    /// Creates a driver and spawns its push pipeline.
    ///
    /// Must be called from within a tokio runtime. Polling does not start
    /// until [`Self::start_polling`].
    #[must_use]
    pub fn new(
        client: CloudClient,
        descriptor: DeviceDescriptor,
        options: DriverOptions,
        sink: Arc<dyn StateSink>,
    ) -> Self {
        let capabilities = Capabilities::for_kind(descriptor.kind);
        let inner = Arc::new(DriverInner {
            client,
            descriptor,
            capabilities,
            options,
            sink,
            state: Mutex::new(PushState {
                local: LocalState::new(),
                confirmed: LocalState::new(),
            }),
            busy: AtomicBool::new(false),
            suppress_polls: AtomicBool::new(false),
        });

        let (push_tx, push_rx) = mpsc::unbounded_channel();
        let push_task = tokio::spawn(pipeline::run_push_loop(Arc::clone(&inner), push_rx));

        Self {
            inner,
            push_tx,
            tasks: vec![push_task],
        }
    }

    /// Starts the status poll loop, plus the movement tick for covers.
    ///
    /// A no-op for remote categories; the cloud has no status endpoint for
    /// them.
    pub fn start_polling(&mut self) {
        if !self.inner.capabilities.status_polling {
            return;
        }
        self.tasks
            .push(tokio::spawn(poller::run_poll_loop(Arc::clone(&self.inner))));
        if self.inner.capabilities.position {
            self.tasks.push(tokio::spawn(poller::run_movement_loop(
                Arc::clone(&self.inner),
            )));
        }
    }

    /// Returns the identity of the device this driver controls.
    #[must_use]
    pub fn descriptor(&self) -> &DeviceDescriptor {
        &self.inner.descriptor
    }

    /// Returns the capability flags of this device.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.inner.capabilities
    }

    /// Returns a snapshot of the current mirrored state.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        let guard = self.inner.state.lock();
        self.inner.project(&guard.local)
    }

    /// Polls the device status once, outside the regular schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the status request fails.
    pub async fn refresh_now(&self) -> Result<()> {
        poller::refresh_status(&self.inner).await
    }

    // ========================================================================
    // Debounced writes
    // ========================================================================

    /// Turns the device on or off.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityNotSupported`] if the device has no power
    /// control.
    pub fn set_active(&self, on: bool) -> Result<()> {
        self.check_capability(self.inner.capabilities.power)?;
        let regulates_humidity = self.inner.capabilities.humidity_control;
        self.mutate_and_push(|state| {
            state.power = PowerState::from_bool(on);
            if regulates_humidity {
                state.refresh_working_state();
            }
        });
        Ok(())
    }

    /// Requests a new cover position in percent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityNotSupported`] for non-covers, or a value
    /// error if `target` exceeds 100.
    pub fn set_target_position(&self, target: u8) -> Result<()> {
        self.check_capability(self.inner.capabilities.position)?;
        let target = Position::new(target)?;
        let now = Utc::now();
        let hold = self.inner.options.target_hold;
        self.mutate_and_push(|state| state.begin_slide(target, now, hold));
        Ok(())
    }

    /// Sets the climate setpoint, given in the current display unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityNotSupported`] if the device takes no
    /// setpoint.
    pub fn set_target_temperature(&self, value: f64) -> Result<()> {
        self.check_capability(self.inner.capabilities.climate_control)?;
        self.mutate_and_push(|state| {
            state.target_temperature = state.display_unit.to_celsius(value);
        });
        Ok(())
    }

    /// Changes the preferred temperature display unit.
    ///
    /// Purely cosmetic; nothing is pushed to the device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityNotSupported`] if the device reports no
    /// temperature.
    pub fn set_display_unit(&self, unit: TemperatureUnit) -> Result<()> {
        self.check_capability(self.inner.capabilities.temperature)?;
        self.mutate(|state| state.display_unit = unit);
        Ok(())
    }

    /// Sets the climate operating mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityNotSupported`] if the device takes no
    /// operating mode.
    pub fn set_climate_mode(&self, mode: ClimateMode) -> Result<()> {
        self.check_capability(self.inner.capabilities.climate_control)?;
        self.mutate_and_push(|state| state.climate_mode = mode);
        Ok(())
    }

    /// Switches the humidifier between auto and manual regulation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityNotSupported`] if the device does not
    /// regulate humidity.
    pub fn set_humidifier_target(&self, target: HumidifierTarget) -> Result<()> {
        self.check_capability(self.inner.capabilities.humidity_control)?;
        self.mutate_and_push(|state| {
            state.humidifier_target = target;
            state.refresh_working_state();
        });
        Ok(())
    }

    /// Sets the manual nebulization threshold in percent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityNotSupported`] if the device does not
    /// regulate humidity, or a value error if `threshold` exceeds 100.
    pub fn set_humidity_threshold(&self, threshold: u8) -> Result<()> {
        self.check_capability(self.inner.capabilities.humidity_control)?;
        if threshold > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: threshold,
            }
            .into());
        }
        self.mutate_and_push(|state| {
            state.humidity_threshold = threshold;
            state.humidifier_target = HumidifierTarget::Manual;
            state.refresh_working_state();
        });
        Ok(())
    }

    // ========================================================================
    // Momentary commands (bypass the debounce window)
    // ========================================================================

    /// Presses a Bot once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityNotSupported`] if the device has no power
    /// control, or a protocol error if the push fails.
    pub async fn press(&self) -> Result<()> {
        self.check_capability(self.inner.capabilities.power)?;
        pipeline::push_now(&self.inner, CommandRequest::press()).await?;
        Ok(())
    }

    /// Sends a remote key press.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityNotSupported`] if the device accepts no
    /// remote keys, or a protocol error if the push fails.
    pub async fn press_key(&self, key: RemoteKey) -> Result<()> {
        self.check_capability(self.inner.capabilities.remote_keys)?;
        pipeline::push_now(&self.inner, CommandRequest::remote_key(key)).await?;
        Ok(())
    }

    /// Steps the volume up.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityNotSupported`] if the device has no volume
    /// control, or a protocol error if the push fails.
    pub async fn volume_up(&self) -> Result<()> {
        self.check_capability(self.inner.capabilities.volume)?;
        pipeline::push_now(&self.inner, CommandRequest::remote_key(RemoteKey::VolumeUp)).await?;
        Ok(())
    }

    /// Steps the volume down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityNotSupported`] if the device has no volume
    /// control, or a protocol error if the push fails.
    pub async fn volume_down(&self) -> Result<()> {
        self.check_capability(self.inner.capabilities.volume)?;
        pipeline::push_now(&self.inner, CommandRequest::remote_key(RemoteKey::VolumeDown)).await?;
        Ok(())
    }

    /// Toggles swing/oscillation.
    ///
    /// The mirrored swing flag flips only after the command was actually
    /// sent; a drop due to a busy pipeline leaves it untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityNotSupported`] if the device has no swing
    /// control, or a protocol error if the push fails.
    pub async fn toggle_swing(&self) -> Result<()> {
        self.check_capability(self.inner.capabilities.swing)?;
        if pipeline::push_now(&self.inner, CommandRequest::swing()).await? {
            self.mutate(|state| state.swinging = !state.swinging);
        }
        Ok(())
    }

    /// Toggles mute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityNotSupported`] if the device has no volume
    /// control, or a protocol error if the push fails.
    pub async fn toggle_mute(&self) -> Result<()> {
        self.check_capability(self.inner.capabilities.volume)?;
        if pipeline::push_now(&self.inner, CommandRequest::set_mute()).await? {
            self.mutate(|state| state.muted = !state.muted);
        }
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn check_capability(&self, supported: bool) -> Result<()> {
        if supported {
            Ok(())
        } else {
            Err(Error::CapabilityNotSupported)
        }
    }

    /// Mutates the mirrored state and projects, without pushing.
    fn mutate<F: FnOnce(&mut LocalState)>(&self, mutation: F) {
        let snapshot = {
            let mut guard = self.inner.state.lock();
            mutation(&mut guard.local);
            self.inner.project(&guard.local)
        };
        self.inner.sink.update(&snapshot);
    }

    /// Mutates the mirrored state, projects, and signals the push pipeline.
    fn mutate_and_push<F: FnOnce(&mut LocalState)>(&self, mutation: F) {
        self.mutate(mutation);
        // The receiver lives as long as the push task; a send can only fail
        // during shutdown, where losing the signal is fine.
        let _ = self.push_tx.send(());
    }
}

impl Drop for DeviceDriver {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use super::*;
    use crate::projection::NullSink;
    use crate::protocol::CloudConfig;
    use crate::types::DeviceKind;

    struct RecordingSink {
        snapshots: StdMutex<Vec<StateSnapshot>>,
    }

    impl RecordingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                snapshots: StdMutex::new(Vec::new()),
            })
        }
    }

    impl StateSink for RecordingSink {
        fn update(&self, snapshot: &StateSnapshot) {
            self.snapshots.lock().unwrap().push(snapshot.clone());
        }
    }

    fn descriptor(kind: DeviceKind) -> DeviceDescriptor {
        DeviceDescriptor {
            id: "D1".to_string(),
            name: "Test Device".to_string(),
            kind,
            hub_id: "H1".to_string(),
            raw_type: kind.as_str().to_string(),
        }
    }

    fn offline_client() -> CloudClient {
        // Nothing listens here; pushes fail, which the tests below never
        // wait for.
        CloudConfig::new("token")
            .with_base_url("http://127.0.0.1:9")
            .into_client()
            .unwrap()
    }

    fn driver(kind: DeviceKind, sink: Arc<dyn StateSink>) -> DeviceDriver {
        DeviceDriver::new(
            offline_client(),
            descriptor(kind),
            DriverOptions::default(),
            sink,
        )
    }

    #[tokio::test]
    async fn writes_are_gated_by_capabilities() {
        let bot = driver(DeviceKind::Bot, Arc::new(NullSink));
        assert!(matches!(
            bot.set_target_position(50),
            Err(Error::CapabilityNotSupported)
        ));
        assert!(matches!(
            bot.set_target_temperature(22.0),
            Err(Error::CapabilityNotSupported)
        ));
        assert!(bot.set_active(true).is_ok());
    }

    #[tokio::test]
    async fn meter_rejects_every_write() {
        let meter = driver(DeviceKind::Meter, Arc::new(NullSink));
        assert!(matches!(
            meter.set_active(true),
            Err(Error::CapabilityNotSupported)
        ));
        assert!(matches!(
            meter.set_humidity_threshold(40),
            Err(Error::CapabilityNotSupported)
        ));
    }

    #[tokio::test]
    async fn writes_project_optimistically() {
        let sink = RecordingSink::new();
        let curtain = driver(DeviceKind::Curtain, sink.clone());
        curtain.set_target_position(70).unwrap();

        let snapshots = sink.snapshots.lock().unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].target_position, 70);
    }

    #[tokio::test]
    async fn out_of_range_position_is_rejected() {
        let curtain = driver(DeviceKind::Curtain, Arc::new(NullSink));
        assert!(matches!(
            curtain.set_target_position(150),
            Err(Error::Value(_))
        ));
    }

    #[tokio::test]
    async fn setpoint_converts_from_display_unit() {
        let sink = RecordingSink::new();
        let ac = driver(DeviceKind::AirConditioner, sink.clone());
        ac.set_display_unit(TemperatureUnit::Fahrenheit).unwrap();
        ac.set_target_temperature(86.0).unwrap();

        let snapshots = sink.snapshots.lock().unwrap();
        assert_eq!(snapshots.last().unwrap().target_temperature, 30.0);
    }

    #[tokio::test]
    async fn threshold_write_switches_to_manual() {
        let sink = RecordingSink::new();
        let humidifier = driver(DeviceKind::Humidifier, sink.clone());
        humidifier.set_humidity_threshold(45).unwrap();

        let snapshots = sink.snapshots.lock().unwrap();
        let last = snapshots.last().unwrap();
        assert_eq!(last.humidity_threshold, 45);
        assert_eq!(last.humidifier_target, HumidifierTarget::Manual);
    }

    #[tokio::test]
    async fn display_unit_change_does_not_push() {
        // No pipeline signal means no POST; with the offline client a push
        // would surface as a rollback projection. A single projection is the
        // expected shape.
        let sink = RecordingSink::new();
        let meter = driver(DeviceKind::Meter, sink.clone());
        meter.set_display_unit(TemperatureUnit::Fahrenheit).unwrap();

        let snapshots = sink.snapshots.lock().unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].display_unit, TemperatureUnit::Fahrenheit);
    }

    #[tokio::test]
    async fn remote_keys_require_the_capability() {
        let light = driver(DeviceKind::Light, Arc::new(NullSink));
        assert!(matches!(
            light.press_key(RemoteKey::Ok).await,
            Err(Error::CapabilityNotSupported)
        ));
    }
}
