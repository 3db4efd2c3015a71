//! Per-invocation session setup.
//!
//! Every API command starts by establishing a session: load credentials,
//! load (and refresh) the cached token, and resolve the playback device the
//! command targets. Each CLI run is a fresh process; nothing here outlives
//! the command.

use std::time::Duration;

use tabled::Table;
use tokio::time::sleep;

use crate::{
    config::Credentials,
    error,
    management::TokenManager,
    prompt, spotify,
    types::{Device, DeviceTableRow},
    warning,
};

/// How a command uses the playback device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceNeed {
    /// No device involved (config, playlist metadata, display-only commands).
    None,
    /// Needs a device and wants playback running afterwards.
    Playback,
    /// Needs a registered device but not audible playback; playback gets
    /// paused again right after a transfer activates the device. Commands
    /// that show a table and prompt before playing anything use this, so a
    /// forced-play transfer never leaves audio running while the user reads.
    Registered,
}

impl DeviceNeed {
    /// Whether activating an inactive device should be followed by a pause.
    pub fn pauses_after_transfer(self) -> bool {
        self == DeviceNeed::Registered
    }
}

pub struct Session {
    token_manager: TokenManager,
    pub user: String,
    pub device_id: Option<String>,
}

impl Session {
    /// Establishes a session for one command invocation.
    ///
    /// `device` is the explicit `--device` value (or environment override);
    /// when absent and the command needs a device, the device list is
    /// fetched and resolved interactively. Credential or token failures
    /// abort with a hint to run `spoticli cfg` / `spoticli auth`.
    pub async fn establish(device: Option<String>, need: DeviceNeed) -> Session {
        let credentials = match Credentials::load() {
            Ok(credentials) => credentials,
            Err(_) => error!("Authorization failed. Try running 'spoticli cfg'."),
        };
        let user = credentials.user_id.clone();

        let mut token_manager = match TokenManager::load(credentials).await {
            Ok(t) => t,
            Err(e) => {
                error!(
                    "Failed to load token. Please run spoticli auth\n Error: {}",
                    e
                );
            }
        };

        let mut device_id = device;
        if need != DeviceNeed::None && device_id.is_none() {
            let token = token_manager.get_valid_token().await;
            let devices = match spotify::player::devices(&token).await {
                Ok(devices) => devices,
                Err(e) => error!("Failed to fetch devices: {}", e),
            };
            device_id = resolve_device(&token, devices, need).await;
        }

        Session {
            token_manager,
            user,
            device_id,
        }
    }

    pub async fn token(&mut self) -> String {
        self.token_manager.get_valid_token().await
    }

    pub fn device(&self) -> Option<&str> {
        self.device_id.as_deref()
    }
}

/// Picks the device a command should target.
///
/// An already active device needs no explicit targeting, so `None` comes
/// back. An inactive device is activated by transferring playback to it with
/// forced play, then optionally paused again, then given a short moment for
/// the upstream state to settle.
async fn resolve_device(token: &str, devices: Vec<Device>, need: DeviceNeed) -> Option<String> {
    if devices.is_empty() {
        error!("No devices were found. Verify the Spotify client is open on a device.");
    }

    if devices.iter().any(|d| d.is_active) {
        return None;
    }

    let index = if devices.len() == 1 {
        0
    } else {
        let rows: Vec<DeviceTableRow> = devices
            .iter()
            .enumerate()
            .map(|(index, d)| DeviceTableRow {
                index,
                name: d.name.clone(),
                kind: d.kind.clone(),
            })
            .collect();
        println!("{}", Table::new(rows));

        prompt::prompt_index("Enter the index of the device to activate", devices.len())
    };

    let Some(device_id) = devices[index].id.clone() else {
        error!("The selected device does not expose an id.");
    };

    if let Err(e) = spotify::player::transfer_playback(token, &device_id, true).await {
        error!("Failed to transfer playback to the device: {}", e);
    }
    if need.pauses_after_transfer() {
        if let Err(e) = spotify::player::pause_playback(token, Some(&device_id)).await {
            warning!("Failed to pause after playback transfer: {}", e);
        }
    }
    // let the transfer propagate upstream before the command queries state
    sleep(Duration::from_millis(200)).await;

    Some(device_id)
}
