// Device control domain model - commands understood by the car
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Motor,
    Mode,
    Buzzer,
    Led,
    Camera,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveMode {
    Ultrasonic,
    Infrared,
    InfraredUltrasonic,
    Light,
    Manual,
}

impl DriveMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriveMode::Ultrasonic => "ultrasonic",
            DriveMode::Infrared => "infrared",
            DriveMode::InfraredUltrasonic => "infrared_ultrasonic",
            DriveMode::Light => "light",
            DriveMode::Manual => "manual",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "ultrasonic" => Some(DriveMode::Ultrasonic),
            "infrared" => Some(DriveMode::Infrared),
            "infrared_ultrasonic" => Some(DriveMode::InfraredUltrasonic),
            "light" => Some(DriveMode::Light),
            "manual" => Some(DriveMode::Manual),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Start,
    Stop,
    Forward,
    Backward,
    Left,
    Right,
    ManualStop,
    BuzzerOn,
    BuzzerOff,
    LedOn,
    LedOff,
    Led1On,
    Led1Off,
    Led2On,
    Led2Off,
    TakePhoto,
    Mode(DriveMode),
}

impl ControlCommand {
    pub fn device(&self) -> Device {
        match self {
            ControlCommand::Start
            | ControlCommand::Stop
            | ControlCommand::Forward
            | ControlCommand::Backward
            | ControlCommand::Left
            | ControlCommand::Right
            | ControlCommand::ManualStop => Device::Motor,
            ControlCommand::BuzzerOn | ControlCommand::BuzzerOff => Device::Buzzer,
            ControlCommand::LedOn
            | ControlCommand::LedOff
            | ControlCommand::Led1On
            | ControlCommand::Led1Off
            | ControlCommand::Led2On
            | ControlCommand::Led2Off => Device::Led,
            ControlCommand::TakePhoto => Device::Camera,
            ControlCommand::Mode(_) => Device::Mode,
        }
    }

    /// Wire value sent to the backend.
    pub fn value(&self) -> String {
        let fixed = match self {
            ControlCommand::Start => "start",
            ControlCommand::Stop => "stop",
            ControlCommand::Forward => "forward",
            ControlCommand::Backward => "backward",
            ControlCommand::Left => "left",
            ControlCommand::Right => "right",
            ControlCommand::ManualStop => "manual_stop",
            ControlCommand::BuzzerOn => "buzzer_on",
            ControlCommand::BuzzerOff => "buzzer_off",
            ControlCommand::LedOn => "led_on",
            ControlCommand::LedOff => "led_off",
            ControlCommand::Led1On => "led1_on",
            ControlCommand::Led1Off => "led1_off",
            ControlCommand::Led2On => "led2_on",
            ControlCommand::Led2Off => "led2_off",
            ControlCommand::TakePhoto => "take_photo",
            ControlCommand::Mode(mode) => return format!("mode_{}", mode.as_str()),
        };
        fixed.to_string()
    }

    pub fn request(&self) -> ControlRequest {
        ControlRequest {
            device: self.device(),
            value: self.value(),
        }
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown control command '{0}'")]
pub struct UnknownCommand(String);

impl FromStr for ControlCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let command = match normalized.as_str() {
            "start" => ControlCommand::Start,
            "stop" => ControlCommand::Stop,
            "forward" => ControlCommand::Forward,
            "backward" => ControlCommand::Backward,
            "left" => ControlCommand::Left,
            "right" => ControlCommand::Right,
            "manual_stop" => ControlCommand::ManualStop,
            "buzzer_on" => ControlCommand::BuzzerOn,
            "buzzer_off" => ControlCommand::BuzzerOff,
            "led_on" => ControlCommand::LedOn,
            "led_off" => ControlCommand::LedOff,
            "led1_on" => ControlCommand::Led1On,
            "led1_off" => ControlCommand::Led1Off,
            "led2_on" => ControlCommand::Led2On,
            "led2_off" => ControlCommand::Led2Off,
            "take_photo" | "capture" => ControlCommand::TakePhoto,
            other => other
                .strip_prefix("mode_")
                .and_then(DriveMode::parse)
                .map(ControlCommand::Mode)
                .ok_or_else(|| UnknownCommand(s.to_string()))?,
        };
        Ok(command)
    }
}

/// Body of `POST /api/control`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlRequest {
    pub device: Device,
    pub value: String,
}

/// Backend acknowledgement of a control request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ControlAck {
    pub status: String,
    #[serde(default)]
    pub msg: Option<String>,
}

impl ControlAck {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
