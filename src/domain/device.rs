use crate::domain::error::DeviceResult;
use async_trait::async_trait;
use std::fmt;

/// Operations a controller exposes to the commands.
///
/// `Err` is a communication failure. A completed call where the controller
/// declined the request is reported through the `Ok` value instead.
#[async_trait]
pub trait DeviceClient: Send + Sync {
    /// Retrieve the current controller status
    async fn get_status(&self, serial_number: u32) -> DeviceResult<Status>;

    /// Enable or disable remote access control. Returns whether the
    /// controller accepted the change.
    async fn set_pc_control(&self, serial_number: u32, enable: bool) -> DeviceResult<bool>;
}

/// Controller status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub serial_number: u32,
    pub event: Option<Event>,
    /// Door open sensors, doors 1-4
    pub doors: [bool; 4],
    /// Door exit buttons, doors 1-4
    pub buttons: [bool; 4],
    pub system_error: u8,
    pub system_datetime: Option<String>,
    pub sequence_id: u32,
    pub special_info: u8,
    pub relays: u8,
    pub inputs: u8,
}

/// Most recent event recorded by a controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub index: u32,
    pub event_type: u8,
    pub granted: bool,
    pub door: u8,
    pub direction: u8,
    pub card_number: u32,
    pub timestamp: Option<String>,
    pub reason: u8,
}

fn flags(values: &[bool; 4]) -> String {
    values
        .iter()
        .map(|v| if *v { "1" } else { "0" })
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} doors:[{}] buttons:[{}] error:{} seqno:{} info:{} relays:{:#04x} inputs:{:#04x}",
            self.serial_number,
            self.system_datetime.as_deref().unwrap_or("-"),
            flags(&self.doors),
            flags(&self.buttons),
            self.system_error,
            self.sequence_id,
            self.special_info,
            self.relays,
            self.inputs,
        )?;

        match &self.event {
            Some(event) => write!(f, "\n  {}", event),
            None => write!(f, "\n  no events"),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "event:{} type:{} granted:{} door:{} direction:{} card:{} timestamp:{} reason:{}",
            self.index,
            self.event_type,
            self.granted,
            self.door,
            self.direction,
            self.card_number,
            self.timestamp.as_deref().unwrap_or("-"),
            self.reason,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status() -> Status {
        Status {
            serial_number: 405419896,
            event: None,
            doors: [true, false, false, false],
            buttons: [false, false, false, true],
            system_error: 0,
            system_datetime: Some("2019-08-10 10:28:32".to_string()),
            sequence_id: 7,
            special_info: 0,
            relays: 0x01,
            inputs: 0x00,
        }
    }

    #[test]
    fn test_status_display() {
        let text = status().to_string();
        assert!(text.starts_with("405419896 2019-08-10 10:28:32"));
        assert!(text.contains("doors:[1 0 0 0]"));
        assert!(text.contains("buttons:[0 0 0 1]"));
        assert!(text.contains("relays:0x01"));
        assert!(text.ends_with("no events"));
    }

    #[test]
    fn test_status_display_with_event() {
        let mut status = status();
        status.event = Some(Event {
            index: 69,
            event_type: 1,
            granted: true,
            door: 3,
            direction: 1,
            card_number: 8165537,
            timestamp: Some("2019-08-10 10:28:00".to_string()),
            reason: 1,
        });

        let text = status.to_string();
        assert!(text.contains("event:69"));
        assert!(text.contains("card:8165537"));
        assert!(text.contains("granted:true"));
    }
}
