// UDP module - Controller requests over UDP
pub mod client;
pub mod codec;

pub use client::UdpDeviceClient;
