use crate::domain::config::Config;
use crate::domain::device::{DeviceClient, Status};
use crate::domain::error::{DeviceError, DeviceResult};
use crate::infrastructure::udp::codec::{self, FrameError, FRAME_SIZE};
use async_trait::async_trait;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, info};

/// Device client talking to controllers over UDP.
///
/// Each request opens a fresh socket, sends one frame and waits for one
/// reply. Controllers with a configured address are addressed directly,
/// all others through the broadcast address.
#[derive(Debug, Clone)]
pub struct UdpDeviceClient {
    bind_address: SocketAddr,
    broadcast_address: SocketAddr,
    controllers: HashMap<u32, SocketAddr>,
    timeout: Duration,
}

fn parse_address(address: &str) -> DeviceResult<SocketAddr> {
    address
        .parse()
        .map_err(|_| DeviceError::InvalidAddress(address.to_string()))
}

impl UdpDeviceClient {
    pub fn new(bind_address: &str, broadcast_address: &str, timeout: Duration) -> DeviceResult<Self> {
        Ok(Self {
            bind_address: parse_address(bind_address)?,
            broadcast_address: parse_address(broadcast_address)?,
            controllers: HashMap::new(),
            timeout,
        })
    }

    /// Build a client from the addresses and controllers in a configuration
    pub fn from_config(config: &Config, timeout: Duration) -> DeviceResult<Self> {
        let mut client = Self::new(&config.bind_address, &config.broadcast_address, timeout)?;

        for controller in &config.controllers {
            if let Some(address) = &controller.address {
                client = client.with_controller(controller.serial_number, parse_address(address)?);
            }
        }

        Ok(client)
    }

    /// Address a controller directly instead of by broadcast
    pub fn with_controller(mut self, serial_number: u32, address: SocketAddr) -> Self {
        self.controllers.insert(serial_number, address);
        self
    }

    fn destination(&self, serial_number: u32) -> SocketAddr {
        self.controllers
            .get(&serial_number)
            .copied()
            .unwrap_or(self.broadcast_address)
    }

    async fn exchange(&self, serial_number: u32, request: &[u8]) -> DeviceResult<Vec<u8>> {
        let destination = self.destination(serial_number);
        let socket = UdpSocket::bind(self.bind_address).await?;
        if destination == self.broadcast_address {
            socket.set_broadcast(true)?;
        }

        debug!("Sent {} bytes to {}: {}", request.len(), destination, hex::encode(request));
        socket.send_to(request, destination).await?;

        let mut buffer = [0u8; 1024];
        let (n, from) = tokio::time::timeout(self.timeout, socket.recv_from(&mut buffer))
            .await
            .map_err(|_| DeviceError::Timeout {
                serial_number,
                timeout_ms: self.timeout.as_millis() as u64,
            })??;

        debug!("Received {} bytes from {}: {}", n, from, hex::encode(&buffer[..n]));
        if n != FRAME_SIZE {
            debug!("Unexpected reply length {} from {}", n, from);
        }

        Ok(buffer[..n].to_vec())
    }

    fn check(
        &self,
        serial_number: u32,
        reply: Result<u32, FrameError>,
    ) -> DeviceResult<()> {
        let actual = reply.map_err(|e| DeviceError::InvalidReply {
            from: self.destination(serial_number),
            message: e.to_string(),
        })?;

        if actual != serial_number {
            return Err(DeviceError::SerialNumberMismatch { expected: serial_number, actual });
        }
        Ok(())
    }
}

#[async_trait]
impl DeviceClient for UdpDeviceClient {
    async fn get_status(&self, serial_number: u32) -> DeviceResult<Status> {
        let reply = self
            .exchange(serial_number, &codec::get_status_request(serial_number))
            .await?;

        self.check(serial_number, codec::decode_header(&reply, codec::GET_STATUS))?;
        let status = codec::decode_status(&reply).map_err(|e| DeviceError::InvalidReply {
            from: self.destination(serial_number),
            message: e.to_string(),
        })?;

        info!("Retrieved status for controller {}", serial_number);
        Ok(status)
    }

    async fn set_pc_control(&self, serial_number: u32, enable: bool) -> DeviceResult<bool> {
        let reply = self
            .exchange(serial_number, &codec::set_pc_control_request(serial_number, enable))
            .await?;

        self.check(serial_number, codec::decode_header(&reply, codec::SET_PC_CONTROL))?;
        let (_, accepted) = codec::decode_set_pc_control(&reply).map_err(|e| DeviceError::InvalidReply {
            from: self.destination(serial_number),
            message: e.to_string(),
        })?;

        info!("Controller {} set-pc-control {} accepted: {}", serial_number, enable, accepted);
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ControllerConfig;

    /// Answer one request on a local socket with a reply built from the request
    async fn responder<F>(build: F) -> SocketAddr
    where
        F: FnOnce([u8; FRAME_SIZE]) -> [u8; FRAME_SIZE] + Send + 'static,
    {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let address = socket.local_addr().unwrap();

        tokio::spawn(async move {
            let mut request = [0u8; FRAME_SIZE];
            let (_, from) = socket.recv_from(&mut request).await.unwrap();
            socket.send_to(&build(request), from).await.unwrap();
        });

        address
    }

    fn client(address: SocketAddr) -> UdpDeviceClient {
        UdpDeviceClient::new("127.0.0.1:0", "255.255.255.255:60000", Duration::from_millis(500))
            .unwrap()
            .with_controller(405419896, address)
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            controllers: vec![
                ControllerConfig {
                    serial_number: 405419896,
                    address: Some("192.168.1.100:60000".to_string()),
                    doors: Vec::new(),
                },
                ControllerConfig { serial_number: 303986753, address: None, doors: Vec::new() },
            ],
            ..Config::default()
        };

        let client = UdpDeviceClient::from_config(&config, Duration::from_secs(1)).unwrap();

        assert_eq!(client.destination(405419896), "192.168.1.100:60000".parse().unwrap());
        assert_eq!(client.destination(303986753), "255.255.255.255:60000".parse().unwrap());
    }

    #[test]
    fn test_invalid_address() {
        let err = UdpDeviceClient::new("localhost", "255.255.255.255:60000", Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, DeviceError::InvalidAddress(a) if a == "localhost"));
    }

    #[tokio::test]
    async fn test_set_pc_control_exchange() {
        let address = responder(|mut request| {
            assert_eq!(request[12], 0x01);
            request[8] = 0x01;
            request
        })
        .await;

        assert!(client(address).set_pc_control(405419896, true).await.unwrap());
    }

    #[tokio::test]
    async fn test_serial_number_mismatch() {
        let address = responder(|mut request| {
            request[4..8].copy_from_slice(&303986753u32.to_le_bytes());
            request
        })
        .await;

        let err = client(address).get_status(405419896).await.unwrap_err();
        assert!(matches!(
            err,
            DeviceError::SerialNumberMismatch { expected: 405419896, actual: 303986753 }
        ));
    }

    #[tokio::test]
    async fn test_timeout() {
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let client = UdpDeviceClient::new("127.0.0.1:0", "255.255.255.255:60000", Duration::from_millis(50))
            .unwrap()
            .with_controller(405419896, silent.local_addr().unwrap());

        let err = client.get_status(405419896).await.unwrap_err();
        assert!(matches!(err, DeviceError::Timeout { serial_number: 405419896, timeout_ms: 50 }));
    }
}
