use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::scan::error::ProbeError;

/// Size of the single read used for the banner and for the `VRFY` reply.
pub const READ_BUFFER_SIZE: usize = 1024;

/// Opens the byte stream used for one candidate.
pub trait Dialer {
    type Conn: Read + Write;

    fn dial(&self, host: &str, port: u16, timeout: Duration) -> Result<Self::Conn, ProbeError>;
}

/// Plain TCP, no TLS.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpDialer;

impl Dialer for TcpDialer {
    type Conn = TcpStream;

    fn dial(&self, host: &str, port: u16, timeout: Duration) -> Result<TcpStream, ProbeError> {
        let target = format!("{host}:{port}");
        if timeout.is_zero() {
            // a non-blocking connect never completes synchronously
            return Err(ProbeError::connect(
                target,
                io::Error::new(io::ErrorKind::WouldBlock, "operation now in progress"),
            ));
        }
        let addrs: Vec<SocketAddr> = (host, port)
            .to_socket_addrs()
            .map_err(|err| ProbeError::Resolve {
                target: target.clone(),
                source: err,
            })?
            .collect();

        let mut last_err = None;
        for addr in &addrs {
            match TcpStream::connect_timeout(addr, timeout) {
                Ok(stream) => {
                    stream
                        .set_read_timeout(Some(timeout))
                        .map_err(ProbeError::transport)?;
                    stream
                        .set_write_timeout(Some(timeout))
                        .map_err(ProbeError::transport)?;
                    return Ok(stream);
                }
                Err(err) => last_err = Some(err),
            }
        }
        let err = last_err.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                "no socket address available",
            )
        });
        Err(ProbeError::connect(target, err))
    }
}

/// One connection, scoped to a single candidate. Dropping it closes the
/// underlying stream.
pub struct VrfySession<C> {
    conn: C,
}

impl<C: Read + Write> VrfySession<C> {
    pub fn open<D>(
        dialer: &D,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<Self, ProbeError>
    where
        D: Dialer<Conn = C>,
    {
        let conn = dialer.dial(host, port, timeout)?;
        Ok(Self { conn })
    }

    /// Read whatever the server sends first. Content is not validated.
    pub fn read_banner(&mut self) -> Result<String, ProbeError> {
        self.read_chunk()
    }

    /// Send `VRFY <candidate>` terminated by a bare LF. The candidate goes
    /// out verbatim.
    pub fn send_vrfy(&mut self, candidate: &str) -> Result<String, ProbeError> {
        let command = vrfy_command(candidate);
        self.conn
            .write_all(command.as_bytes())
            .map_err(ProbeError::transport)?;
        self.conn.flush().map_err(ProbeError::transport)?;
        Ok(command)
    }

    pub fn read_reply(&mut self) -> Result<String, ProbeError> {
        self.read_chunk()
    }

    fn read_chunk(&mut self) -> Result<String, ProbeError> {
        let mut buf = [0u8; READ_BUFFER_SIZE];
        let read = self.conn.read(&mut buf).map_err(ProbeError::transport)?;
        Ok(String::from_utf8_lossy(&buf[..read]).into_owned())
    }
}

pub fn vrfy_command(candidate: &str) -> String {
    format!("VRFY {candidate}\n")
}
