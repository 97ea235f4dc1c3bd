//! Cadre des messages sur le fil : chaque message JSON est précédé de
//! sa taille en octets, un `u32` little-endian. Les fonctions sont
//! génériques sur `Read`/`Write` pour être testables sans socket.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde_json::Value;
use std::io::{self, Read, Write};

/// Envoie un message texte, taille en tête.
pub fn send_message<W: Write>(stream: &mut W, message: &str) -> io::Result<()> {
    let bytes = message.as_bytes();
    stream.write_u32::<LittleEndian>(bytes.len() as u32)?;
    stream.write_all(bytes)?;
    Ok(())
}

/// Reçoit un message texte, taille en tête.
pub fn receive_message<R: Read>(stream: &mut R) -> io::Result<String> {
    let size = stream.read_u32::<LittleEndian>()?;
    let mut buffer = vec![0; size as usize];
    stream.read_exact(&mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid data: {}", e)))
}

/// Envoie une valeur JSON sérialisée.
pub fn send_json<W: Write>(stream: &mut W, value: &Value) -> io::Result<()> {
    send_message(stream, &value.to_string())
}

/// Reçoit et décode une valeur JSON.
pub fn receive_json<R: Read>(stream: &mut R) -> io::Result<Value> {
    let msg = receive_message(stream)?;
    serde_json::from_str(&msg)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid JSON: {}", e)))
}
