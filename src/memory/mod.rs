use std::fmt;

mod error;
mod ram;

pub use error::MemoryError;
pub use ram::RAM;

pub const MEMMAX: usize = 255;

/*
 * AddressableIO
 * this trait defines the interface for all memory systems
 */
pub trait AddressableIO {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError>;
    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError>;
    fn get_size(&self) -> usize;
}

/*
 * hexdump
 * format the whole content of a memory system as lines of 16 bytes.
 */
pub fn hexdump(memory: &impl AddressableIO) -> Result<Vec<String>, MemoryError> {
    let bytes = memory.read(0, memory.get_size())?;

    Ok(bytes
        .chunks(16)
        .enumerate()
        .map(|(lineno, chunk)| {
            let (left, right) = chunk.split_at(chunk.len().min(8));
            format!(
                "#0x{:02X}: {} {}",
                lineno * 16,
                spaced_hex(left),
                spaced_hex(right)
            )
        })
        .collect())
}

fn spaced_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode([*b]))
        .collect::<Vec<String>>()
        .join(" ")
}

impl fmt::Debug for RAM {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match hexdump(self) {
            Ok(lines) => write!(f, "{}", lines.join("\n")),
            Err(e) => write!(f, "<{}>", e),
        }
    }
}
