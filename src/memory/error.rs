use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MemoryError {
    ReadOverflow(usize, usize, usize),  // read len, address, memory size
    WriteOverflow(usize, usize, usize), // write len, address, memory size
    StackOverflow(u8),                  // stack pointer
    StackUnderflow(u8),                 // stack pointer
    Other(usize, &'static str),         // address, error message
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MemoryError::ReadOverflow(read_len, addr, total_len) => write!(
                f,
                "Could not READ {} bytes at address 0x{:02X}, memory size is 0x{:02X}.",
                read_len, addr, total_len
            ),
            MemoryError::WriteOverflow(write_len, addr, total_len) => write!(
                f,
                "Could not WRITE {} bytes at address 0x{:02X}, memory size is 0x{:02X}.",
                write_len, addr, total_len
            ),
            MemoryError::StackOverflow(sp) => write!(
                f,
                "Stack overflow: cannot push with stack pointer at 0x{:02X}.",
                sp
            ),
            MemoryError::StackUnderflow(sp) => write!(
                f,
                "Stack underflow: cannot pull with stack pointer at 0x{:02X}.",
                sp
            ),
            MemoryError::Other(addr, err_msg) => {
                write!(f, "Memory error @{:02X} with message: {}", addr, err_msg)
            }
        }
    }
}

impl error::Error for MemoryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
