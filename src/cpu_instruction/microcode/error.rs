use crate::alu;
use crate::memory;
use crate::operands;
use crate::registers;
use std::error;
use std::fmt;

#[derive(Debug)]
pub enum MicrocodeError {
    // ↓ when an overflow problem occures during the microcode operation
    MemoryOverflow(memory::MemoryError),
    Resolution(operands::ResolutionError),
    Register(registers::RegisterError),
    Alu(alu::AluError),
}

pub type Result<T> = std::result::Result<T, MicrocodeError>;

impl fmt::Display for MicrocodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MicrocodeError::MemoryOverflow(e) => {
                write!(f, "memory overflow during microcode operation: {}", e)
            }
            MicrocodeError::Resolution(e) => {
                write!(f, "resolution error caught in microcode operation: {}", e)
            }
            MicrocodeError::Register(e) => {
                write!(f, "register error caught in microcode operation: {}", e)
            }
            MicrocodeError::Alu(e) => {
                write!(f, "ALU error caught in microcode operation: {}", e)
            }
        }
    }
}

impl error::Error for MicrocodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            MicrocodeError::MemoryOverflow(e) => Some(e),
            MicrocodeError::Resolution(e) => Some(e),
            MicrocodeError::Register(e) => Some(e),
            MicrocodeError::Alu(e) => Some(e),
        }
    }
}

impl std::convert::From<operands::ResolutionError> for MicrocodeError {
    fn from(err: operands::ResolutionError) -> MicrocodeError {
        MicrocodeError::Resolution(err)
    }
}

impl std::convert::From<memory::MemoryError> for MicrocodeError {
    fn from(err: memory::MemoryError) -> MicrocodeError {
        MicrocodeError::MemoryOverflow(err)
    }
}

impl std::convert::From<registers::RegisterError> for MicrocodeError {
    fn from(err: registers::RegisterError) -> MicrocodeError {
        MicrocodeError::Register(err)
    }
}

impl std::convert::From<alu::AluError> for MicrocodeError {
    fn from(err: alu::AluError) -> MicrocodeError {
        MicrocodeError::Alu(err)
    }
}
