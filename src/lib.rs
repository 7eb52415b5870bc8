mod alu;
mod cpu_instruction;
pub mod loader;
pub mod memory;
mod operands;
mod processing_unit;
mod registers;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use alu::{AluError, AluOperation};
pub use cpu_instruction::{CPUInstruction, LogLine, MicrocodeError, Signal};
pub use loader::LoadError;
pub use memory::AddressableIO;
pub use memory::MemoryError;
pub use memory::RAM as Memory;
pub use operands::{OperandLayout, OperandResolution, ResolutionError};
pub use processing_unit::*;
pub use registers::{
    RegisterError, Registers, FLAG_EQUAL, FLAG_GREATER_THAN, FLAG_LESS_THAN, STACK_INIT_ADDR,
    STACK_POINTER,
};
