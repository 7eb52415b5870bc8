use crate::alu;
use crate::cpu_instruction::{CPUInstruction, LogLine, Signal};
use crate::memory::RAM as Memory;
use crate::memory::MemoryError;
use crate::operands::*;
use crate::registers::Registers;

mod error;
pub use error::{MicrocodeError, Result};

mod add;
mod call;
mod cmp;
mod hlt;
mod jeq;
mod jmp;
mod jne;
mod ldi;
mod mul;
mod pop;
mod prn;
mod push;
mod ret;

pub use add::add;
pub use call::call;
pub use cmp::cmp;
pub use hlt::hlt;
pub use jeq::jeq;
pub use jmp::jmp;
pub use jne::jne;
pub use ldi::ldi;
pub use mul::mul;
pub use pop::pop;
pub use prn::prn;
pub use push::push;
pub use ret::ret;
